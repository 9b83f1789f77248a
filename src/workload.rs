use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::config::{DiskParams, SimOptions};
use crate::request::{IoKind, IoRequest, ProcessId};

// The request-source side of the simulation boundary. The loop calls this
// once per (issuer, round); the returned batch may be empty.
pub trait RequestSource {
    fn next_batch(&mut self, issuer: ProcessId) -> Vec<IoRequest>;
}

// Seeded synthetic load: burst sizes drawn from an exponential distribution
// on top of a fixed floor, blocks uniform over the whole disk, READ/WRITE
// picked by coin flip. Rebuilding with the same seed replays the identical
// request stream, which is what makes cross-policy comparisons meaningful.
pub struct SyntheticWorkload {
    rng: StdRng,
    burst: Exp<f64>,
    min_burst: u32,
    max_burst: u32,
    total_blocks: u32,
}

impl SyntheticWorkload {
    pub fn new(params: &DiskParams, options: &SimOptions) -> Result<Self> {
        params.validate()?;
        options.validate()?;

        // `burst_lambda` is the mean of the exponential component; Exp::new
        // takes a rate, so invert.
        let burst = Exp::new(1.0 / options.burst_lambda)
            .with_context(|| format!("bad burst lambda {}", options.burst_lambda))?;

        Ok(SyntheticWorkload {
            rng: StdRng::seed_from_u64(options.seed),
            burst,
            min_burst: options.min_burst,
            max_burst: options.max_burst,
            total_blocks: params.total_blocks(),
        })
    }
}

impl RequestSource for SyntheticWorkload {
    fn next_batch(&mut self, issuer: ProcessId) -> Vec<IoRequest> {
        let sampled = self.burst.sample(&mut self.rng) + f64::from(self.min_burst);
        let count = (sampled as u32).min(self.max_burst);

        (0..count)
            .map(|_| {
                let kind = if self.rng.gen_bool(0.5) {
                    IoKind::Read
                } else {
                    IoKind::Write
                };
                IoRequest::new(issuer, kind, self.rng.gen_range(0..self.total_blocks))
            })
            .collect()
    }
}
