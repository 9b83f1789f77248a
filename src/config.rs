use anyhow::{ensure, Result};

// Model constants from the reference drive geometry. Everything here can be
// overridden through the builders below; nothing else in the crate hardcodes
// these numbers.
pub mod defaults {
    pub const TRACKS: u32 = 500;
    pub const SECTORS_PER_TRACK: u32 = 100;
    pub const MAX_SEEK_TIME_MS: u64 = 130;
    pub const TRACK_SEEK_TIME_MS: u64 = 10;
    pub const ROTATIONAL_LATENCY_MS: u64 = 8;

    pub const EXPONENTIAL_LAMBDA: f64 = 0.1;
    pub const UNIFORM_MIN_REQUESTS: u32 = 2;
    pub const UNIFORM_MAX_REQUESTS: u32 = 5;

    pub const ISSUERS: u32 = 3;
    pub const MAX_REQUESTS: u32 = 20;
}

// Geometry and timing of the simulated drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskParams {
    pub tracks: u32,
    pub sectors_per_track: u32,
    pub track_seek_time_ms: u64,
    pub max_seek_time_ms: u64,
    pub rotational_latency_ms: u64,
}

impl Default for DiskParams {
    fn default() -> Self {
        DiskParams {
            tracks: defaults::TRACKS,
            sectors_per_track: defaults::SECTORS_PER_TRACK,
            track_seek_time_ms: defaults::TRACK_SEEK_TIME_MS,
            max_seek_time_ms: defaults::MAX_SEEK_TIME_MS,
            rotational_latency_ms: defaults::ROTATIONAL_LATENCY_MS,
        }
    }
}

impl DiskParams {
    pub fn tracks(mut self, tracks: u32) -> Self {
        self.tracks = tracks;
        self
    }

    pub fn sectors_per_track(mut self, sectors: u32) -> Self {
        self.sectors_per_track = sectors;
        self
    }

    pub fn track_seek_time_ms(mut self, ms: u64) -> Self {
        self.track_seek_time_ms = ms;
        self
    }

    pub fn max_seek_time_ms(mut self, ms: u64) -> Self {
        self.max_seek_time_ms = ms;
        self
    }

    pub fn rotational_latency_ms(mut self, ms: u64) -> Self {
        self.rotational_latency_ms = ms;
        self
    }

    // Number of addressable logical blocks. Valid block ids are [0, total_blocks).
    pub fn total_blocks(&self) -> u32 {
        self.tracks * self.sectors_per_track
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tracks > 0, "disk must have at least one track");
        ensure!(
            self.sectors_per_track > 0,
            "disk must have at least one sector per track"
        );
        Ok(())
    }
}

// Knobs for one simulation run: how many arrival rounds happen, how many
// processes issue requests, and how the synthetic workload samples its bursts.
#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    // Arrival rounds per run.
    pub rounds: u32,
    // Size of the fixed issuer roster.
    pub issuers: u32,
    // RNG seed; replaying the same seed against every policy gives each one
    // the identical workload.
    pub seed: u64,
    // Mean of the exponential component of the per-round burst size.
    pub burst_lambda: f64,
    pub min_burst: u32,
    pub max_burst: u32,
}

impl Default for SimOptions {
    fn default() -> Self {
        SimOptions {
            rounds: defaults::MAX_REQUESTS,
            issuers: defaults::ISSUERS,
            seed: 0,
            burst_lambda: defaults::EXPONENTIAL_LAMBDA,
            min_burst: defaults::UNIFORM_MIN_REQUESTS,
            max_burst: defaults::UNIFORM_MAX_REQUESTS,
        }
    }
}

impl SimOptions {
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn issuers(mut self, issuers: u32) -> Self {
        self.issuers = issuers;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn burst_lambda(mut self, lambda: f64) -> Self {
        self.burst_lambda = lambda;
        self
    }

    pub fn burst_range(mut self, min: u32, max: u32) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.issuers > 0, "at least one issuer is required");
        ensure!(
            self.burst_lambda > 0.0,
            "burst lambda must be positive, got {}",
            self.burst_lambda
        );
        ensure!(
            self.min_burst <= self.max_burst,
            "burst range is inverted: {}..{}",
            self.min_burst,
            self.max_burst
        );
        Ok(())
    }
}
