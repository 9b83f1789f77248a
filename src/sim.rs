use log::debug;

use crate::config::DiskParams;
use crate::disk::model::HardDrive;
use crate::request::{IoRequest, ProcessId};
use crate::sched::IoScheduler;
use crate::workload::RequestSource;

// Outcome of one dispatched request. Appended to the run's record sequence
// right after the disk services the request and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRecord {
    pub request: IoRequest,
    // Seek plus rotational settle for this dispatch.
    pub service_time_ms: u64,
    // Cumulative simulated time at which the request finished.
    pub completed_at_ms: u64,
}

// Drives one policy against one drive: rounds of request arrival, each
// followed by a full drain of the pending set. Arrivals never interleave with
// dispatch inside a round, which keeps a run deterministic for a
// deterministic request source.
pub struct Simulation {
    disk: HardDrive,
    scheduler: Box<dyn IoScheduler>,
    roster: Vec<ProcessId>,
    last_completion: u64,
    records: Vec<CompletionRecord>,
}

impl Simulation {
    // Fresh run state: head at track 0, empty pending set, clock at zero.
    pub fn new(params: DiskParams, scheduler: Box<dyn IoScheduler>, issuers: u32) -> Self {
        Simulation {
            disk: HardDrive::new(params),
            scheduler,
            roster: (0..issuers).collect(),
            last_completion: 0,
            records: Vec::new(),
        }
    }

    // Runs `rounds` arrival/drain cycles and returns the completion records
    // in dispatch order. `completed_at_ms` is non-decreasing across the
    // returned sequence.
    pub fn run(mut self, source: &mut dyn RequestSource, rounds: u32) -> Vec<CompletionRecord> {
        for round in 0..rounds {
            let arrived = self.arrival_phase(source);
            debug!("round {}: {} requests arrived", round, arrived);
            self.drain_phase();
        }
        self.records
    }

    fn arrival_phase(&mut self, source: &mut dyn RequestSource) -> usize {
        let mut arrived = 0;
        for &issuer in &self.roster {
            for request in source.next_batch(issuer) {
                self.scheduler.enqueue(request);
                arrived += 1;
            }
        }
        arrived
    }

    fn drain_phase(&mut self) {
        while !self.scheduler.is_empty() {
            let request = self.scheduler.dispatch_next(self.disk.position());
            let target = request.track(self.disk.params().sectors_per_track);
            let service_time_ms = self.disk.seek_and_service(target);
            let completed_at_ms = self.last_completion + service_time_ms;

            self.records.push(CompletionRecord {
                request,
                service_time_ms,
                completed_at_ms,
            });
            self.last_completion = completed_at_ms;
        }
    }
}
