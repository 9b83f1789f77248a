use crate::config::DiskParams;
use crate::request::IoRequest;

pub mod clook;
pub mod fcfs;
pub mod sstf;

use clook::CLook;
use fcfs::Fcfs;
use sstf::Sstf;

// Common contract for the queue-management policies. A policy exclusively
// owns its pending set; the simulation loop only touches it through these
// three operations.
//
// `dispatch_next` takes the head's current track explicitly so that each
// policy is a pure function of (pending set, head) with no hidden reference
// position carried between calls. It removes and returns exactly one request;
// every enqueued request comes back from exactly one dispatch. Calling it on
// an empty pending set is a contract violation and panics, so callers check
// `is_empty` first.
pub trait IoScheduler {
    fn enqueue(&mut self, request: IoRequest);

    fn dispatch_next(&mut self, current_track: u32) -> IoRequest;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

pub const EMPTY_DISPATCH: &str = "dispatch_next called on an empty pending set";

// The closed set of policies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fcfs,
    Sstf,
    CLook,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fcfs, PolicyKind::Sstf, PolicyKind::CLook];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sstf => "SSTF",
            PolicyKind::CLook => "C-LOOK",
        }
    }

    // Fresh scheduler instance with an empty pending set.
    pub fn build(&self, params: &DiskParams) -> Box<dyn IoScheduler> {
        match self {
            PolicyKind::Fcfs => Box::new(Fcfs::new()),
            PolicyKind::Sstf => Box::new(Sstf::new(params.sectors_per_track)),
            PolicyKind::CLook => Box::new(CLook::new(params.sectors_per_track)),
        }
    }
}
