use crate::request::IoRequest;

use super::{IoScheduler, EMPTY_DISPATCH};

// Shortest-Seek-Time-First: scan the whole pending set and dispatch the
// request whose track is nearest to the head. Ties go to the earliest
// enqueued of the minimal candidates; the scan never reorders the pending
// set, so the tie-break is stable across calls. O(n) per dispatch.
#[derive(Debug)]
pub struct Sstf {
    pending: Vec<IoRequest>,
    sectors_per_track: u32,
}

impl Sstf {
    pub fn new(sectors_per_track: u32) -> Self {
        Sstf {
            pending: Vec::new(),
            sectors_per_track,
        }
    }
}

impl IoScheduler for Sstf {
    fn enqueue(&mut self, request: IoRequest) {
        self.pending.push(request);
    }

    fn dispatch_next(&mut self, current_track: u32) -> IoRequest {
        assert!(!self.pending.is_empty(), "{}", EMPTY_DISPATCH);

        let mut selected = 0;
        let mut min_distance =
            current_track.abs_diff(self.pending[0].track(self.sectors_per_track));

        for (index, request) in self.pending.iter().enumerate().skip(1) {
            let distance = current_track.abs_diff(request.track(self.sectors_per_track));
            if distance < min_distance {
                min_distance = distance;
                selected = index;
            }
        }

        // Vec::remove keeps the relative order of the remaining requests.
        self.pending.remove(selected)
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}
