use crate::request::IoRequest;

use super::{IoScheduler, EMPTY_DISPATCH};

// Circular LOOK: sweep upward from the head and dispatch the first pending
// request at or beyond it; once the sweep has passed every pending block,
// wrap around to the lowest one. There is no backward sweep. Ties on equal
// block fall out of the stable sort, i.e. arrival order.
#[derive(Debug)]
pub struct CLook {
    pending: Vec<IoRequest>,
    sectors_per_track: u32,
}

impl CLook {
    pub fn new(sectors_per_track: u32) -> Self {
        CLook {
            pending: Vec::new(),
            sectors_per_track,
        }
    }
}

impl IoScheduler for CLook {
    fn enqueue(&mut self, request: IoRequest) {
        self.pending.push(request);
    }

    fn dispatch_next(&mut self, current_track: u32) -> IoRequest {
        assert!(!self.pending.is_empty(), "{}", EMPTY_DISPATCH);

        let mut order: Vec<usize> = (0..self.pending.len()).collect();
        order.sort_by_key(|&index| self.pending[index].block);

        let selected = order
            .iter()
            .copied()
            .find(|&index| self.pending[index].track(self.sectors_per_track) >= current_track)
            .unwrap_or(order[0]);

        self.pending.remove(selected)
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}
