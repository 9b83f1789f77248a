use std::collections::VecDeque;

use crate::request::IoRequest;

use super::{IoScheduler, EMPTY_DISPATCH};

// First-Come-First-Served: dispatch strictly in arrival order. The head
// position plays no part, so insertion order is already a total order and no
// tie-break is needed.
#[derive(Debug, Default)]
pub struct Fcfs {
    queue: VecDeque<IoRequest>,
}

impl Fcfs {
    pub fn new() -> Self {
        Fcfs {
            queue: VecDeque::new(),
        }
    }
}

impl IoScheduler for Fcfs {
    fn enqueue(&mut self, request: IoRequest) {
        self.queue.push_back(request);
    }

    fn dispatch_next(&mut self, _current_track: u32) -> IoRequest {
        self.queue.pop_front().expect(EMPTY_DISPATCH)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
