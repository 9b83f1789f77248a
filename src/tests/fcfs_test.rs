#[cfg(test)]
pub mod test {
    use crate::request::{IoKind, IoRequest};
    use crate::sched::fcfs::Fcfs;
    use crate::sched::IoScheduler;

    fn request(issuer: u32, block: u32) -> IoRequest {
        IoRequest::new(issuer, IoKind::Read, block)
    }

    #[test]
    fn dispatches_in_arrival_order() {
        let mut scheduler = Fcfs::new();

        // Blocks deliberately out of order; FCFS must ignore them.
        let arrivals = [request(0, 4000), request(1, 10), request(2, 49000)];
        for req in arrivals {
            scheduler.enqueue(req);
        }

        for expected in arrivals {
            assert_eq!(scheduler.dispatch_next(250), expected);
        }
        assert!(scheduler.is_empty());
    }

    #[test]
    fn head_position_is_irrelevant() {
        let mut scheduler = Fcfs::new();
        scheduler.enqueue(request(0, 100));
        scheduler.enqueue(request(0, 200));

        assert_eq!(scheduler.dispatch_next(499).block, 100);
        assert_eq!(scheduler.dispatch_next(0).block, 200);
    }

    #[test]
    fn duplicates_are_dispatched_separately() {
        let mut scheduler = Fcfs::new();
        let req = request(7, 1234);
        scheduler.enqueue(req);
        scheduler.enqueue(req);

        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.dispatch_next(0), req);
        assert_eq!(scheduler.dispatch_next(0), req);
        assert!(scheduler.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty pending set")]
    fn dispatch_on_empty_panics() {
        let mut scheduler = Fcfs::new();
        scheduler.dispatch_next(0);
    }
}
