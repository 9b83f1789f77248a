#[cfg(test)]
pub mod test {
    use std::collections::VecDeque;

    use crate::config::{DiskParams, SimOptions};
    use crate::request::{IoKind, IoRequest, ProcessId};
    use crate::sched::PolicyKind;
    use crate::sim::Simulation;
    use crate::workload::{RequestSource, SyntheticWorkload};

    // Hands out pre-scripted batches, one per next_batch call.
    struct ScriptedSource {
        batches: VecDeque<Vec<IoRequest>>,
    }

    impl ScriptedSource {
        fn new(batches: Vec<Vec<IoRequest>>) -> Self {
            ScriptedSource {
                batches: batches.into(),
            }
        }
    }

    impl RequestSource for ScriptedSource {
        fn next_batch(&mut self, _issuer: ProcessId) -> Vec<IoRequest> {
            self.batches.pop_front().unwrap_or_default()
        }
    }

    fn at_track(track: u32) -> IoRequest {
        IoRequest::new(0, IoKind::Read, track * 100)
    }

    #[test]
    fn sstf_services_the_reference_scenario() {
        let params = DiskParams::default();
        let mut source = ScriptedSource::new(vec![vec![
            at_track(50),
            at_track(499),
            at_track(10),
        ]]);

        let simulation = Simulation::new(params, PolicyKind::Sstf.build(&params), 1);
        let records = simulation.run(&mut source, 1);

        let tracks: Vec<u32> = records
            .iter()
            .map(|record| record.request.track(params.sectors_per_track))
            .collect();
        assert_eq!(tracks, vec![10, 50, 499]);

        // Head starts at 0: 10 tracks * 10 ms + 8 ms settle.
        assert_eq!(records[0].service_time_ms, 108);
        assert_eq!(records[0].completed_at_ms, 108);

        // Head advanced to 10: 40 tracks away from 50.
        assert_eq!(records[1].service_time_ms, 408);
        assert_eq!(records[1].completed_at_ms, 516);

        // 449 tracks, below the full-stroke clamp distance.
        assert_eq!(records[2].service_time_ms, 4498);
        assert_eq!(records[2].completed_at_ms, 5014);
    }

    #[test]
    fn fcfs_services_in_arrival_order() {
        let params = DiskParams::default();
        let mut source = ScriptedSource::new(vec![vec![
            at_track(50),
            at_track(499),
            at_track(10),
        ]]);

        let simulation = Simulation::new(params, PolicyKind::Fcfs.build(&params), 1);
        let records = simulation.run(&mut source, 1);

        let tracks: Vec<u32> = records
            .iter()
            .map(|record| record.request.track(params.sectors_per_track))
            .collect();
        assert_eq!(tracks, vec![50, 499, 10]);
        assert_eq!(records[0].service_time_ms, 508);
    }

    #[test]
    fn rounds_drain_fully_before_the_next_arrival() {
        let params = DiskParams::default();
        // Two rounds for a single issuer. The second round's request is closer
        // to track 0 than the first round's, but it cannot jump the queue
        // because round one is fully drained first.
        let mut source = ScriptedSource::new(vec![
            vec![at_track(400), at_track(300)],
            vec![at_track(1)],
        ]);

        let simulation = Simulation::new(params, PolicyKind::Sstf.build(&params), 1);
        let records = simulation.run(&mut source, 2);

        let tracks: Vec<u32> = records
            .iter()
            .map(|record| record.request.track(params.sectors_per_track))
            .collect();
        assert_eq!(tracks, vec![300, 400, 1]);
    }

    #[test]
    fn completion_timestamps_are_monotonic_for_every_policy() {
        let params = DiskParams::default();
        let options = SimOptions::default().rounds(5).seed(42);

        for policy in PolicyKind::ALL {
            let mut workload = SyntheticWorkload::new(&params, &options).unwrap();
            let simulation = Simulation::new(params, policy.build(&params), options.issuers);
            let records = simulation.run(&mut workload, options.rounds);

            assert!(!records.is_empty());
            for pair in records.windows(2) {
                assert!(
                    pair[0].completed_at_ms <= pair[1].completed_at_ms,
                    "{} produced a decreasing timestamp",
                    policy.as_str()
                );
            }
        }
    }

    #[test]
    fn same_seed_gives_every_policy_the_same_request_multiset() {
        let params = DiskParams::default();
        let options = SimOptions::default().rounds(3).seed(7);

        let mut baseline: Option<Vec<(u32, u32)>> = None;
        for policy in PolicyKind::ALL {
            let mut workload = SyntheticWorkload::new(&params, &options).unwrap();
            let simulation = Simulation::new(params, policy.build(&params), options.issuers);
            let records = simulation.run(&mut workload, options.rounds);

            let mut dispatched: Vec<(u32, u32)> = records
                .iter()
                .map(|record| (record.request.issuer, record.request.block))
                .collect();
            dispatched.sort_unstable();

            match &baseline {
                None => baseline = Some(dispatched),
                Some(expected) => assert_eq!(&dispatched, expected),
            }
        }
    }

    #[test]
    fn service_times_sum_to_the_final_timestamp() {
        let params = DiskParams::default();
        let options = SimOptions::default().rounds(4).seed(3);

        let mut workload = SyntheticWorkload::new(&params, &options).unwrap();
        let simulation = Simulation::new(params, PolicyKind::CLook.build(&params), options.issuers);
        let records = simulation.run(&mut workload, options.rounds);

        let total: u64 = records.iter().map(|record| record.service_time_ms).sum();
        assert_eq!(total, records.last().unwrap().completed_at_ms);
    }
}
