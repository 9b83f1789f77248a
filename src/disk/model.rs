use crate::config::DiskParams;

// Simulated drive head. The head position is only ever moved by
// `seek_and_service` and persists across dispatches.
#[derive(Debug)]
pub struct HardDrive {
    params: DiskParams,
    position: u32,
}

impl HardDrive {
    pub fn new(params: DiskParams) -> Self {
        HardDrive { params, position: 0 }
    }

    // Current head track, in [0, tracks).
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn params(&self) -> &DiskParams {
        &self.params
    }

    // Moves the head to `target_track` and returns the elapsed service time
    // in milliseconds: seek cost plus the fixed rotational settle.
    //
    // A full-stroke seek (distance == tracks - 1) costs exactly
    // `max_seek_time_ms` instead of the linear cost. Only that exact distance
    // is clamped; shorter seeks stay linear even when they would exceed the
    // clamp value.
    //
    // Panics if `target_track` is outside the disk geometry; that is a bug in
    // the caller, not a recoverable condition.
    pub fn seek_and_service(&mut self, target_track: u32) -> u64 {
        assert!(
            target_track < self.params.tracks,
            "seek target {} outside disk geometry ({} tracks)",
            target_track,
            self.params.tracks
        );

        let distance = u64::from(self.position.abs_diff(target_track));
        let seek_time = if distance == u64::from(self.params.tracks - 1) {
            self.params.max_seek_time_ms
        } else {
            distance * self.params.track_seek_time_ms
        };

        self.position = target_track;

        seek_time + self.params.rotational_latency_ms
    }
}
