pub type ProcessId = u32;

// Kind of disk access. The timing model charges reads and writes identically;
// the kind is carried through to the completion records for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoKind {
    Read,
    Write,
}

// One I/O request issued by a process. Plain value, immutable once built;
// duplicates are legal and are dispatched separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IoRequest {
    pub issuer: ProcessId,
    pub kind: IoKind,
    // Logical block id in [0, tracks * sectors_per_track).
    pub block: u32,
}

impl IoRequest {
    pub fn new(issuer: ProcessId, kind: IoKind, block: u32) -> Self {
        IoRequest { issuer, kind, block }
    }

    // Track the block lives on, for the given geometry.
    pub fn track(&self, sectors_per_track: u32) -> u32 {
        self.block / sectors_per_track
    }
}
