pub mod config;
pub mod disk;
pub mod report;
pub mod request;
pub mod sched;
pub mod sim;
pub mod workload;

#[cfg(test)]
mod tests;

pub use config::{DiskParams, SimOptions};
pub use disk::model::HardDrive;
pub use report::RunSummary;
pub use request::{IoKind, IoRequest, ProcessId};
pub use sched::{IoScheduler, PolicyKind};
pub use sim::{CompletionRecord, Simulation};
pub use workload::{RequestSource, SyntheticWorkload};
