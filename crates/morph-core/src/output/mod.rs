//! Output Module
//!
//! World snapshots and run statistics.

pub mod snapshot;
pub mod stats;

pub use snapshot::{
    generate_snapshot, write_current_state, write_snapshot, write_snapshot_to_dir,
    AgentSnapshot, SnapshotGenerator, WorldSnapshot,
};
pub use stats::{write_stats, AgentSummary, RunStats, StatsCollector};
