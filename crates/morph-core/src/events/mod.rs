//! Event Types and Logging
//!
//! What happened during a tick, and the JSONL log those records go to.

pub mod logger;
pub mod types;

pub use logger::EventLogger;
pub use types::{EventKind, TickEvent};
