//! Engine Errors
//!
//! Conditions that abort an engine call. Everything else degrades silently:
//! missing channels read as zero and empty genomes simply do nothing.

use thiserror::Error;

use morph_dna::DnaError;

use crate::config::ConfigError;
use crate::personality::ServiceError;

#[derive(Debug, Error)]
pub enum SimError {
    /// An agent was paired with a grid it does not fit on
    #[error("agent {agent_id} at ({x}, {y}) is outside the {width}x{height} grid")]
    GridMismatch {
        agent_id: u32,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    Dna(#[from] DnaError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("report service error: {0}")]
    Service(#[from] ServiceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
