//! Setup
//!
//! World generation, genome generation and agent spawning.

pub mod agents;
pub mod dna;
pub mod world;

pub use agents::{default_roster, next_agent_id, remove_agent, spawn_designer_agent};
pub use dna::{fixed_dna, random_dna};
pub use world::{generate_world, generate_world_with};
