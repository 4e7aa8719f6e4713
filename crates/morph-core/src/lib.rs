//! MorphLink Simulation Engine
//!
//! Agents built from a DNA genome move around a 2-D grid world, sense the
//! terrain under them and react through a small weighted-link network.
//! The driver owns a [`Grid`] and a list of [`Agent`]s and calls [`tick`]
//! once per time step.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod personality;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::{ConfigError, RulesConfig, RunConfig, SimConfig, WorldConfig};
pub use error::SimError;
pub use simulation::Simulation;
pub use systems::{evaluate, sense, step, tick, TickReport};

// Re-export setup functions explicitly to keep call sites short
pub use setup::{default_roster, fixed_dna, generate_world, random_dna, spawn_designer_agent};

pub use morph_dna::{Dna, Gene, NeuralLink, Organ};

/// Seeded random number generator shared by world and DNA generation
#[derive(Debug)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
