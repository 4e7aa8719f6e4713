//! Agent Components
//!
//! Per-agent runtime state: position, energy, health and the owned genome.

use serde::{Deserialize, Serialize};

use morph_dna::Dna;

/// Energy of a freshly created agent
pub const INITIAL_ENERGY: f64 = 100.0;
/// Health of a freshly created agent
pub const INITIAL_HEALTH: f64 = 100.0;

/// A creature living on the grid.
///
/// Energy and health are never clamped and the engine never removes an
/// agent; negative values are valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique for the lifetime of the agent
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub energy: f64,
    pub health: f64,
    pub dna: Dna,
}

impl Agent {
    pub fn new(id: u32, x: i32, y: i32, dna: Dna) -> Self {
        Self {
            id,
            x,
            y,
            energy: INITIAL_ENERGY,
            health: INITIAL_HEALTH,
            dna,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    /// Energy or health has run out.
    ///
    /// Informational only: the tick keeps processing depleted agents.
    pub fn is_depleted(&self) -> bool {
        self.energy <= 0.0 || self.health <= 0.0
    }
}
