//! Perception System
//!
//! Turns the terrain under an agent into sensory channel activations.

use morph_dna::channels;

use crate::components::agent::Agent;
use crate::components::signals::Signals;
use crate::components::world::Grid;

/// Sense the agent's current cell.
///
/// Produces exactly `light`, `food` and `pain`, each `1.0` when the cell
/// terrain matches and `0.0` otherwise. An off-grid agent senses nothing.
pub fn sense(agent: &Agent, grid: &Grid) -> Signals {
    let Some(cell) = grid.cell(agent.x, agent.y) else {
        return Signals::new();
    };

    channels::SENSORY
        .iter()
        .map(|&channel| {
            let active = cell.kind.as_str() == channel;
            (channel, if active { 1.0 } else { 0.0 })
        })
        .collect()
}
