//! Snapshot Generation
//!
//! Captures the grid and every agent at a point in time for display and
//! debugging.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use morph_dna::Dna;

use crate::components::agent::Agent;
use crate::components::world::{CellType, Grid};

/// Agent state as written to a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub energy: f64,
    pub health: f64,
    #[serde(default)]
    pub depleted: bool,
    pub dna: Dna,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            x: agent.x,
            y: agent.y,
            energy: agent.energy,
            health: agent.health,
            depleted: agent.is_depleted(),
            dna: agent.dna.clone(),
        }
    }
}

/// Complete world state at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub triggered_by: String,
    pub width: usize,
    pub height: usize,
    /// Terrain, one inner vector per row
    pub terrain: Vec<Vec<CellType>>,
    pub agents: Vec<AgentSnapshot>,
}

impl WorldSnapshot {
    /// Rebuild the grid this snapshot was taken from
    pub fn to_grid(&self) -> Grid {
        Grid::from_rows(&self.terrain)
    }
}

/// Tracks when snapshots are due and numbers them
#[derive(Debug)]
pub struct SnapshotGenerator {
    next_snapshot_id: u64,
    snapshot_interval: u64,
    last_snapshot_tick: u64,
}

impl SnapshotGenerator {
    pub fn new(snapshot_interval: u64) -> Self {
        Self {
            next_snapshot_id: 1,
            snapshot_interval,
            last_snapshot_tick: 0,
        }
    }

    /// Tick 0 always snapshots; an interval of 0 disables periodic snapshots
    pub fn should_snapshot(&self, current_tick: u64) -> bool {
        current_tick == 0
            || (self.snapshot_interval > 0 && current_tick % self.snapshot_interval == 0)
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("snap_{:06}", self.next_snapshot_id);
        self.next_snapshot_id += 1;
        id
    }

    pub fn mark_snapshot(&mut self, tick: u64) {
        self.last_snapshot_tick = tick;
    }

    pub fn last_snapshot_tick(&self) -> u64 {
        self.last_snapshot_tick
    }

    pub fn snapshot_count(&self) -> u64 {
        self.next_snapshot_id - 1
    }
}

/// Generate a complete world snapshot
pub fn generate_snapshot(
    generator: &mut SnapshotGenerator,
    grid: &Grid,
    agents: &[Agent],
    tick: u64,
    triggered_by: &str,
) -> WorldSnapshot {
    WorldSnapshot {
        snapshot_id: generator.next_id(),
        tick,
        triggered_by: triggered_by.to_string(),
        width: grid.width(),
        height: grid.height(),
        terrain: grid
            .rows()
            .map(|row| row.iter().map(|c| c.kind).collect())
            .collect(),
        agents: agents.iter().map(AgentSnapshot::from).collect(),
    }
}

/// Write a snapshot as pretty JSON
pub fn write_snapshot(snapshot: &WorldSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)
}

/// Write a snapshot to `<dir>/snapshots/<snapshot_id>.json`
pub fn write_snapshot_to_dir(snapshot: &WorldSnapshot, dir: impl AsRef<Path>) -> std::io::Result<()> {
    let snapshots_dir = dir.as_ref().join("snapshots");
    fs::create_dir_all(&snapshots_dir)?;
    write_snapshot(snapshot, snapshots_dir.join(format!("{}.json", snapshot.snapshot_id)))
}

/// Overwrite `<dir>/current_state.json` with the latest snapshot
pub fn write_current_state(snapshot: &WorldSnapshot, dir: impl AsRef<Path>) -> std::io::Result<()> {
    fs::create_dir_all(dir.as_ref())?;
    write_snapshot(snapshot, dir.as_ref().join("current_state.json"))
}
