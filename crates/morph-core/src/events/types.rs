//! Event Types
//!
//! Observational records emitted by the tick. They never feed back into
//! the simulation.

use serde::{Deserialize, Serialize};

use crate::components::world::Direction;

/// One thing that happened to one agent during one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    pub agent_id: u32,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl TickEvent {
    pub fn new(tick: u64, agent_id: u32, kind: EventKind) -> Self {
        Self {
            tick,
            agent_id,
            kind,
        }
    }

    /// Serialize as a single JSON line
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_jsonl(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// Agent stepped to a neighbouring cell
    Moved {
        direction: Direction,
        from: (i32, i32),
        to: (i32, i32),
    },
    /// Movement fired but the target was off-grid, an obstacle or occupied
    MoveBlocked {
        direction: Direction,
        target: (i32, i32),
    },
    /// Agent ate the food on its cell
    Ate { x: i32, y: i32 },
    Rested,
    Screamed,
    /// Agent took damage from a pain cell
    Pained { health: f64 },
}

impl EventKind {
    /// Short label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Moved { .. } => "moved",
            EventKind::MoveBlocked { .. } => "move_blocked",
            EventKind::Ate { .. } => "ate",
            EventKind::Rested => "rested",
            EventKind::Screamed => "screamed",
            EventKind::Pained { .. } => "pained",
        }
    }
}
