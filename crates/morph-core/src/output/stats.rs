//! Run Statistics
//!
//! Aggregates tick events into an end-of-run summary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::components::agent::Agent;
use crate::systems::tick::TickReport;

/// Final state of one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: u32,
    pub position: (i32, i32),
    pub energy: f64,
    pub health: f64,
    pub depleted: bool,
}

/// Summary of a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub ticks: u64,
    pub total_events: u64,
    /// Event counts keyed by event label
    pub event_counts: BTreeMap<String, u64>,
    pub agents: Vec<AgentSummary>,
}

/// Accumulates per-tick event counts
#[derive(Debug, Default)]
pub struct StatsCollector {
    ticks: u64,
    event_counts: BTreeMap<String, u64>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&mut self, report: &TickReport) {
        self.ticks += 1;
        for event in &report.events {
            *self
                .event_counts
                .entry(event.kind.label().to_string())
                .or_insert(0) += 1;
        }
    }

    pub fn count(&self, label: &str) -> u64 {
        self.event_counts.get(label).copied().unwrap_or(0)
    }

    pub fn generate_stats(&self, agents: &[Agent]) -> RunStats {
        RunStats {
            ticks: self.ticks,
            total_events: self.event_counts.values().sum(),
            event_counts: self.event_counts.clone(),
            agents: agents
                .iter()
                .map(|a| AgentSummary {
                    id: a.id,
                    position: a.position(),
                    energy: a.energy,
                    health: a.health,
                    depleted: a.is_depleted(),
                })
                .collect(),
        }
    }
}

/// Write run statistics as pretty JSON
pub fn write_stats(stats: &RunStats, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json)
}
