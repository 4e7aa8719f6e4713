//! Tick Simulator
//!
//! The single transition function applied once per time step.
//!
//! Agents are processed in list order. Each agent runs, in sequence:
//! sense, evaluate, move, eat, rest, scream, pain damage, upkeep. World
//! mutations (food being eaten) are visible to agents later in the same
//! tick, and an agent's new position blocks later agents from that cell.

use tracing::{debug, trace};

use morph_dna::channels;

use crate::components::agent::Agent;
use crate::components::world::{CellType, Grid};
use crate::config::RulesConfig;
use crate::error::SimError;
use crate::events::types::{EventKind, TickEvent};

use super::action::{is_move_legal, strongest_direction};
use super::neural::evaluate;
use super::perception::sense;

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub events: Vec<TickEvent>,
}

impl TickReport {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            events: Vec::new(),
        }
    }

    fn push(&mut self, agent_id: u32, kind: EventKind) {
        trace!(tick = self.tick, agent = agent_id, event = kind.label());
        self.events.push(TickEvent::new(self.tick, agent_id, kind));
    }

    /// Events for one agent, in the order they happened
    pub fn for_agent(&self, agent_id: u32) -> impl Iterator<Item = &EventKind> {
        self.events
            .iter()
            .filter(move |e| e.agent_id == agent_id)
            .map(|e| &e.kind)
    }

    /// Number of events with the given label
    pub fn count(&self, label: &str) -> usize {
        self.events.iter().filter(|e| e.kind.label() == label).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Advance the world by one tick using the standard rules
pub fn tick(grid: &mut Grid, agents: &mut [Agent]) -> Result<TickReport, SimError> {
    step(grid, agents, &RulesConfig::default(), 0)
}

/// Check that every agent stands inside the grid
pub fn validate_positions(grid: &Grid, agents: &[Agent]) -> Result<(), SimError> {
    match agents.iter().find(|a| !grid.contains(a.x, a.y)) {
        Some(agent) => Err(SimError::GridMismatch {
            agent_id: agent.id,
            x: agent.x,
            y: agent.y,
            width: grid.width(),
            height: grid.height(),
        }),
        None => Ok(()),
    }
}

/// Advance the world by one tick, labelling events with `tick_number`.
///
/// Fails before touching any state if an agent does not fit on the grid.
/// Energy and health are not clamped and depleted agents keep acting.
pub fn step(
    grid: &mut Grid,
    agents: &mut [Agent],
    rules: &RulesConfig,
    tick_number: u64,
) -> Result<TickReport, SimError> {
    validate_positions(grid, agents)?;

    let mut report = TickReport::new(tick_number);
    for index in 0..agents.len() {
        step_agent(grid, agents, index, rules, &mut report);
    }
    Ok(report)
}

fn step_agent(
    grid: &mut Grid,
    agents: &mut [Agent],
    index: usize,
    rules: &RulesConfig,
    report: &mut TickReport,
) {
    let (id, x, y) = {
        let agent = &agents[index];
        (agent.id, agent.x, agent.y)
    };

    // Sense. `step` has already checked that (x, y) is on the grid.
    let inputs = sense(&agents[index], grid);

    // Decide
    let outputs = evaluate(&agents[index].dna, &inputs);
    debug!(
        agent = id,
        move_up = outputs.get(channels::MOVE_UP),
        move_down = outputs.get(channels::MOVE_DOWN),
        move_left = outputs.get(channels::MOVE_LEFT),
        move_right = outputs.get(channels::MOVE_RIGHT),
        "movement activations"
    );

    // Move
    let choice = strongest_direction(&outputs);
    if choice.exceeds(rules.move_threshold) {
        let (tx, ty) = choice.direction.step_from(x, y);
        if is_move_legal(grid, agents, tx, ty) {
            let agent = &mut agents[index];
            agent.x = tx;
            agent.y = ty;
            agent.energy -= rules.move_cost;
            report.push(
                id,
                EventKind::Moved {
                    direction: choice.direction,
                    from: (x, y),
                    to: (tx, ty),
                },
            );
        } else {
            report.push(
                id,
                EventKind::MoveBlocked {
                    direction: choice.direction,
                    target: (tx, ty),
                },
            );
        }
    }

    let agent = &mut agents[index];

    // Eat
    if outputs.get(channels::EAT) > rules.action_threshold {
        if let Some(cell) = grid.cell_mut(agent.x, agent.y) {
            if cell.kind == CellType::Food {
                agent.energy += rules.eat_gain;
                cell.kind = CellType::Empty;
                report.push(
                    id,
                    EventKind::Ate {
                        x: agent.x,
                        y: agent.y,
                    },
                );
            }
        }
    }

    // Rest
    let rested = outputs.get(channels::REST) > rules.action_threshold;
    if rested {
        agent.energy += rules.rest_gain;
        report.push(id, EventKind::Rested);
    }

    // Scream
    if outputs.get(channels::SCREAM) > rules.action_threshold {
        agent.energy -= rules.scream_cost;
        report.push(id, EventKind::Screamed);
    }

    // Pain damage
    if grid.kind_at(agent.x, agent.y) == Some(CellType::Pain) {
        agent.health -= rules.pain_damage;
        report.push(
            id,
            EventKind::Pained {
                health: agent.health,
            },
        );
    }

    // Upkeep
    if !rested {
        agent.energy -= rules.upkeep_cost;
    }
}
