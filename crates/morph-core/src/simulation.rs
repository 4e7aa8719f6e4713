//! Simulation State
//!
//! A convenience driver: owns the grid, the agent list, the rules and the
//! tick counter, and serializes tick calls through `&mut self`.

use rand::Rng;

use morph_dna::Dna;

use crate::components::agent::Agent;
use crate::components::world::Grid;
use crate::config::{RulesConfig, SimConfig};
use crate::error::SimError;
use crate::setup;
use crate::systems::tick::{step, validate_positions, TickReport};

#[derive(Debug, Clone)]
pub struct Simulation {
    pub grid: Grid,
    pub agents: Vec<Agent>,
    pub rules: RulesConfig,
    current_tick: u64,
}

impl Simulation {
    pub fn new(grid: Grid, agents: Vec<Agent>) -> Self {
        Self::with_rules(grid, agents, RulesConfig::default())
    }

    pub fn with_rules(grid: Grid, agents: Vec<Agent>, rules: RulesConfig) -> Self {
        Self {
            grid,
            agents,
            rules,
            current_tick: 0,
        }
    }

    /// Generate a world and the default roster from configuration.
    ///
    /// Fails if the configured grid is too small for the roster positions.
    pub fn from_config(config: &SimConfig, rng: &mut impl Rng) -> Result<Self, SimError> {
        let grid = setup::generate_world_with(&config.world, rng);
        let agents = setup::default_roster(rng);
        validate_positions(&grid, &agents)?;
        Ok(Self::with_rules(grid, agents, config.rules.clone()))
    }

    /// Number of ticks completed so far
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Run one tick. The counter only advances when the tick succeeds.
    pub fn advance(&mut self) -> Result<TickReport, SimError> {
        let next = self.current_tick + 1;
        let report = step(&mut self.grid, &mut self.agents, &self.rules, next)?;
        self.current_tick = next;
        Ok(report)
    }

    /// Run `ticks` ticks, handing each report to `on_tick`
    pub fn run<F>(&mut self, ticks: u64, mut on_tick: F) -> Result<(), SimError>
    where
        F: FnMut(&Simulation, &TickReport) -> Result<(), SimError>,
    {
        for _ in 0..ticks {
            let report = self.advance()?;
            on_tick(self, &report)?;
        }
        Ok(())
    }

    pub fn add_designer_agent(&mut self, dna: &Dna, rng: &mut impl Rng) -> Option<u32> {
        setup::spawn_designer_agent(&self.grid, &mut self.agents, dna, rng)
    }

    pub fn remove_agent(&mut self, id: u32) -> Option<Agent> {
        setup::remove_agent(&mut self.agents, id)
    }

    pub fn agent(&self, id: u32) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Agents whose energy or health has run out
    pub fn depleted_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| a.is_depleted())
    }
}
