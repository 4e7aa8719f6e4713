//! Agent Spawning
//!
//! The starting roster and driver-side creation and removal of agents.

use rand::Rng;

use morph_dna::Dna;

use crate::components::agent::Agent;
use crate::components::world::{CellType, Grid};

use super::dna::{fixed_dna, random_dna};

/// Random placement attempts before falling back to a grid scan
pub const MAX_PLACEMENT_TRIES: usize = 1000;

/// Starting positions of the default roster
const ROSTER_POSITIONS: [(i32, i32); 3] = [(2, 1), (5, 17), (10, 15)];

/// The three starting agents: one hand-wired, two random.
///
/// Positions assume the standard 30x20 grid.
pub fn default_roster(rng: &mut impl Rng) -> Vec<Agent> {
    ROSTER_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let dna = if i == 0 { fixed_dna() } else { random_dna(rng) };
            Agent::new(i as u32 + 1, x, y, dna)
        })
        .collect()
}

/// One more than the highest id in use, or 1 for an empty list
pub fn next_agent_id(agents: &[Agent]) -> u32 {
    agents.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
}

/// Add an agent carrying a copy of a designer genome.
///
/// Samples random cells for one that is empty and unoccupied. If
/// [`MAX_PLACEMENT_TRIES`] samples all miss, the grid is scanned row by row
/// for the first free cell. Returns the new agent's id, or `None` when no
/// free cell exists.
pub fn spawn_designer_agent(
    grid: &Grid,
    agents: &mut Vec<Agent>,
    dna: &Dna,
    rng: &mut impl Rng,
) -> Option<u32> {
    let is_free = |x: i32, y: i32| {
        grid.kind_at(x, y) == Some(CellType::Empty) && !agents.iter().any(|a| a.is_at(x, y))
    };

    let sampled = if grid.width() == 0 || grid.height() == 0 {
        None
    } else {
        (0..MAX_PLACEMENT_TRIES)
            .map(|_| {
                (
                    rng.gen_range(0..grid.width()) as i32,
                    rng.gen_range(0..grid.height()) as i32,
                )
            })
            .find(|&(x, y)| is_free(x, y))
    };
    let found = sampled.or_else(|| {
        grid.cells()
            .iter()
            .map(|c| (c.x(), c.y()))
            .find(|&(x, y)| is_free(x, y))
    });

    let Some((x, y)) = found else {
        tracing::warn!("no free cell, designer agent not added");
        return None;
    };

    let id = next_agent_id(agents);
    agents.push(Agent::new(id, x, y, dna.clone()));
    tracing::info!(agent = id, x, y, "spawned designer agent");
    Some(id)
}

/// Remove an agent by id
pub fn remove_agent(agents: &mut Vec<Agent>, id: u32) -> Option<Agent> {
    let index = agents.iter().position(|a| a.id == id)?;
    Some(agents.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_dna::NeuralLink;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_roster() {
        let mut rng = SmallRng::seed_from_u64(42);
        let agents = default_roster(&mut rng);
        assert_eq!(agents.len(), 3);
        assert_eq!(
            agents.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(agents[0].position(), (2, 1));
        assert_eq!(agents[0].dna, fixed_dna());
        assert!(agents.iter().all(|a| a.energy == 100.0 && a.health == 100.0));
    }

    #[test]
    fn test_next_agent_id() {
        assert_eq!(next_agent_id(&[]), 1);
        let agents = vec![
            Agent::new(4, 0, 0, Dna::default()),
            Agent::new(2, 1, 0, Dna::default()),
        ];
        assert_eq!(next_agent_id(&agents), 5);
    }

    #[test]
    fn test_spawn_lands_on_free_empty_cell() {
        let mut grid = Grid::filled(4, 4, CellType::Obstacle);
        grid.set(3, 2, CellType::Empty);
        grid.set(1, 1, CellType::Empty);
        let mut agents = vec![Agent::new(1, 1, 1, Dna::default())];
        let mut rng = SmallRng::seed_from_u64(8);

        let id = spawn_designer_agent(&grid, &mut agents, &Dna::default(), &mut rng).unwrap();
        assert_eq!(id, 2);
        assert_eq!(agents[1].position(), (3, 2));
    }

    #[test]
    fn test_spawn_copies_genome() {
        let grid = Grid::filled(5, 5, CellType::Empty);
        let mut designer = Dna::default();
        designer
            .neural_links
            .push(NeuralLink::new("light", "move_up", 1.0));
        let mut agents = Vec::new();
        let mut rng = SmallRng::seed_from_u64(1);

        spawn_designer_agent(&grid, &mut agents, &designer, &mut rng).unwrap();
        designer.neural_links.clear();
        assert_eq!(agents[0].dna.neural_links.len(), 1);
    }

    #[test]
    fn test_spawn_on_empty_grid() {
        let grid = Grid::filled(0, 0, CellType::Empty);
        let mut agents = Vec::new();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(spawn_designer_agent(&grid, &mut agents, &Dna::default(), &mut rng).is_none());
    }

    #[test]
    fn test_spawn_refuses_full_grid() {
        let grid = Grid::filled(1, 1, CellType::Empty);
        let mut agents = vec![Agent::new(1, 0, 0, Dna::default())];
        let mut rng = SmallRng::seed_from_u64(3);

        assert!(spawn_designer_agent(&grid, &mut agents, &Dna::default(), &mut rng).is_none());
        assert_eq!(agents.len(), 1);
    }

    #[test]
    fn test_spawn_refuses_all_obstacles() {
        let grid = Grid::filled(2, 2, CellType::Obstacle);
        let mut agents = Vec::new();
        let mut rng = SmallRng::seed_from_u64(3);

        assert!(spawn_designer_agent(&grid, &mut agents, &Dna::default(), &mut rng).is_none());
        assert!(agents.is_empty());
    }

    #[test]
    fn test_spawn_finds_single_free_cell() {
        let mut grid = Grid::filled(100, 100, CellType::Obstacle);
        grid.set(99, 99, CellType::Empty);
        let mut agents = Vec::new();
        let mut rng = SmallRng::seed_from_u64(5);

        assert_eq!(
            spawn_designer_agent(&grid, &mut agents, &Dna::default(), &mut rng),
            Some(1)
        );
        assert_eq!(agents[0].position(), (99, 99));
    }

    #[test]
    fn test_remove_agent() {
        let mut agents = vec![
            Agent::new(1, 0, 0, Dna::default()),
            Agent::new(2, 1, 0, Dna::default()),
        ];
        let removed = remove_agent(&mut agents, 1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(agents.len(), 1);
        assert!(remove_agent(&mut agents, 9).is_none());
    }
}
