//! Action Selection
//!
//! Picks the movement direction from network outputs and checks whether a
//! step onto a target cell is allowed.

use crate::components::agent::Agent;
use crate::components::signals::Signals;
use crate::components::world::{Direction, Grid};

/// The winning movement direction and its activation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    pub direction: Direction,
    pub activation: f64,
}

impl MoveChoice {
    /// Whether the activation is strong enough to attempt the move
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.activation > threshold
    }
}

/// Direction with the strictly greatest activation.
///
/// Ties keep the earlier direction in the order up, down, left, right.
/// Missing outputs count as zero.
pub fn strongest_direction(outputs: &Signals) -> MoveChoice {
    let mut best = MoveChoice {
        direction: Direction::Up,
        activation: outputs.get(Direction::Up.channel()),
    };
    for direction in &Direction::ALL[1..] {
        let activation = outputs.get(direction.channel());
        if activation > best.activation {
            best = MoveChoice {
                direction: *direction,
                activation,
            };
        }
    }
    best
}

/// A move is legal onto an in-bounds, non-obstacle cell that no agent occupies
pub fn is_move_legal(grid: &Grid, agents: &[Agent], x: i32, y: i32) -> bool {
    let passable = grid.kind_at(x, y).is_some_and(|kind| kind.is_passable());
    passable && !agents.iter().any(|a| a.is_at(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::world::CellType;
    use morph_dna::Dna;

    fn outputs(values: &[(&str, f64)]) -> Signals {
        values.iter().map(|&(k, v)| (k, v)).collect()
    }

    #[test]
    fn test_strongest_wins() {
        let choice = strongest_direction(&outputs(&[
            ("move_up", 0.2),
            ("move_left", 0.9),
            ("move_right", 0.6),
        ]));
        assert_eq!(choice.direction, Direction::Left);
        assert_eq!(choice.activation, 0.9);
        assert!(choice.exceeds(0.5));
    }

    #[test]
    fn test_ties_prefer_earlier_direction() {
        let choice = strongest_direction(&outputs(&[("move_right", 0.7), ("move_down", 0.7)]));
        assert_eq!(choice.direction, Direction::Down);

        let choice = strongest_direction(&outputs(&[
            ("move_up", 1.0),
            ("move_down", 1.0),
            ("move_left", 1.0),
            ("move_right", 1.0),
        ]));
        assert_eq!(choice.direction, Direction::Up);
    }

    #[test]
    fn test_no_outputs_defaults_to_up_at_zero() {
        let choice = strongest_direction(&Signals::new());
        assert_eq!(choice.direction, Direction::Up);
        assert_eq!(choice.activation, 0.0);
        assert!(!choice.exceeds(0.5));
    }

    #[test]
    fn test_threshold_is_strict() {
        let choice = strongest_direction(&outputs(&[("move_down", 0.5)]));
        assert!(!choice.exceeds(0.5));
    }

    #[test]
    fn test_move_legality() {
        use CellType::*;
        let grid = Grid::from_rows(&[vec![Empty, Obstacle], vec![Empty, Food]]);
        let agents = vec![Agent::new(1, 0, 0, Dna::default())];

        assert!(is_move_legal(&grid, &agents, 0, 1));
        assert!(is_move_legal(&grid, &agents, 1, 1));
        assert!(!is_move_legal(&grid, &agents, 1, 0), "obstacle");
        assert!(!is_move_legal(&grid, &agents, 0, 0), "occupied");
        assert!(!is_move_legal(&grid, &agents, -1, 0), "off grid");
        assert!(!is_move_legal(&grid, &agents, 0, 2), "off grid");
    }
}
