//! World Setup
//!
//! Generates the terrain grid.

use rand::Rng;

use crate::components::world::{CellType, Grid};
use crate::config::WorldConfig;

/// Generate a world with the standard dimensions and terrain odds
pub fn generate_world(rng: &mut impl Rng) -> Grid {
    generate_world_with(&WorldConfig::default(), rng)
}

/// Generate a world from explicit parameters.
///
/// Rows above `light_rows` are light. Every other cell rolls for food, then
/// obstacle, then pain, stopping at the first success; otherwise empty.
pub fn generate_world_with(config: &WorldConfig, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::filled(config.width, config.height, CellType::Empty);
    for y in 0..config.height {
        for x in 0..config.width {
            let kind = if y < config.light_rows {
                CellType::Light
            } else if rng.gen::<f64>() < config.food_chance {
                CellType::Food
            } else if rng.gen::<f64>() < config.obstacle_chance {
                CellType::Obstacle
            } else if rng.gen::<f64>() < config.pain_chance {
                CellType::Pain
            } else {
                CellType::Empty
            };
            grid.set(x as i32, y as i32, kind);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_dimensions_and_light_rows() {
        let mut rng = SmallRng::seed_from_u64(42);
        let grid = generate_world(&mut rng);
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
        for y in 0..3 {
            for x in 0..30 {
                assert_eq!(grid.kind_at(x, y), Some(CellType::Light));
            }
        }
        // No light below the light zone
        assert_eq!(grid.count(CellType::Light), 90);
    }

    #[test]
    fn test_terrain_mix_is_plausible() {
        let config = WorldConfig {
            width: 100,
            height: 100,
            light_rows: 0,
            ..WorldConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let grid = generate_world_with(&config, &mut rng);

        // Expected: food 7%, obstacle ~5.6%, pain ~3.5% of 10k cells
        let food = grid.count(CellType::Food);
        let obstacle = grid.count(CellType::Obstacle);
        let pain = grid.count(CellType::Pain);
        assert!((500..900).contains(&food), "food = {food}");
        assert!((380..760).contains(&obstacle), "obstacle = {obstacle}");
        assert!((200..520).contains(&pain), "pain = {pain}");
    }

    #[test]
    fn test_certain_food_fills_grid() {
        let config = WorldConfig {
            width: 4,
            height: 4,
            light_rows: 1,
            food_chance: 1.0,
            ..WorldConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let grid = generate_world_with(&config, &mut rng);
        assert_eq!(grid.count(CellType::Light), 4);
        assert_eq!(grid.count(CellType::Food), 12);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = generate_world(&mut SmallRng::seed_from_u64(99));
        let b = generate_world(&mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
