//! Engine Components
//!
//! Data owned by the driver and mutated by the tick: grid cells, agents and
//! the channel signal maps passed between sensing and acting.

pub mod agent;
pub mod signals;
pub mod world;

pub use agent::{Agent, INITIAL_ENERGY, INITIAL_HEALTH};
pub use signals::Signals;
pub use world::{Cell, CellType, Direction, Grid, GRID_HEIGHT, GRID_WIDTH};
