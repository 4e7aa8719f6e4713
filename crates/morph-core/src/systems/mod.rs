//! Simulation Systems
//!
//! Sensing, network evaluation, action selection and the tick that chains them.

pub mod action;
pub mod neural;
pub mod perception;
pub mod tick;

pub use action::{is_move_legal, strongest_direction, MoveChoice};
pub use neural::evaluate;
pub use perception::sense;
pub use tick::{step, tick, validate_positions, TickReport};
