//! Channel Vocabulary
//!
//! Names of the sensory and action channels that neural links connect.

/// Sensory channel: agent stands in the light zone
pub const LIGHT: &str = "light";
/// Sensory channel: agent stands on food
pub const FOOD: &str = "food";
/// Sensory channel: agent stands on a pain cell
pub const PAIN: &str = "pain";

pub const MOVE_UP: &str = "move_up";
pub const MOVE_DOWN: &str = "move_down";
pub const MOVE_LEFT: &str = "move_left";
pub const MOVE_RIGHT: &str = "move_right";
pub const EAT: &str = "eat";
pub const REST: &str = "rest";
pub const SCREAM: &str = "scream";

/// Every sensory channel the engine produces
pub const SENSORY: [&str; 3] = [LIGHT, FOOD, PAIN];

/// Movement channels in tie-break order
pub const MOVEMENT: [&str; 4] = [MOVE_UP, MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT];

/// Every action channel the engine reads
pub const ACTIONS: [&str; 7] = [MOVE_UP, MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, EAT, REST, SCREAM];

/// Check whether a name is one of the sensory channels
pub fn is_sensory(name: &str) -> bool {
    SENSORY.contains(&name)
}

/// Check whether a name is one of the action channels
pub fn is_action(name: &str) -> bool {
    ACTIONS.contains(&name)
}
