//! The domain module encapsulates the core simulation rules. It defines the
//! `Robot` and `Board` entities, along with the kinematics and collision
//! rules governing their interactions.
//!
//! By minimizing hard dependencies, this module ensures the core logic
//! remains adaptable and independent of specific implementation details.

mod basis;
mod board;
mod collision;
mod robot;

pub use basis::{Angle, Position, Velocity};
pub use board::Board;
pub use collision::{Circle, HasCollision};
pub use robot::{Robot, Side, StepOutcome, ROBOT_RADIUS};
