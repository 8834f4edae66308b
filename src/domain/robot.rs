//! Point-like jousting robot and the kinematics advancing it tick by tick.

use std::f64::consts::PI;

use tracing::debug;

use super::{Angle, Board, Circle, HasCollision, Position, Velocity};

/// Half of the robot's physical width, in metres. Bounds the robot's extent
/// for both the collision test and the wall-contact rules.
pub const ROBOT_RADIUS: f64 = 0.25;

/// Proportion of speed retained after bouncing off the top or bottom wall.
const WALL_DAMPING_FACTOR: f64 = 0.9;

/// Scale from the scenario's metres per second into the per-millisecond
/// speed the stepper works in.
const SPEED_SCALE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Side {
    Left,
    Right,
}

/// Whether a step kept the robot between the side walls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    Advanced,
    /// Crossed the left or right wall; the simulation ends without a
    /// collision.
    Exited,
}

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Robot {
    position: Position,
    heading: Angle,
    speed: Velocity,
}

impl Robot {
    pub fn new(position: Position, heading: Angle, speed: Velocity) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }

    /// Robot in its launch bay: flush against its own side wall, centered
    /// vertically, with the scenario units converted into the core's.
    ///
    /// Scenario angles are authored in degrees clockwise from horizontal, so
    /// they negate into the anticlockwise convention; the right robot's
    /// heading is offset by half a turn since it launches facing left.
    pub fn launch(side: Side, angle_deg: f64, speed_m_per_s: f64, board: &Board) -> Self {
        let heading = match side {
            Side::Left => -Angle::from_deg(angle_deg),
            Side::Right => Angle::new(PI) + -Angle::from_deg(angle_deg),
        };
        let x = match side {
            Side::Left => ROBOT_RADIUS,
            Side::Right => board.width() - ROBOT_RADIUS,
        };
        Self::new(
            Position::new(x, board.height() / 2.0),
            heading,
            Velocity::new(speed_m_per_s * SPEED_SCALE),
        )
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn speed(&self) -> Velocity {
        self.speed
    }

    /// Advances the robot along its heading for one tick.
    ///
    /// The x-coordinate updates first; if it carries the robot's edge past
    /// the left or right wall the step reports [`StepOutcome::Exited`] and
    /// nothing else changes this tick. Otherwise the y-coordinate updates
    /// and each horizontal wall is checked independently: contact clamps the
    /// robot back onto the wall, damps its speed, and mirrors the vertical
    /// component of its heading.
    pub fn step(&mut self, board: &Board, interval_ms: u64) -> StepOutcome {
        let displacement =
            self.heading.unit_vector() * (f64::from(self.speed) * interval_ms as f64);

        self.position = Position::new(self.position.x() + displacement.x, self.position.y());
        if !board.contains_horizontally(&self.bounding_circle()) {
            debug!(x = self.position.x(), "robot crossed a side wall");
            return StepOutcome::Exited;
        }

        self.position = Position::new(self.position.x(), self.position.y() + displacement.y);

        if self.position.y() - ROBOT_RADIUS < 0.0 {
            self.reflect(ROBOT_RADIUS);
        }
        if self.position.y() + ROBOT_RADIUS > board.height() {
            self.reflect(board.height() - ROBOT_RADIUS);
        }

        StepOutcome::Advanced
    }

    /// Bounces off a horizontal wall: clamp onto it, shed speed, mirror the
    /// vertical heading component (`cos` is even, `sin` is odd).
    fn reflect(&mut self, wall_y: f64) {
        self.position = Position::new(self.position.x(), wall_y);
        self.speed = self.speed.damped(WALL_DAMPING_FACTOR);
        self.heading = -self.heading;
        debug!(
            y = wall_y,
            speed = f64::from(self.speed),
            "robot bounced off a wall"
        );
    }
}

impl HasCollision for Robot {
    fn bounding_circle(&self) -> Circle {
        Circle::new(self.position, ROBOT_RADIUS)
    }
}
