//! Rectangular corridor the robots joust in.
//!
//! The top and bottom walls reflect, the left and right walls absorb: a
//! robot reaching one of them ends the simulation. The board is established
//! once from the scenario and read-only afterwards.

use super::Circle;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Board {
    width: f64,
    height: f64,
}

impl Board {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether the circle lies between the left and right walls. An edge
    /// exactly on a wall still counts as inside.
    pub fn contains_horizontally(&self, circle: &Circle) -> bool {
        circle.position().x() - circle.radius() >= 0.0
            && circle.position().x() + circle.radius() <= self.width
    }

    pub fn contains(&self, circle: &Circle) -> bool {
        self.contains_horizontally(circle)
            && circle.position().y() - circle.radius() >= 0.0
            && circle.position().y() + circle.radius() <= self.height
    }
}
