//! Collision detection based on bounding circles.

use super::Position;

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.bounding_circle().intersects(&other.bounding_circle())
    }

    fn bounding_circle(&self) -> Circle;
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Circle {
    position: Position,
    radius: f64,
}

impl Circle {
    pub const fn new(position: Position, radius: f64) -> Self {
        Self { position, radius }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Touching circles count as intersecting.
    pub fn intersects(&self, other: &Circle) -> bool {
        self.position.distance(other.position) <= self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::overlapping(Circle::new(Position::new(0.0, 0.0), 0.25), true)]
    #[case::touching(Circle::new(Position::new(0.5, 0.0), 0.25), true)]
    #[case::separate(Circle::new(Position::new(0.6, 0.0), 0.25), false)]
    #[case::diagonal_touching(Circle::new(Position::new(0.3, 0.4), 0.25), true)]
    fn test_circle_intersects(#[case] other: Circle, #[case] expected: bool) {
        let circle = Circle::new(Position::new(0.0, 0.0), 0.25);
        assert_eq!(circle.intersects(&other), expected);
        assert_eq!(other.intersects(&circle), expected);
    }
}
