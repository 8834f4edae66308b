//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Neg},
};

use nalgebra::{Rotation2, Vector2};

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        (Vector2::new(self.x, self.y) - Vector2::new(position.x, position.y)).norm()
    }
}

/// Heading in radians, anticlockwise from the positive x-axis. The y-axis
/// points downward, so a positive angle turns toward the bottom wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    /// Unit vector pointing along the heading.
    pub fn unit_vector(self) -> Vector2<f64> {
        Rotation2::new(self.0) * Vector2::x()
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

/// Signed scalar speed in metres per millisecond. The sign is retained
/// through wall reflections; only the magnitude ranks the robots.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Velocity(f64);

impl Velocity {
    pub fn new(velocity: f64) -> Self {
        Self(velocity)
    }

    pub fn magnitude(self) -> f64 {
        self.0.abs()
    }

    pub fn damped(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl From<Velocity> for f64 {
    fn from(value: Velocity) -> Self {
        value.0
    }
}
