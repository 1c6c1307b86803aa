//! Axis names and Euler rotation angles

use serde::{Serialize, Deserialize};
use crate::mat3::{self, Mat3};

/// One of the three spatial axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Parse an axis from its lowercase or uppercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" | "X" => Some(Axis::X),
            "y" | "Y" => Some(Axis::Y),
            "z" | "Z" => Some(Axis::Z),
            _ => None,
        }
    }

    /// Lowercase name of the axis
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Rotation angles (radians) about x, y and z, composed in XYZ order
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A rotation about a single axis
    pub fn about(axis: Axis, angle: f32) -> Self {
        let mut e = Self::ZERO;
        e.add(axis, angle);
        e
    }

    /// Angle about the given axis
    #[inline]
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Add to the angle about the given axis
    #[inline]
    pub fn add(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::X => self.x += delta,
            Axis::Y => self.y += delta,
            Axis::Z => self.z += delta,
        }
    }

    /// True when all three angles are exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Rotation matrix for these angles
    pub fn to_matrix(&self) -> Mat3 {
        mat3::from_euler_xyz(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_name() {
        assert_eq!(Axis::from_name("x"), Some(Axis::X));
        assert_eq!(Axis::from_name("Y"), Some(Axis::Y));
        assert_eq!(Axis::from_name("z"), Some(Axis::Z));
        assert_eq!(Axis::from_name("w"), None);
        assert_eq!(Axis::from_name(""), None);
    }

    #[test]
    fn test_axis_name_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_name(axis.name()), Some(axis));
        }
    }

    #[test]
    fn test_add_touches_one_axis() {
        let mut e = Euler3::ZERO;
        e.add(Axis::Y, 0.5);
        assert_eq!(e, Euler3::new(0.0, 0.5, 0.0));
        e.add(Axis::Y, 0.25);
        assert_eq!(e.get(Axis::Y), 0.75);
        assert_eq!(e.get(Axis::X), 0.0);
    }

    #[test]
    fn test_about() {
        assert_eq!(Euler3::about(Axis::Z, 1.0), Euler3::new(0.0, 0.0, 1.0));
        assert!(Euler3::ZERO.is_zero());
        assert!(!Euler3::about(Axis::X, 0.1).is_zero());
    }
}
