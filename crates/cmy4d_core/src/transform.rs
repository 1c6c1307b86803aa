//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D places a scene node relative to its parent object.

use cmy4d_math::{mat3, Axis, Euler3, Vec3};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, Euler rotation, and uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position relative to the parent
    pub position: Vec3,
    /// Rotation as XYZ Euler angles
    pub rotation: Euler3,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler3::ZERO,
            scale: 1.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Euler3) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Transform a point from local space to parent space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let scaled = p * self.scale;
        let rotated = mat3::transform(&self.rotation.to_matrix(), scaled);
        rotated + self.position
    }

    /// Transform a batch of points with a single matrix build
    pub fn transform_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        let m = self.rotation.to_matrix();
        points
            .iter()
            .map(|p| mat3::transform(&m, *p * self.scale) + self.position)
            .collect()
    }

    /// Rotate incrementally about one axis
    pub fn rotate(&mut self, axis: Axis, delta: f32) {
        self.rotation.add(axis, delta);
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}
