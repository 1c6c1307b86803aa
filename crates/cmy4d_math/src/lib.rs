//! Math library for the CMY viewer
//!
//! This crate provides the 3D vector, rotation, and primitive shape types
//! used by the cube and tesseract models.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Euler3`] - XYZ-ordered rotation angles
//! - [`Axis`] - One of x, y, z
//! - [`Mat3`] - 3x3 rotation matrix
//!
//! ## Shape Types
//!
//! - [`Shape3D`] - Trait for shapes with vertices, edges and triangles
//! - [`BoxShape`] - A cube with the fixed 8-corner vertex ordering
//! - [`Quad`] - A square in the local XY plane

mod vec3;
mod euler;
pub mod mat3;
pub mod shape;

pub use vec3::Vec3;
pub use euler::{Axis, Euler3};
pub use mat3::Mat3;
pub use shape::{BoxShape, Edge, Quad, Shape3D, Triangle};
