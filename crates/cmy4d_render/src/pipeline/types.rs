//! GPU-compatible data types for the scene pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A colored vertex, shared by the triangle and line pipelines
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    /// Position in world space
    pub position: [f32; 3],
    /// RGBA color; alpha is the material opacity
    pub color: [f32; 4],
}

impl SceneVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Scene uniforms
/// Layout: 64 bytes (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Projection × view, column-major
    pub view_projection: [[f32; 4]; 4],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_projection: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}
