//! Rendering pipeline components
//!
//! This module contains the triangle and line pipelines for the viewer scene.

pub mod types;
pub mod render_pipeline;

// Re-export types
pub use types::{SceneUniforms, SceneVertex};

// Re-export pipelines
pub use render_pipeline::{ScenePipeline, perspective_matrix, look_at_matrix, mat4_mul, transform_point};
