//! Core model for the CMY cube and tesseract viewer
//!
//! This crate builds the two viewable objects and drives everything that
//! changes about them at runtime:
//!
//! - [`build_cube`] / [`build_tesseract`] - Geometry builders
//! - [`SceneObject`] - An object whose nodes are addressed by [`Role`]
//! - [`Material`] and [`PulseProfile`] - Per-node appearance and the pulsing effect
//! - [`WProjection`] - The simulated W-axis cycle of the tesseract
//! - [`SceneState`] - View state machine and the UI action surface
//! - [`OrbitCamera`] - Damped orbit camera, reset on view changes
//! - [`SceneState::tick`] - The per-frame animation step

mod animation;
mod builder;
mod camera;
mod error;
mod material;
mod node;
mod object;
mod projection;
mod scene;
mod time;
mod transform;
mod view;

pub use animation::{FrameReport, WTrigger, AUTO_ROTATE_X, AUTO_ROTATE_Y};
pub use builder::{
    build_cube, build_tesseract, connector_channel, face_offset_axis, inner_face_position,
    CONNECTOR_COUNT, CUBE_EDGE_OPACITY, CUBE_FACE_OPACITY, INNER_FACE_SCALE, LINE_OPACITY,
    SHELL_OPACITY, TESSERACT_FACE_OPACITY,
};
pub use camera::{CameraSettings, OrbitCamera};
pub use error::CoreError;
pub use material::{ColorChannel, Material, OpacityPulse, PulseProfile};
pub use node::{DirtyFlags, Layer, Node, NodeKind, Role};
pub use object::{NodeKey, SceneObject};
pub use projection::{WProjection, WStep, W_RESET_THRESHOLD, W_SCALE_MAX, W_SCALE_MIN, W_STEP};
pub use scene::{SceneSettings, SceneState, AXIS_STEP};
pub use time::FrameTime;
pub use transform::Transform3D;
pub use view::{View, ViewChanged, ViewState};

// Re-export commonly used math types for convenience
pub use cmy4d_math::{Axis, BoxShape, Euler3, Quad, Shape3D, Vec3};
