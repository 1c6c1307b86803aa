//! The renderer boundary
//!
//! The core never rasterizes. Anything that can draw a [`SceneState`] once per
//! frame implements [`Renderer`].

use cmy4d_core::SceneState;

/// Render error types
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No GPU adapter compatible with the surface
    NoAdapter,
    /// Device request or surface creation failed
    Init(String),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::NoAdapter => write!(f, "No compatible GPU adapter"),
            RenderError::Init(msg) => write!(f, "Renderer initialisation failed: {}", msg),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Something that draws the scene each frame
pub trait Renderer {
    /// Draw the current state of the scene
    fn draw(&mut self, scene: &SceneState) -> Result<(), RenderError>;

    /// The output surface changed size
    fn resize(&mut self, width: u32, height: u32);
}
