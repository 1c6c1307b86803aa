//! Core error types
//!
//! Errors raised when UI-facing operations receive input they cannot accept.
//! Rejected input never touches the scene state.

use std::fmt;

/// Error type for core operations
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// View name other than "cube" or "tesseract"
    InvalidView(String),
    /// Axis name other than "x", "y" or "z"
    InvalidAxis(String),
    /// Geometry size that is not a positive finite number
    InvalidSize(f32),
    /// Inner cube that does not fit inside the outer cube
    InnerNotSmaller { outer: f32, inner: f32 },
    /// Rotation speed that is negative or not finite
    InvalidRotationSpeed(f32),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidView(name) => {
                write!(f, "Invalid view '{}': expected 'cube' or 'tesseract'", name)
            }
            CoreError::InvalidAxis(name) => {
                write!(f, "Invalid axis '{}': expected 'x', 'y' or 'z'", name)
            }
            CoreError::InvalidSize(size) => {
                write!(f, "Invalid size {}: must be positive and finite", size)
            }
            CoreError::InnerNotSmaller { outer, inner } => {
                write!(f, "Inner size {} must be smaller than outer size {}", inner, outer)
            }
            CoreError::InvalidRotationSpeed(speed) => {
                write!(f, "Invalid rotation speed {}: must be >= 0 and finite", speed)
            }
        }
    }
}

impl std::error::Error for CoreError {}
