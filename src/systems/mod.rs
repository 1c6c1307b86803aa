//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod actions;
mod animation;
mod render;
mod window;

pub use actions::{ActionEffect, ActionSystem};
pub use animation::AnimationSystem;
pub use render::RenderSystem;
pub use window::{format_title, WindowError, WindowSystem};
