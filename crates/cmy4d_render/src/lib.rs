//! Rendering library for the CMY viewer
//!
//! This crate provides the renderer boundary and a wgpu implementation of it.
//!
//! ## Key Components
//!
//! - [`renderer::Renderer`] - The trait the frame loop draws through
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ScenePipeline`] - Additive triangle and alpha line pipelines
//! - [`renderable::RenderableScene`] - Converts the scene graph to GPU buffers

pub mod context;
pub mod pipeline;
pub mod renderable;
pub mod renderer;

pub use renderable::{camera_uniforms, RenderableScene};
pub use renderer::{RenderError, Renderer};
