//! Input handling for the CMY viewer
//!
//! This crate turns raw mouse input into orbit/dolly steps for the camera.

mod camera_controller;

pub use camera_controller::{CameraControl, OrbitController};
