//! Orbit camera controller
//!
//! Controls:
//! - Left mouse drag: orbit around the target
//! - Mouse wheel: dolly in/out
//!
//! The controller only accumulates input. Damping and the actual camera
//! motion belong to the camera, reached through [`CameraControl`].

use std::f32::consts::TAU;
use cmy4d_math::Vec3;
use winit::event::{ElementState, MouseButton};

/// Dolly scale applied per wheel notch
const ZOOM_STEP: f32 = 0.95;

/// Camera controller for handling orbit input
pub struct OrbitController {
    dragging: bool,
    pending_x: f32,
    pending_y: f32,
    pending_zoom: f32,
    viewport_height: f32,

    // Configuration
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub enabled: bool,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            pending_x: 0.0,
            pending_y: 0.0,
            pending_zoom: 0.0,
            viewport_height: 720.0,

            rotate_sensitivity: 1.0,
            zoom_sensitivity: 1.0,
            enabled: true,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement (only counted while dragging)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.dragging && self.enabled {
            self.pending_x += delta_x as f32;
            self.pending_y += delta_y as f32;
        }
    }

    /// Process wheel input in lines (positive = towards the target)
    pub fn process_scroll(&mut self, lines: f32) {
        if self.enabled {
            self.pending_zoom += lines;
        }
    }

    /// Track the viewport height so drag distance maps to a full turn per screen height
    pub fn set_viewport_height(&mut self, height: u32) {
        if height > 0 {
            self.viewport_height = height as f32;
        }
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Hand accumulated input to the camera and clear it
    ///
    /// Returns the camera eye position for debug display.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C) -> Vec3 {
        if self.pending_x != 0.0 || self.pending_y != 0.0 {
            let per_pixel = TAU / self.viewport_height * self.rotate_sensitivity;
            // Dragging right swings the camera left around the target
            camera.orbit(-self.pending_x * per_pixel, -self.pending_y * per_pixel);
        }

        if self.pending_zoom != 0.0 {
            camera.dolly(ZOOM_STEP.powf(self.pending_zoom * self.zoom_sensitivity));
        }

        self.pending_x = 0.0;
        self.pending_y = 0.0;
        self.pending_zoom = 0.0;

        camera.eye()
    }

    /// Drop any accumulated input (used when the view is reset)
    pub fn clear(&mut self) {
        self.pending_x = 0.0;
        self.pending_y = 0.0;
        self.pending_zoom = 0.0;
    }

    /// Builder: set rotate sensitivity
    pub fn with_rotate_sensitivity(mut self, sensitivity: f32) -> Self {
        self.rotate_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom sensitivity
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Queue an orbit step (radians of azimuth and polar angle)
    fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32);
    /// Queue a dolly step (< 1 moves closer, > 1 moves away)
    fn dolly(&mut self, scale: f32);
    /// Current eye position
    fn eye(&self) -> Vec3;
}
