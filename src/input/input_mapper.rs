//! Input mapping from raw key events to viewer actions
//!
//! Every button of the viewer's control panel has a key. Mouse drags and the
//! scroll wheel are NOT mapped here; they go directly to the OrbitController.

use cmy4d_core::{Axis, View};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions a user can trigger between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// Show the cube or the tesseract (1 / 2)
    SelectView(View),
    /// Discrete π/4 rotation of the active object (X / Y / Z)
    RotateAxis(Axis),
    /// One step of the W cycle (W, tesseract only)
    RotateW,
    /// Zero rotation and reset the camera (R)
    ResetView,
    /// Toggle wireframe rendering (V)
    ToggleWireframe,
    /// Change the auto-rotation speed by a signed amount (+ / -)
    AdjustRotationSpeed(f32),
    /// Toggle auto-rotation (Space)
    ToggleAutoRotate,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps key presses to [`UiAction`]s
pub struct InputMapper {
    speed_step: f32,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl InputMapper {
    /// Create a mapper whose `+`/`-` keys change the speed by `speed_step`
    pub fn new(speed_step: f32) -> Self {
        Self { speed_step }
    }

    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(&self, key: KeyCode, state: ElementState) -> Option<UiAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(UiAction::SelectView(View::Cube)),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(UiAction::SelectView(View::Tesseract)),
            KeyCode::KeyX => Some(UiAction::RotateAxis(Axis::X)),
            KeyCode::KeyY => Some(UiAction::RotateAxis(Axis::Y)),
            KeyCode::KeyZ => Some(UiAction::RotateAxis(Axis::Z)),
            KeyCode::KeyW => Some(UiAction::RotateW),
            KeyCode::KeyR => Some(UiAction::ResetView),
            KeyCode::KeyV => Some(UiAction::ToggleWireframe),
            // `=` shares the `+` key on most layouts
            KeyCode::Equal | KeyCode::NumpadAdd => Some(UiAction::AdjustRotationSpeed(self.speed_step)),
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                Some(UiAction::AdjustRotationSpeed(-self.speed_step))
            }
            KeyCode::Space => Some(UiAction::ToggleAutoRotate),
            KeyCode::KeyF => Some(UiAction::ToggleFullscreen),
            KeyCode::Escape => Some(UiAction::Exit),
            _ => None,
        }
    }
}
