//! Applies user actions to the scene
//!
//! Scene-level actions are handled here; the ones that touch the window or
//! the event loop come back as an [`ActionEffect`] for the caller.

use cmy4d_core::{SceneState, ViewChanged, WStep};
use crate::input::UiAction;

/// What the caller still has to do after an action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEffect {
    /// Nothing beyond the scene change
    None,
    /// The view changed; refresh the controls shown to the user
    ViewChanged(ViewChanged),
    ToggleFullscreen,
    Exit,
}

/// Routes [`UiAction`]s into [`SceneState`]
pub struct ActionSystem {
    max_rotation_speed: f32,
}

impl ActionSystem {
    pub fn new(max_rotation_speed: f32) -> Self {
        Self {
            max_rotation_speed: max_rotation_speed.max(0.0),
        }
    }

    /// Apply one action
    pub fn apply(&self, scene: &mut SceneState, action: UiAction) -> ActionEffect {
        match action {
            UiAction::SelectView(view) => return ActionEffect::ViewChanged(scene.switch_to(view)),
            UiAction::RotateAxis(axis) => scene.rotate_axis(axis),
            UiAction::RotateW => match scene.rotate_w() {
                Some(WStep::Shrunk(w)) => log::info!("W scale {:.1}", w),
                Some(WStep::Reset) => log::info!("W cycle reset"),
                None => log::debug!("W rotation ignored outside the tesseract view"),
            },
            UiAction::ResetView => {
                scene.reset_view();
                log::info!("View reset");
            }
            UiAction::ToggleWireframe => {
                scene.toggle_wireframe();
            }
            UiAction::AdjustRotationSpeed(delta) => self.adjust_speed(scene, delta),
            UiAction::ToggleAutoRotate => {
                scene.toggle_auto_rotate();
            }
            UiAction::ToggleFullscreen => return ActionEffect::ToggleFullscreen,
            UiAction::Exit => return ActionEffect::Exit,
        }
        ActionEffect::None
    }

    fn adjust_speed(&self, scene: &mut SceneState, delta: f32) {
        let current = scene.view_state().rotation_speed;
        // Snap to hundredths so repeated ±0.1 steps land on round values
        let target = ((current + delta) * 100.0).round() / 100.0;
        let speed = target.clamp(0.0, self.max_rotation_speed);
        match scene.set_rotation_speed(speed) {
            Ok(()) => log::info!("Rotation speed {:.1}", speed),
            Err(e) => log::warn!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmy4d_core::{Axis, SceneSettings, View, AXIS_STEP};

    fn scene() -> SceneState {
        SceneState::new(SceneSettings::default()).unwrap()
    }

    #[test]
    fn test_select_view_reports_change() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        let effect = system.apply(&mut s, UiAction::SelectView(View::Tesseract));
        assert_eq!(effect, ActionEffect::ViewChanged(ViewChanged::new(View::Tesseract)));
        assert!(s.tesseract().is_visible());
        assert!(!s.cube().is_visible());
    }

    #[test]
    fn test_rotate_axis() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        assert_eq!(system.apply(&mut s, UiAction::RotateAxis(Axis::Z)), ActionEffect::None);
        assert!((s.cube().rotation().z - AXIS_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_w_on_cube_is_noop() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        system.apply(&mut s, UiAction::RotateW);
        assert_eq!(s.w_scale(), 1.0);
    }

    #[test]
    fn test_rotate_w_on_tesseract() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        system.apply(&mut s, UiAction::SelectView(View::Tesseract));
        system.apply(&mut s, UiAction::RotateW);
        assert!((s.w_scale() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_speed_clamped_to_range() {
        let system = ActionSystem::new(1.2);
        let mut s = scene();
        for _ in 0..5 {
            system.apply(&mut s, UiAction::AdjustRotationSpeed(0.1));
        }
        assert!((s.view_state().rotation_speed - 1.2).abs() < 1e-6);

        for _ in 0..20 {
            system.apply(&mut s, UiAction::AdjustRotationSpeed(-0.1));
        }
        assert_eq!(s.view_state().rotation_speed, 0.0);
    }

    #[test]
    fn test_speed_steps_stay_round() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        for _ in 0..3 {
            system.apply(&mut s, UiAction::AdjustRotationSpeed(-0.1));
        }
        assert_eq!(s.view_state().rotation_speed, 0.7);
    }

    #[test]
    fn test_toggles() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        system.apply(&mut s, UiAction::ToggleWireframe);
        assert!(s.view_state().wireframe);
        system.apply(&mut s, UiAction::ToggleAutoRotate);
        assert!(!s.view_state().auto_rotate);
    }

    #[test]
    fn test_window_effects_pass_through() {
        let system = ActionSystem::new(5.0);
        let mut s = scene();
        assert_eq!(system.apply(&mut s, UiAction::ToggleFullscreen), ActionEffect::ToggleFullscreen);
        assert_eq!(system.apply(&mut s, UiAction::Exit), ActionEffect::Exit);
    }
}
