//! The viewer's scene state and the view state machine
//!
//! [`SceneState`] owns everything that changes at runtime: both objects, the
//! view flags, the W-projection engine and the camera. The UI calls into it
//! between frames and the animation step mutates it once per frame.
//!
//! # Example
//! ```ignore
//! let mut scene = SceneState::new(SceneSettings::default())?;
//!
//! scene.select_view("tesseract")?;
//! scene.rotate_axis_named("x")?;
//!
//! // Each frame
//! scene.tick(FrameTime::from_millis(elapsed_ms));
//! renderer.draw(&scene)?;
//! ```

use std::f32::consts::FRAC_PI_4;
use cmy4d_math::Axis;
use serde::{Serialize, Deserialize};
use crate::animation::WTrigger;
use crate::builder::{build_cube, build_tesseract};
use crate::camera::{CameraSettings, OrbitCamera};
use crate::error::CoreError;
use crate::object::SceneObject;
use crate::projection::{WProjection, WStep};
use crate::time::FrameTime;
use crate::view::{View, ViewChanged, ViewState};

/// Angle added by one discrete axis rotation
pub const AXIS_STEP: f32 = FRAC_PI_4;

/// Everything needed to build a [`SceneState`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Side length of the CMY cube
    pub cube_size: f32,
    /// Side length of the tesseract's outer cube
    pub tesseract_outer_size: f32,
    /// Side length of the tesseract's inner cube
    pub tesseract_inner_size: f32,
    pub initial_view: View,
    pub rotation_speed: f32,
    pub auto_rotate: bool,
    pub wireframe: bool,
    /// When the animation step advances the W cycle
    pub w_trigger: WTrigger,
    pub camera: CameraSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            cube_size: 2.0,
            tesseract_outer_size: 2.0,
            tesseract_inner_size: 1.0,
            initial_view: View::Cube,
            rotation_speed: 1.0,
            auto_rotate: true,
            wireframe: false,
            w_trigger: WTrigger::default(),
            camera: CameraSettings::default(),
        }
    }
}

/// Runtime state of the viewer
pub struct SceneState {
    pub(crate) cube: SceneObject,
    pub(crate) tesseract: SceneObject,
    pub(crate) view: ViewState,
    pub(crate) projection: WProjection,
    pub(crate) camera: OrbitCamera,
    pub(crate) w_trigger: WTrigger,
    /// Time of the latest frame; user actions take their wobble phase from it
    pub(crate) now: FrameTime,
}

impl SceneState {
    /// Build both objects and show the initial view
    pub fn new(settings: SceneSettings) -> Result<Self, CoreError> {
        if !settings.rotation_speed.is_finite() || settings.rotation_speed < 0.0 {
            return Err(CoreError::InvalidRotationSpeed(settings.rotation_speed));
        }
        let cube = build_cube(settings.cube_size)?;
        let tesseract = build_tesseract(settings.tesseract_outer_size, settings.tesseract_inner_size)?;

        let mut state = Self {
            cube,
            tesseract,
            view: ViewState {
                active_view: settings.initial_view,
                rotation_speed: settings.rotation_speed,
                auto_rotate: settings.auto_rotate,
                wireframe: false,
            },
            projection: WProjection::new(settings.tesseract_outer_size),
            camera: OrbitCamera::new(settings.camera),
            w_trigger: settings.w_trigger,
            now: FrameTime::default(),
        };
        state.switch_to(settings.initial_view);
        if settings.wireframe {
            state.toggle_wireframe();
        }

        log::info!("Scene ready, showing {}", state.view.active_view);
        Ok(state)
    }

    /// Make exactly the active object visible
    fn apply_visibility(&mut self) {
        let tesseract_active = self.view.active_view == View::Tesseract;
        self.cube.set_visible(!tesseract_active);
        self.tesseract.set_visible(tesseract_active);
    }

    // --- View switching ---

    /// Switch to a view
    ///
    /// Shows only that view's object, zeroes its rotation and resets the camera.
    /// Entering the tesseract also restarts the W cycle.
    pub fn switch_to(&mut self, view: View) -> ViewChanged {
        self.view.active_view = view;
        self.apply_visibility();
        self.reset_view();
        log::info!("Switched to {} view", view);
        ViewChanged::new(view)
    }

    /// Switch to a view by name ("cube" or "tesseract")
    ///
    /// Unknown names leave the state untouched.
    pub fn select_view(&mut self, name: &str) -> Result<ViewChanged, CoreError> {
        let view = name.parse::<View>().map_err(|e| {
            log::warn!("{}", e);
            e
        })?;
        Ok(self.switch_to(view))
    }

    /// Zero the active object's rotation and reset the camera
    ///
    /// On the tesseract this also restarts the W cycle and refreshes the connectors.
    pub fn reset_view(&mut self) {
        self.active_mut().reset_rotation();
        self.camera.reset();
        if self.view.active_view == View::Tesseract {
            let phase = self.now.w_phase();
            self.projection.reset(&mut self.tesseract, phase);
        }
    }

    // --- Discrete rotation ---

    /// Rotate the active object by π/4 about an axis
    pub fn rotate_axis(&mut self, axis: Axis) {
        self.active_mut().rotate(axis, AXIS_STEP);
        log::debug!("Rotated {} about {}", self.view.active_view, axis.name());
    }

    /// Rotate about an axis given by name ("x", "y" or "z")
    pub fn rotate_axis_named(&mut self, name: &str) -> Result<(), CoreError> {
        let axis = Axis::from_name(name).ok_or_else(|| {
            log::warn!("Rejected axis '{}'", name);
            CoreError::InvalidAxis(name.to_string())
        })?;
        self.rotate_axis(axis);
        Ok(())
    }

    /// Take one W step on the tesseract
    ///
    /// Returns `None` (and does nothing) while the cube is shown.
    pub fn rotate_w(&mut self) -> Option<WStep> {
        if self.view.active_view != View::Tesseract {
            return None;
        }
        let phase = self.now.w_phase();
        Some(self.projection.advance(&mut self.tesseract, phase))
    }

    // --- Appearance and motion settings ---

    /// Flip the global wireframe flag and apply it to every surface of both objects
    ///
    /// Returns the new flag.
    pub fn toggle_wireframe(&mut self) -> bool {
        self.view.wireframe = !self.view.wireframe;
        let wireframe = self.view.wireframe;
        for node in self.cube.nodes_mut().chain(self.tesseract.nodes_mut()) {
            node.set_wireframe(wireframe);
        }
        log::info!("Wireframe {}", if wireframe { "on" } else { "off" });
        wireframe
    }

    /// Set the auto-rotation speed multiplier
    pub fn set_rotation_speed(&mut self, speed: f32) -> Result<(), CoreError> {
        if !speed.is_finite() || speed < 0.0 {
            log::warn!("Rejected rotation speed {}", speed);
            return Err(CoreError::InvalidRotationSpeed(speed));
        }
        self.view.rotation_speed = speed;
        Ok(())
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.view.auto_rotate = enabled;
    }

    /// Flip auto-rotation, returning the new value
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.view.auto_rotate = !self.view.auto_rotate;
        log::info!("Auto-rotate {}", if self.view.auto_rotate { "on" } else { "off" });
        self.view.auto_rotate
    }

    /// Surface size changed; only the camera aspect is affected
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    // --- Accessors ---

    #[inline]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[inline]
    pub fn active_view(&self) -> View {
        self.view.active_view
    }

    #[inline]
    pub fn cube(&self) -> &SceneObject {
        &self.cube
    }

    #[inline]
    pub fn tesseract(&self) -> &SceneObject {
        &self.tesseract
    }

    /// The object currently on screen
    pub fn active(&self) -> &SceneObject {
        match self.view.active_view {
            View::Cube => &self.cube,
            View::Tesseract => &self.tesseract,
        }
    }

    pub fn active_mut(&mut self) -> &mut SceneObject {
        match self.view.active_view {
            View::Cube => &mut self.cube,
            View::Tesseract => &mut self.tesseract,
        }
    }

    /// Both objects, cube first
    pub fn objects(&self) -> [&SceneObject; 2] {
        [&self.cube, &self.tesseract]
    }

    #[inline]
    pub fn projection(&self) -> &WProjection {
        &self.projection
    }

    #[inline]
    pub fn w_scale(&self) -> f32 {
        self.projection.w_scale()
    }

    #[inline]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable camera, for orbit input
    #[inline]
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    #[inline]
    pub fn w_trigger(&self) -> &WTrigger {
        &self.w_trigger
    }

    /// Time of the latest frame
    #[inline]
    pub fn now(&self) -> FrameTime {
        self.now
    }

    /// True if anything changed since the last `clear_dirty`
    pub fn is_dirty(&self) -> bool {
        self.cube.is_dirty() || self.tesseract.is_dirty()
    }

    /// Mark both objects clean (called by the renderer after upload)
    pub fn clear_dirty(&mut self) {
        self.cube.clear_all_dirty();
        self.tesseract.clear_all_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmy4d_input::CameraControl;
    use crate::material::ColorChannel;
    use crate::node::{Layer, Role};

    fn scene() -> SceneState {
        SceneState::new(SceneSettings::default()).unwrap()
    }

    fn assert_one_visible(s: &SceneState) {
        assert!(s.cube().is_visible() ^ s.tesseract().is_visible());
        assert!(s.active().is_visible());
    }

    #[test]
    fn test_starts_on_cube() {
        let s = scene();
        assert_eq!(s.active_view(), View::Cube);
        assert_one_visible(&s);
        assert_eq!(s.w_scale(), 1.0);
    }

    #[test]
    fn test_initial_view_from_settings() {
        let s = SceneState::new(SceneSettings { initial_view: View::Tesseract, ..Default::default() }).unwrap();
        assert!(s.tesseract().is_visible());
        assert!(!s.cube().is_visible());
    }

    #[test]
    fn test_initial_tesseract_matches_switch() {
        let started = SceneState::new(SceneSettings { initial_view: View::Tesseract, ..Default::default() }).unwrap();
        let mut switched = scene();
        switched.switch_to(View::Tesseract);

        for i in 0..crate::builder::CONNECTOR_COUNT {
            let a = started.tesseract().node(Role::Connector(i)).unwrap();
            let b = switched.tesseract().node(Role::Connector(i)).unwrap();
            assert_eq!(a.connector_inner(), b.connector_inner(), "connector {}", i);
            assert_eq!(a.material.opacity, b.material.opacity, "connector {}", i);
        }
        // Inner endpoints sit at the scaled outer vertex, not the inner cube's corner
        let corner = started.tesseract().node(Role::Connector(7)).unwrap().connector_inner().unwrap();
        assert!((corner.z - 1.0).abs() < 1e-5, "{:?}", corner);
        assert_eq!(started.camera().position(), switched.camera().position());
    }

    #[test]
    fn test_new_rejects_bad_settings() {
        assert!(SceneState::new(SceneSettings { cube_size: 0.0, ..Default::default() }).is_err());
        assert!(SceneState::new(SceneSettings { rotation_speed: -1.0, ..Default::default() }).is_err());
        assert!(SceneState::new(SceneSettings {
            tesseract_inner_size: 3.0,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_switch_resets_rotation_and_camera() {
        let mut s = scene();
        s.switch_to(View::Tesseract);
        s.rotate_axis(Axis::Y);
        s.camera_mut().orbit(1.0, 0.0);
        s.camera_mut().update();

        let changed = s.switch_to(View::Cube);
        assert!(!changed.show_tesseract_controls);
        s.switch_to(View::Tesseract);
        assert!(s.tesseract().rotation().is_zero());
        assert!(s.camera().is_at_home());
    }

    #[test]
    fn test_switch_to_tesseract_resets_w_cycle() {
        let mut s = scene();
        s.switch_to(View::Tesseract);
        s.rotate_w();
        s.rotate_w();
        assert!(s.w_scale() < 1.0);
        s.switch_to(View::Tesseract);
        assert_eq!(s.w_scale(), 1.0);
    }

    #[test]
    fn test_select_view_rejects_unknown_name() {
        let mut s = scene();
        s.rotate_axis(Axis::X);
        let err = s.select_view("sphere").unwrap_err();
        assert_eq!(err, CoreError::InvalidView("sphere".to_string()));
        // State untouched
        assert_eq!(s.active_view(), View::Cube);
        assert_eq!(s.cube().rotation().x, AXIS_STEP);
        assert_one_visible(&s);
    }

    #[test]
    fn test_rotate_axis_named() {
        let mut s = scene();
        s.rotate_axis_named("z").unwrap();
        assert_eq!(s.cube().rotation().z, AXIS_STEP);
        assert_eq!(s.rotate_axis_named("w"), Err(CoreError::InvalidAxis("w".to_string())));
        assert_eq!(s.cube().rotation().z, AXIS_STEP);
    }

    #[test]
    fn test_rotate_w_ignored_on_cube() {
        let mut s = scene();
        assert_eq!(s.rotate_w(), None);
        assert_eq!(s.w_scale(), 1.0);
        assert_eq!(s.projection().steps(), 0);
    }

    #[test]
    fn test_toggle_wireframe_covers_both_objects() {
        let mut s = scene();
        assert!(s.toggle_wireframe());
        for obj in s.objects() {
            for (role, node) in obj.iter() {
                let expect = matches!(role, Role::Face(..) | Role::Shell(..));
                assert_eq!(node.material.wireframe, expect, "{:?}", role);
            }
        }
        assert!(!s.toggle_wireframe());
        let face = s.tesseract().node(Role::Face(ColorChannel::Cyan, Layer::Inner)).unwrap();
        assert!(!face.material.wireframe);
    }

    #[test]
    fn test_wireframe_from_settings() {
        let s = SceneState::new(SceneSettings { wireframe: true, ..Default::default() }).unwrap();
        assert!(s.view_state().wireframe);
        let face = s.cube().node(Role::Face(ColorChannel::Yellow, Layer::Outer)).unwrap();
        assert!(face.material.wireframe);
    }

    #[test]
    fn test_set_rotation_speed() {
        let mut s = scene();
        s.set_rotation_speed(2.5).unwrap();
        assert_eq!(s.view_state().rotation_speed, 2.5);
        assert!(s.set_rotation_speed(-0.1).is_err());
        assert!(s.set_rotation_speed(f32::NAN).is_err());
        assert_eq!(s.view_state().rotation_speed, 2.5);
        s.set_rotation_speed(0.0).unwrap();
        assert_eq!(s.view_state().rotation_speed, 0.0);
    }

    #[test]
    fn test_toggle_auto_rotate() {
        let mut s = scene();
        assert!(!s.toggle_auto_rotate());
        assert!(s.toggle_auto_rotate());
        s.set_auto_rotate(false);
        assert!(!s.view_state().auto_rotate);
    }

    #[test]
    fn test_resize_only_touches_camera() {
        let mut s = scene();
        s.clear_dirty();
        s.on_resize(1000, 500);
        assert_eq!(s.camera().aspect(), 2.0);
        assert!(!s.is_dirty());
    }
}
