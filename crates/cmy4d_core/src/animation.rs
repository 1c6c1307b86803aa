//! Per-frame animation step
//!
//! [`SceneState::tick`] runs once per displayed frame, synchronously:
//! camera damping, auto-rotation drift, face pulsing and, for the tesseract,
//! the time-gated W step. Drawing is left to the caller.

use cmy4d_math::Axis;
use serde::{Serialize, Deserialize};
use crate::material::{ColorChannel, PulseProfile};
use crate::node::{Layer, Role};
use crate::object::SceneObject;
use crate::projection::WStep;
use crate::scene::SceneState;
use crate::time::FrameTime;
use crate::view::View;

/// Y-rotation drift per frame at speed 1.0
pub const AUTO_ROTATE_Y: f32 = 0.005;
/// X-rotation drift per frame at speed 1.0
pub const AUTO_ROTATE_X: f32 = 0.002;

/// Time gate for W steps: fires while `sin(t × frequency) > threshold`
///
/// The gate opens for a stretch of every period, so W steps arrive in bursts
/// of consecutive frames separated by pauses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WTrigger {
    pub frequency: f64,
    pub threshold: f64,
}

impl Default for WTrigger {
    fn default() -> Self {
        Self {
            frequency: 0.5,
            threshold: 0.7,
        }
    }
}

impl WTrigger {
    /// Whether a W step happens at time `t` (seconds)
    #[inline]
    pub fn fires(&self, t: f64) -> bool {
        (t * self.frequency).sin() > self.threshold
    }
}

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Camera moved under damping
    pub camera_moved: bool,
    /// W step taken this frame, if the gate was open
    pub w_step: Option<WStep>,
}

/// Pulse the three outer faces of an object
///
/// An inner face shares its outer twin's appearance, so it takes the same pulsed material.
fn pulse_faces(object: &mut SceneObject, t: f64, profile: fn(ColorChannel) -> PulseProfile) {
    for channel in ColorChannel::ALL {
        let Some(face) = object.node_mut(Role::Face(channel, Layer::Outer)) else {
            continue;
        };
        let mut material = face.material;
        profile(channel).apply(&mut material, t);
        face.set_material(material);

        if let Some(inner) = object.node_mut(Role::Face(channel, Layer::Inner)) {
            inner.set_material(material);
        }
    }
}

impl SceneState {
    /// Advance the scene by one frame
    pub fn tick(&mut self, time: FrameTime) -> FrameReport {
        self.now = time;
        let t = time.seconds();
        let mut report = FrameReport {
            camera_moved: self.camera.update(),
            ..Default::default()
        };

        if self.view.auto_rotate {
            let speed = self.view.rotation_speed;
            let active = self.active_mut();
            active.rotate(Axis::Y, AUTO_ROTATE_Y * speed);
            active.rotate(Axis::X, AUTO_ROTATE_X * speed);
        }

        match self.view.active_view {
            View::Cube => pulse_faces(&mut self.cube, t, PulseProfile::cube),
            View::Tesseract => {
                if self.w_trigger.fires(t) {
                    let phase = time.w_phase();
                    report.w_step = Some(self.projection.advance(&mut self.tesseract, phase));
                }
                pulse_faces(&mut self.tesseract, t, PulseProfile::tesseract);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneSettings;

    const EPSILON: f32 = 1e-6;

    fn scene() -> SceneState {
        SceneState::new(SceneSettings::default()).unwrap()
    }

    /// A time (ms) at which the default gate is closed
    const GATE_CLOSED_MS: u64 = 0;
    /// sin(3.2 × 0.5) = sin(1.6) ≈ 0.9996, gate open
    const GATE_OPEN_MS: u64 = 3200;

    #[test]
    fn test_trigger_threshold() {
        let trigger = WTrigger::default();
        assert!(!trigger.fires(0.0));
        assert!(trigger.fires(3.2));
        // sin(0.5 × 1.5) ≈ 0.68, just under the threshold
        assert!(!trigger.fires(1.5));
        // Negative half of the period
        assert!(!trigger.fires(9.0));
    }

    #[test]
    fn test_auto_rotate_drift() {
        let mut s = scene();
        s.set_rotation_speed(2.0).unwrap();
        s.tick(FrameTime::from_millis(GATE_CLOSED_MS));
        let r = s.cube().rotation();
        assert!((r.y - 0.01).abs() < EPSILON);
        assert!((r.x - 0.004).abs() < EPSILON);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn test_no_drift_when_auto_rotate_off() {
        let mut s = scene();
        s.set_auto_rotate(false);
        for i in 0..10 {
            s.tick(FrameTime::from_millis(i * 16));
        }
        assert!(s.cube().rotation().is_zero());
    }

    #[test]
    fn test_drift_only_moves_active_object() {
        let mut s = scene();
        s.switch_to(View::Tesseract);
        s.tick(FrameTime::from_millis(GATE_CLOSED_MS));
        assert!(s.cube().rotation().is_zero());
        assert!(!s.tesseract().rotation().is_zero());
    }

    #[test]
    fn test_cube_faces_pulse_without_auto_rotate() {
        let mut s = scene();
        s.set_auto_rotate(false);
        s.tick(FrameTime::from_millis(1000));
        let face = s.cube().node(Role::Face(ColorChannel::Cyan, Layer::Outer)).unwrap();
        let expected = 0.65 * (1.0f32.sin() * 0.1 + 0.9);
        assert!((face.material.opacity - expected).abs() < 1e-5);
        assert!(face.material.color[1] < 1.0);
    }

    #[test]
    fn test_w_step_only_when_gate_open() {
        let mut s = scene();
        s.switch_to(View::Tesseract);

        let closed = s.tick(FrameTime::from_millis(GATE_CLOSED_MS));
        assert_eq!(closed.w_step, None);
        assert_eq!(s.w_scale(), 1.0);

        let open = s.tick(FrameTime::from_millis(GATE_OPEN_MS));
        assert_eq!(open.w_step, Some(WStep::Shrunk(0.9)));
        assert_eq!(s.w_scale(), 0.9);
    }

    #[test]
    fn test_cube_view_never_steps_w() {
        let mut s = scene();
        let report = s.tick(FrameTime::from_millis(GATE_OPEN_MS));
        assert_eq!(report.w_step, None);
        assert_eq!(s.projection().steps(), 0);
    }

    #[test]
    fn test_tesseract_inner_faces_follow_outer_pulse() {
        let mut s = scene();
        s.switch_to(View::Tesseract);
        s.tick(FrameTime::from_millis(2000));

        let outer = s.tesseract().node(Role::Face(ColorChannel::Magenta, Layer::Outer)).unwrap();
        let expected = 0.6 + 0.2 * (2.0f32 * 1.5).sin();
        assert!((outer.material.opacity - expected).abs() < 1e-5);

        let inner = s.tesseract().node(Role::Face(ColorChannel::Magenta, Layer::Inner)).unwrap();
        assert_eq!(inner.material.opacity, outer.material.opacity);
        assert_eq!(inner.material.color, outer.material.color);
        assert_ne!(inner.material.color, ColorChannel::Magenta.rgb());
    }

    #[test]
    fn test_custom_trigger() {
        let settings = SceneSettings {
            initial_view: View::Tesseract,
            w_trigger: WTrigger { frequency: 1.0, threshold: -2.0 },
            ..Default::default()
        };
        let mut s = SceneState::new(settings).unwrap();
        for i in 0..8 {
            s.tick(FrameTime::from_millis(i * 16));
        }
        // Gate always open: a full cycle
        assert_eq!(s.w_scale(), 1.0);
        assert_eq!(s.projection().steps(), 8);
    }

    #[test]
    fn test_tick_records_time() {
        let mut s = scene();
        s.tick(FrameTime::from_millis(1234));
        assert_eq!(s.now(), FrameTime::from_millis(1234));
    }
}
