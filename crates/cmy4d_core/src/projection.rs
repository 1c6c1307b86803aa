//! Simulated W-axis projection for the tesseract
//!
//! There is no 4D rotation here. The illusion of folding through W comes from
//! a cyclic shrink of the inner cube and its faces, plus a time-varying wobble
//! on the connectors that join the two cubes.
//!
//! The cycle runs `1.0 -> 0.9 -> ... -> 0.3 -> 1.0`: eight steps, the last of
//! which restores the canonical layout. Values are snapped to tenths so float
//! drift can never add or drop a step.

use cmy4d_math::Vec3;
use crate::builder::{face_offset_axis, axis_vector, CONNECTOR_COUNT, INNER_FACE_SCALE};
use crate::material::ColorChannel;
use crate::node::{Layer, Role};
use crate::object::SceneObject;

/// Lowest value `w_scale` may hold
pub const W_SCALE_MIN: f32 = 0.2;
/// Value at the start of every cycle
pub const W_SCALE_MAX: f32 = 1.0;
/// Decrement applied by each non-reset step
pub const W_STEP: f32 = 0.1;
/// At or below this value the next step resets the cycle
pub const W_RESET_THRESHOLD: f32 = 0.3;
/// Angle added to each inner face's spin on every non-reset step
pub const INNER_SPIN_STEP: f32 = 0.05;

/// Amplitude of the connector wobble
const DISTORTION_AMPLITUDE: f32 = 0.1;
const CONNECTOR_OPACITY_CENTER: f32 = 0.5;
const CONNECTOR_OPACITY_AMPLITUDE: f32 = 0.3;

/// Tolerance for comparisons against snapped tenths
const SNAP_EPSILON: f32 = 1e-4;

/// What a call to [`WProjection::advance`] did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WStep {
    /// The inner cube shrank to the given scale
    Shrunk(f32),
    /// The cycle wrapped back to the canonical layout
    Reset,
}

/// State of the W-axis cycle
#[derive(Clone, Debug, PartialEq)]
pub struct WProjection {
    w_scale: f32,
    /// Half-extent of the outer cube; canonical inner faces sit at half of it
    outer_half: f32,
    steps: u64,
}

fn snap_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

impl WProjection {
    /// Create the engine for a tesseract whose outer cube has side `outer_size`
    pub fn new(outer_size: f32) -> Self {
        Self {
            w_scale: W_SCALE_MAX,
            outer_half: outer_size * 0.5,
            steps: 0,
        }
    }

    /// Current inner-cube scale, always in `[0.2, 1.0]`
    #[inline]
    pub fn w_scale(&self) -> f32 {
        self.w_scale
    }

    /// Number of `advance` calls since construction
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Overwrite the scale, clamped into `[0.2, 1.0]`
    ///
    /// Nodes are not touched until the next `advance`, `reset` or `apply_scale`.
    pub fn set_w_scale(&mut self, value: f32) {
        self.w_scale = if value.is_nan() {
            W_SCALE_MAX
        } else {
            value.clamp(W_SCALE_MIN, W_SCALE_MAX)
        };
    }

    /// True when the next `advance` will wrap the cycle
    pub fn at_cycle_end(&self) -> bool {
        self.w_scale <= W_RESET_THRESHOLD + SNAP_EPSILON
    }

    /// Take one W step and rewrite the tesseract's inner geometry
    ///
    /// `phase` is the connector wobble phase in radians; connectors are
    /// refreshed after every step, including the reset.
    pub fn advance(&mut self, tesseract: &mut SceneObject, phase: f32) -> WStep {
        self.steps += 1;
        let step = if self.at_cycle_end() {
            self.restore_canonical(tesseract);
            log::debug!("W cycle wrapped after step {}", self.steps);
            WStep::Reset
        } else {
            self.w_scale = snap_tenths(self.w_scale - W_STEP).max(W_SCALE_MIN);
            self.apply_scale(tesseract);
            for channel in ColorChannel::ALL {
                if let Some(face) = tesseract.node_mut(Role::Face(channel, Layer::Inner)) {
                    let mut transform = face.transform;
                    transform.rotate(face_offset_axis(channel), INNER_SPIN_STEP);
                    face.set_transform(transform);
                }
            }
            log::trace!("W step {} -> scale {:.1}", self.steps, self.w_scale);
            WStep::Shrunk(self.w_scale)
        };
        self.update_connectors(tesseract, phase);
        step
    }

    /// Restart the cycle at scale 1.0 with inner faces in canonical placement
    ///
    /// Accumulated inner-face spin is kept.
    pub fn reset(&mut self, tesseract: &mut SceneObject, phase: f32) {
        self.restore_canonical(tesseract);
        self.update_connectors(tesseract, phase);
    }

    fn restore_canonical(&mut self, tesseract: &mut SceneObject) {
        self.w_scale = W_SCALE_MAX;
        self.apply_scale(tesseract);
    }

    /// Write the current scale into the inner cube and inner faces
    ///
    /// Inner faces get scale `w/2` and sit at `outer_half/2 × w` along their axis.
    pub fn apply_scale(&self, tesseract: &mut SceneObject) {
        let w = self.w_scale;
        for role in [Role::Shell(Layer::Inner), Role::Wireframe(Layer::Inner)] {
            if let Some(node) = tesseract.node_mut(role) {
                let mut transform = node.transform;
                transform.set_scale(w);
                node.set_transform(transform);
            }
        }

        for channel in ColorChannel::ALL {
            if let Some(face) = tesseract.node_mut(Role::Face(channel, Layer::Inner)) {
                let axis = face_offset_axis(channel);
                let mut transform = face.transform;
                transform.set_scale(INNER_FACE_SCALE * w);
                // Only the offset coordinate moves
                let along = axis_vector(axis);
                let keep = Vec3::ONE - along;
                transform.position = transform.position.component_mul(keep)
                    + along * (self.outer_half * 0.5 * w);
                face.set_transform(transform);
            }
        }
    }

    /// Recompute the inner endpoint and opacity of every connector
    ///
    /// Connector `i` ends at its outer vertex scaled by `w_scale`, with x
    /// stretched by `1 + d` and y by `1 - d` where `d = 0.1 × sin(phase + i)`.
    /// The outer endpoint never moves.
    pub fn update_connectors(&self, tesseract: &mut SceneObject, phase: f32) {
        let w = self.w_scale;
        for i in 0..CONNECTOR_COUNT {
            let Some(node) = tesseract.node_mut(Role::Connector(i)) else {
                continue;
            };
            let Some(outer) = node.connector_outer() else {
                continue;
            };
            let offset = i as f32;
            let distortion = (phase + offset).sin() * DISTORTION_AMPLITUDE;
            node.set_connector_inner(Vec3::new(
                outer.x * w * (1.0 + distortion),
                outer.y * w * (1.0 - distortion),
                outer.z * w,
            ));

            let mut material = node.material;
            material.set_opacity(
                CONNECTOR_OPACITY_CENTER + CONNECTOR_OPACITY_AMPLITUDE * (phase + offset * 0.5).sin(),
            );
            node.set_material(material);
        }
    }
}
