//! Orbit camera
//!
//! A perspective camera that circles a target point. Orbit input is queued as
//! spherical deltas and bled off a little each frame, which gives the damped
//! glide after the mouse is released.

use std::f32::consts::PI;
use cmy4d_input::CameraControl;
use cmy4d_math::Vec3;
use serde::{Serialize, Deserialize};

/// Keeps the polar angle away from the poles where the up vector degenerates
const POLAR_EPSILON: f32 = 1e-3;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 100.0;

/// Static camera parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Home eye position
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of the pending orbit delta applied per update (0 disables damping)
    pub damping: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.05,
        }
    }
}

/// Spherical coordinates about the target (three.js convention: polar from +y)
#[derive(Clone, Copy, Debug, PartialEq)]
struct Spherical {
    radius: f32,
    azimuth: f32,
    polar: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self { radius: 0.0, azimuth: 0.0, polar: PI * 0.5 };
        }
        Self {
            radius,
            azimuth: v.x.atan2(v.z),
            polar: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }
}

/// Perspective camera orbiting a target
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    settings: CameraSettings,
    target: Vec3,
    spherical: Spherical,
    aspect: f32,

    // Pending input
    delta_azimuth: f32,
    delta_polar: f32,
    pending_scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl OrbitCamera {
    /// Create a camera at its home position looking at the origin
    ///
    /// Damping outside `[0, 1]` would make pending motion grow, so it is clamped
    /// (non-finite values disable damping).
    pub fn new(mut settings: CameraSettings) -> Self {
        settings.damping = if settings.damping.is_finite() {
            settings.damping.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let spherical = Spherical::from_offset(Vec3::from_array(settings.position));
        Self {
            settings,
            target: Vec3::ZERO,
            spherical,
            aspect: 16.0 / 9.0,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Restore the home position and drop any pending motion
    pub fn reset(&mut self) {
        self.target = Vec3::ZERO;
        self.spherical = Spherical::from_offset(Vec3::from_array(self.settings.position));
        self.delta_azimuth = 0.0;
        self.delta_polar = 0.0;
        self.pending_scale = 1.0;
    }

    /// Apply one frame of damped motion
    ///
    /// Returns true if the eye moved.
    pub fn update(&mut self) -> bool {
        let before = self.spherical;
        let damping = self.settings.damping;

        if damping > 0.0 {
            self.spherical.azimuth += self.delta_azimuth * damping;
            self.spherical.polar += self.delta_polar * damping;
            self.delta_azimuth *= 1.0 - damping;
            self.delta_polar *= 1.0 - damping;
        } else {
            self.spherical.azimuth += self.delta_azimuth;
            self.spherical.polar += self.delta_polar;
            self.delta_azimuth = 0.0;
            self.delta_polar = 0.0;
        }
        self.spherical.polar = self.spherical.polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.spherical.radius = (self.spherical.radius * self.pending_scale).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.pending_scale = 1.0;

        self.spherical != before
    }

    /// Update the aspect ratio from the surface size
    ///
    /// Zero-sized surfaces (minimized windows) are ignored.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    /// Vertical field of view in radians
    pub fn fov_radians(&self) -> f32 {
        self.settings.fov.to_radians()
    }

    #[inline]
    pub fn near(&self) -> f32 {
        self.settings.near
    }

    #[inline]
    pub fn far(&self) -> f32 {
        self.settings.far
    }

    #[inline]
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// True when the camera sits at its home position with nothing pending
    pub fn is_at_home(&self) -> bool {
        let home = Vec3::from_array(self.settings.position);
        self.position().approx_eq(home, 1e-4)
            && self.target == Vec3::ZERO
            && self.delta_azimuth == 0.0
            && self.delta_polar == 0.0
            && self.pending_scale == 1.0
    }
}

impl CameraControl for OrbitCamera {
    fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        self.delta_azimuth += delta_azimuth;
        self.delta_polar += delta_polar;
    }

    fn dolly(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.pending_scale *= scale;
        }
    }

    fn eye(&self) -> Vec3 {
        self.position()
    }
}
