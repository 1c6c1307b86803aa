//! Materials and the color pulsing effect
//!
//! Every drawable node carries its own [`Material`]. Face materials are
//! animated each frame by a [`PulseProfile`] chosen from the face's color
//! channel and the object it belongs to.

use serde::{Serialize, Deserialize};

/// The three subtractive primaries used for faces and connectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorChannel {
    Cyan,
    Magenta,
    Yellow,
}

impl ColorChannel {
    /// All channels in cyan, magenta, yellow order
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Cyan, ColorChannel::Magenta, ColorChannel::Yellow];

    /// Full-intensity RGB for this channel
    pub fn rgb(self) -> [f32; 3] {
        match self {
            ColorChannel::Cyan => [0.0, 1.0, 1.0],
            ColorChannel::Magenta => [1.0, 0.0, 1.0],
            ColorChannel::Yellow => [1.0, 1.0, 0.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorChannel::Cyan => "cyan",
            ColorChannel::Magenta => "magenta",
            ColorChannel::Yellow => "yellow",
        }
    }

    /// Indices of the RGB components that are lit for this channel
    fn lit_components(self) -> [usize; 2] {
        match self {
            ColorChannel::Cyan => [1, 2],
            ColorChannel::Magenta => [0, 2],
            ColorChannel::Yellow => [0, 1],
        }
    }
}

/// Visual properties of a node
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// RGB color (each component 0.0-1.0)
    pub color: [f32; 3],
    /// Current opacity (0.0-1.0)
    pub opacity: f32,
    /// Opacity the pulse effect oscillates around
    pub base_opacity: f32,
    /// Draw as edges instead of filled triangles
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0], 1.0)
    }
}

impl Material {
    /// Create a material with the given color and opacity
    pub fn new(color: [f32; 3], opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            color,
            opacity,
            base_opacity: opacity,
            wireframe: false,
        }
    }

    /// Material in a CMY channel's color
    pub fn channel(channel: ColorChannel, opacity: f32) -> Self {
        Self::new(channel.rgb(), opacity)
    }

    /// White material at the given opacity (structure lines, shells)
    pub fn white(opacity: f32) -> Self {
        Self::new([1.0, 1.0, 1.0], opacity)
    }

    /// Color and opacity as RGBA
    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [self.color[0], self.color[1], self.color[2], self.opacity]
    }

    /// Set the current opacity, clamped into [0, 1]
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// How a face's opacity oscillates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityPulse {
    /// `base × (sin(t) × 0.1 + 0.9)`
    Scaled,
    /// `base + amplitude × sin(t × frequency)`
    Offset { amplitude: f32, frequency: f32 },
}

/// Time-driven opacity and tint animation for one face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseProfile {
    pub channel: ColorChannel,
    pub opacity: OpacityPulse,
    /// Frequencies for the two lit RGB components, in RGB order
    pub tint_frequencies: [f32; 2],
}

/// Tinted components swing around this value
const TINT_CENTER: f32 = 0.8;
const TINT_AMPLITUDE: f32 = 0.2;

impl PulseProfile {
    /// Profile for a face of the CMY cube
    pub fn cube(channel: ColorChannel) -> Self {
        let tint_frequencies = match channel {
            ColorChannel::Cyan => [1.2, 1.5],
            ColorChannel::Magenta => [1.3, 1.1],
            ColorChannel::Yellow => [1.4, 1.6],
        };
        Self {
            channel,
            opacity: OpacityPulse::Scaled,
            tint_frequencies,
        }
    }

    /// Profile for an outer face of the tesseract
    pub fn tesseract(channel: ColorChannel) -> Self {
        let (frequency, tint_frequencies) = match channel {
            ColorChannel::Cyan => (1.2, [1.1, 1.3]),
            ColorChannel::Magenta => (1.5, [1.4, 1.2]),
            ColorChannel::Yellow => (1.8, [1.6, 1.5]),
        };
        Self {
            channel,
            opacity: OpacityPulse::Offset { amplitude: 0.2, frequency },
            tint_frequencies,
        }
    }

    /// Opacity at time `t` (seconds) for a given base
    pub fn opacity_at(&self, base: f32, t: f64) -> f32 {
        let value = match self.opacity {
            OpacityPulse::Scaled => base * (t.sin() as f32 * 0.1 + 0.9),
            OpacityPulse::Offset { amplitude, frequency } => {
                base + amplitude * (t * frequency as f64).sin() as f32
            }
        };
        value.clamp(0.0, 1.0)
    }

    /// Write this frame's opacity and tint into `material`
    pub fn apply(&self, material: &mut Material, t: f64) {
        material.set_opacity(self.opacity_at(material.base_opacity, t));
        for (component, frequency) in self.channel.lit_components().into_iter().zip(self.tint_frequencies) {
            let tint = TINT_CENTER + TINT_AMPLITUDE * (t * frequency as f64).sin() as f32;
            material.color[component] = tint.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_colors() {
        assert_eq!(ColorChannel::Cyan.rgb(), [0.0, 1.0, 1.0]);
        assert_eq!(ColorChannel::Magenta.rgb(), [1.0, 0.0, 1.0]);
        assert_eq!(ColorChannel::Yellow.rgb(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_material_new_clamps() {
        let m = Material::new([1.0, 0.0, 0.0], 1.5);
        assert_eq!(m.opacity, 1.0);
        assert_eq!(m.base_opacity, 1.0);
        assert!(!m.wireframe);
    }

    #[test]
    fn test_rgba() {
        let m = Material::channel(ColorChannel::Cyan, 0.65);
        assert_eq!(m.rgba(), [0.0, 1.0, 1.0, 0.65]);
    }

    #[test]
    fn test_cube_pulse_range() {
        let profile = PulseProfile::cube(ColorChannel::Cyan);
        // sin(t) spans [-1, 1], so opacity spans [0.8, 1.0] x base
        for i in 0..200 {
            let t = i as f64 * 0.1;
            let o = profile.opacity_at(0.65, t);
            assert!(o >= 0.65 * 0.8 - 1e-6 && o <= 0.65 + 1e-6, "t={} opacity={}", t, o);
        }
    }

    #[test]
    fn test_cube_pulse_at_zero() {
        let profile = PulseProfile::cube(ColorChannel::Magenta);
        assert!((profile.opacity_at(0.65, 0.0) - 0.65 * 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_tesseract_pulse_range() {
        let profile = PulseProfile::tesseract(ColorChannel::Yellow);
        for i in 0..200 {
            let o = profile.opacity_at(0.6, i as f64 * 0.07);
            assert!((0.4 - 1e-6..=0.8 + 1e-6).contains(&o), "opacity {}", o);
        }
    }

    #[test]
    fn test_pulse_stays_in_unit_range_for_extreme_base() {
        let profile = PulseProfile::tesseract(ColorChannel::Cyan);
        let mut m = Material::channel(ColorChannel::Cyan, 1.0);
        for i in 0..100 {
            profile.apply(&mut m, i as f64 * 0.13);
            assert!((0.0..=1.0).contains(&m.opacity));
        }
    }

    #[test]
    fn test_apply_tints_only_lit_components() {
        let profile = PulseProfile::cube(ColorChannel::Cyan);
        let mut m = Material::channel(ColorChannel::Cyan, 0.65);
        profile.apply(&mut m, 1.0);
        assert_eq!(m.color[0], 0.0);
        assert!((m.color[1] - (0.8 + 0.2 * (1.2f64).sin() as f32)).abs() < 1e-6);
        assert!((m.color[2] - (0.8 + 0.2 * (1.5f64).sin() as f32)).abs() < 1e-6);
    }

    #[test]
    fn test_apply_keeps_base_opacity() {
        let profile = PulseProfile::tesseract(ColorChannel::Magenta);
        let mut m = Material::channel(ColorChannel::Magenta, 0.6);
        profile.apply(&mut m, 3.0);
        assert_eq!(m.base_opacity, 0.6);
    }
}
