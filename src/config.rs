//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CMY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use cmy4d_core::{CameraSettings, SceneSettings, View, WTrigger};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Object sizes
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CMY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CMY_ANIMATION__ROTATION_SPEED=2 -> animation.rotation_speed = 2
        figment = figment.merge(Env::prefixed("CMY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Settings for building the core scene state
    pub fn to_scene_settings(&self) -> SceneSettings {
        SceneSettings {
            cube_size: self.geometry.cube_size,
            tesseract_outer_size: self.geometry.tesseract_outer_size,
            tesseract_inner_size: self.geometry.tesseract_inner_size,
            initial_view: self.animation.initial_view,
            rotation_speed: self.animation.rotation_speed,
            auto_rotate: self.animation.auto_rotate,
            wireframe: self.rendering.wireframe,
            w_trigger: self.animation.w_trigger(),
            camera: self.camera.to_camera_settings(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "CMY Cube & Tesseract".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Home position [x, y, z]
    pub position: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Orbit damping factor
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = CameraSettings::default();
        Self {
            position: settings.position,
            fov: settings.fov,
            near: settings.near,
            far: settings.far,
            damping: settings.damping,
        }
    }
}

impl CameraConfig {
    pub fn to_camera_settings(&self) -> CameraSettings {
        CameraSettings {
            position: self.position,
            fov: self.fov,
            near: self.near,
            far: self.far,
            damping: self.damping,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Orbit sensitivity for mouse drags
    pub rotate_sensitivity: f32,
    /// Dolly sensitivity for the scroll wheel
    pub zoom_sensitivity: f32,
    /// Rotation speed change per `+`/`-` press
    pub speed_step: f32,
    /// Ceiling for the rotation speed
    pub max_rotation_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 1.0,
            zoom_sensitivity: 1.0,
            speed_step: 0.1,
            max_rotation_speed: 5.0,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Auto-rotation speed multiplier
    pub rotation_speed: f32,
    /// Start with auto-rotation on
    pub auto_rotate: bool,
    /// View shown at startup
    pub initial_view: View,
    /// Angular frequency of the automatic W trigger
    pub w_trigger_frequency: f64,
    /// The W cycle advances while the trigger wave is above this
    pub w_trigger_threshold: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let trigger = WTrigger::default();
        Self {
            rotation_speed: 1.0,
            auto_rotate: true,
            initial_view: View::Cube,
            w_trigger_frequency: trigger.frequency,
            w_trigger_threshold: trigger.threshold,
        }
    }
}

impl AnimationConfig {
    pub fn w_trigger(&self) -> WTrigger {
        WTrigger {
            frequency: self.w_trigger_frequency,
            threshold: self.w_trigger_threshold,
        }
    }
}

/// Object sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Side length of the CMY cube
    pub cube_size: f32,
    /// Side length of the tesseract's outer cube
    pub tesseract_outer_size: f32,
    /// Side length of the tesseract's inner cube
    pub tesseract_inner_size: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            cube_size: 2.0,
            tesseract_outer_size: 2.0,
            tesseract_inner_size: 1.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Start in wireframe mode
    pub wireframe: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.07, 0.07, 0.07, 1.0],
            wireframe: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
