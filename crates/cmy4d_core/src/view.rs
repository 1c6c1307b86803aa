//! View selection state
//!
//! Exactly two views exist and the user switches between them directly;
//! there is no transition table. The operations that act on a view change
//! live on [`SceneState`](crate::SceneState).

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::CoreError;

/// Which object is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Cube,
    Tesseract,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Cube => "cube",
            View::Tesseract => "tesseract",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(View::Cube),
            "tesseract" => Ok(View::Tesseract),
            other => Err(CoreError::InvalidView(other.to_string())),
        }
    }
}

/// User-controlled viewing state
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub active_view: View,
    /// Multiplier for continuous drift; always >= 0
    pub rotation_speed: f32,
    pub auto_rotate: bool,
    /// Global wireframe flag mirrored onto every surface node
    pub wireframe: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_view: View::Cube,
            rotation_speed: 1.0,
            auto_rotate: true,
            wireframe: false,
        }
    }
}

/// Reported to the UI after a view switch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewChanged {
    pub view: View,
    /// Whether controls that only apply to the tesseract (W-rotation) should be shown
    pub show_tesseract_controls: bool,
}

impl ViewChanged {
    pub fn new(view: View) -> Self {
        Self {
            view,
            show_tesseract_controls: view == View::Tesseract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_views() {
        assert_eq!("cube".parse::<View>(), Ok(View::Cube));
        assert_eq!("tesseract".parse::<View>(), Ok(View::Tesseract));
    }

    #[test]
    fn test_parse_unknown_view() {
        assert_eq!(
            "hypersphere".parse::<View>(),
            Err(CoreError::InvalidView("hypersphere".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for view in [View::Cube, View::Tesseract] {
            assert_eq!(view.to_string().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn test_default_view_state() {
        let state = ViewState::default();
        assert_eq!(state.active_view, View::Cube);
        assert_eq!(state.rotation_speed, 1.0);
        assert!(state.auto_rotate);
        assert!(!state.wireframe);
    }

    #[test]
    fn test_view_changed_controls() {
        assert!(ViewChanged::new(View::Tesseract).show_tesseract_controls);
        assert!(!ViewChanged::new(View::Cube).show_tesseract_controls);
    }
}
