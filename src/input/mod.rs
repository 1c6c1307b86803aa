//! Input handling module
//!
//! Maps raw key presses to viewer actions. Mouse orbit input goes straight
//! to the `OrbitController`.

mod input_mapper;

pub use input_mapper::{InputMapper, UiAction};
