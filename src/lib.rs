//! CMY Cube & Tesseract viewer
//!
//! Application-level pieces shared by the binary and the integration tests:
//! configuration, keyboard mapping and the systems the event loop drives.

pub mod config;
pub mod input;
pub mod systems;
