//! Configuration module for the budget tracker
//!
//! - Base directory resolution (env override, XDG, platform defaults)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
