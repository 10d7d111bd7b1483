//! Configuration management for scorecache.
//!
//! Provides XDG-compliant paths and the settings file that controls
//! expiry windows and the scoring API origin.

mod settings;

pub use settings::{Paths, Settings};
