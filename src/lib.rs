//! Library exports for paintboard.
//!
//! Exposes the drawing session, shape records, and rendering surfaces together
//! with the configuration types, so the binary and integration tests drive the
//! same code paths.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
