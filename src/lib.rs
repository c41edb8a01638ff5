// Library exports for testing and the CLI binary.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod controller;
pub mod gesture;
pub mod launcher;
