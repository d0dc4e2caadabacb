// crates/cli/src/version.rs
//! Version resolution for the binary.
//!
//! `WCVERSION` overrides the crate version so release pipelines can stamp
//! builds; it is read once at process start and passed around as a value.

/// Environment variable consulted for a version override.
pub const VERSION_ENV: &str = "WCVERSION";

/// Fallback version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolves the version string once at startup.
#[must_use]
pub fn resolve() -> String {
    std::env::var(VERSION_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| VERSION.to_string())
}
