//! # Config Crate
//!
//! Centralized configuration constants for the convex hull kernel.
//! All magic numbers and tunable limits are defined here so the core
//! crate and the WASM boundary agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HullConfig, COPLANAR_TOLERANCE, MAX_FACES};
//!
//! let cfg = HullConfig::default();
//! assert_eq!(cfg.max_faces, MAX_FACES);
//! assert_eq!(cfg.coplanar_tolerance, COPLANAR_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Runtime overrides go through `HullConfig::new`

pub mod constants;

#[cfg(test)]
mod tests;
