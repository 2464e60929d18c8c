//! JSON hull options accepted at the JavaScript boundary.

use config::constants::{ConfigError, HullConfig};
use serde::Deserialize;
use thiserror::Error;

/// Optional overrides for the default [`HullConfig`].
///
/// # Examples
/// ```
/// use convex_hull_wasm::HullOptions;
/// let options: HullOptions = serde_json::from_str(r#"{"maxFaces": 128}"#).unwrap();
/// assert_eq!(options.max_faces, Some(128));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HullOptions {
    /// Face limit for one invocation.
    pub max_faces: Option<usize>,
    /// Absolute coplanarity tolerance used while seeding.
    pub coplanar_tolerance: Option<f32>,
    /// Minimum point count.
    pub min_points: Option<usize>,
}

impl HullOptions {
    /// Applies the overrides on top of the defaults.
    pub fn into_config(self) -> Result<HullConfig, ConfigError> {
        let defaults = HullConfig::default();
        HullConfig::new(
            self.max_faces.unwrap_or(defaults.max_faces),
            self.coplanar_tolerance
                .unwrap_or(defaults.coplanar_tolerance),
            self.min_points.unwrap_or(defaults.min_points),
        )
    }
}

/// Errors raised while reading hull options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options string is not valid JSON for [`HullOptions`].
    #[error("Invalid hull options: {0}")]
    Json(#[from] serde_json::Error),

    /// The options parsed but describe an unusable configuration.
    #[error("Invalid hull options: {0}")]
    Config(#[from] ConfigError),
}

/// Parses a JSON options object into a validated configuration.
///
/// An empty string yields the default configuration.
pub fn parse_options(json: &str) -> Result<HullConfig, OptionsError> {
    if json.trim().is_empty() {
        return Ok(HullConfig::default());
    }
    let options: HullOptions = serde_json::from_str(json)?;
    Ok(options.into_config()?)
}
