//! Configuration for prefix key normalization.
//!
//! [`PrefixKeyConfig`] decides what happens to characters outside `'0'..='9'`
//! and whether batch normalization fans out over the rayon pool. It can be
//! built in code or loaded from YAML.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! invalid_digit: reject   # or "zero"
//! use_parallel: true
//! ```
//!
//! ```rust
//! use prefixkey::{InvalidDigitPolicy, PrefixKeyConfig};
//!
//! let cfg = PrefixKeyConfig::from_yaml("invalid_digit: zero\n").unwrap();
//! assert_eq!(cfg.invalid_digit, InvalidDigitPolicy::Zero);
//! assert!(!cfg.use_parallel);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigLoadError;

/// How characters outside `'0'..='9'` are treated.
///
/// Only the first 15 characters of an identifier are ever inspected, so a
/// stray character past that point never triggers either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidDigitPolicy {
    /// Return [`PrefixKeyError::InvalidDigit`](crate::PrefixKeyError::InvalidDigit)
    /// for the first offending character.
    #[default]
    Reject,
    /// Read the offending character as `'0'`.
    Zero,
}

/// Configuration for prefix key normalization.
///
/// # Defaults
///
/// - `invalid_digit`: [`InvalidDigitPolicy::Reject`]
/// - `use_parallel`: false
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixKeyConfig {
    /// Policy for non-digit characters.
    #[serde(default)]
    pub invalid_digit: InvalidDigitPolicy,

    /// If true, [`prefix_keys`](crate::prefix_keys) maps inputs on the rayon pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl PrefixKeyConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PrefixKeyConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
