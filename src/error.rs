use thiserror::Error;

/// Errors that can occur while building a prefix key.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrefixKeyError {
    /// A character outside `'0'..='9'` was found among the inspected characters.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
    /// A raw value does not fit in 15 decimal digits.
    #[error("key {0} exceeds the 15-digit maximum")]
    OutOfRange(u64),
}

/// Errors that can occur when loading a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}
