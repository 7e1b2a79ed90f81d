//! Configuration for orderly
//!
//! The only tunable component is the set-algebra engine, configured through
//! [`AlgebraConfig`]. Configurations share the [`Config`] trait: validation,
//! initialisation from environment variables, JSON persistence and presets.
//!
//! # Builder
//!
//! ```rust
//! use orderly::config::{AlgebraConfig, SortStrategy};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AlgebraConfig::builder()
//!     .sort_strategy(SortStrategy::Adaptive)
//!     .adaptive_threshold(32)
//!     .collect_stats(true)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use orderly::config::{AlgebraConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // ORDERLY_ALGEBRA_SORT_STRATEGY, ORDERLY_ALGEBRA_MERGE_INPUTS, ...
//! let config = AlgebraConfig::from_env()?;
//!
//! let config = AlgebraConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod algebra;

#[cfg(test)]
mod tests;

pub use algebra::{AlgebraConfig, AlgebraConfigBuilder, MergeInputs, SortStrategy};

/// Prefix used by [`Config::from_env`]
pub const DEFAULT_ENV_PREFIX: &str = "ORDERLY_";

/// Common configuration trait providing validation, environment
/// initialization and preset management.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize from environment variables with the `ORDERLY_` prefix.
    ///
    /// Variables use the format `ORDERLY_{COMPONENT}_{FIELD}`, for example
    /// `ORDERLY_ALGEBRA_SORT_STRATEGY=stable`. Unset or unparsable variables
    /// keep their default.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Initialize from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset tuned for throughput on larger inputs.
    fn performance_preset() -> Self;

    /// Preset reproducing the classic container behaviour exactly
    /// (bubble sorts, strict merge precondition).
    fn faithful_preset() -> Self;

    /// Balanced preset, the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save the configuration as pretty-printed JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate a configuration saved with
    /// [`save_to_file`](Config::save_to_file).
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Configuration validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The invalid value
    pub value: String,
    /// Description of why the value is invalid
    pub reason: String,
    /// Suggested valid values or ranges
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: &str, value: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Add a suggestion for valid values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid configuration for field '{}': value '{}' is invalid ({})",
            self.field, self.value, self.reason
        )?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". Suggested values: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true, everything
/// else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.trim().to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
