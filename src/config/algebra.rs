//! Set-algebra engine configuration.

use super::{parse_env_bool, parse_env_var, Config, ValidationError};
use crate::error::{OrderlyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How the engine sorts private copies of its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// The container's own bubble sort
    #[default]
    Bubble,
    /// Stable slice sort
    Stable,
    /// Bubble sort up to `adaptive_threshold` elements, stable sort above
    Adaptive,
}

impl FromStr for SortStrategy {
    type Err = OrderlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "stable" => Ok(Self::Stable),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(OrderlyError::configuration(format!(
                "unknown sort strategy '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bubble => "bubble",
            Self::Stable => "stable",
            Self::Adaptive => "adaptive",
        })
    }
}

/// What `merge` does with inputs that are not in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeInputs {
    /// Reject unsorted inputs with a precondition error
    #[default]
    Verify,
    /// Sort private copies first, like the other set operations
    Sort,
}

impl FromStr for MergeInputs {
    type Err = OrderlyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "verify" => Ok(Self::Verify),
            "sort" => Ok(Self::Sort),
            other => Err(OrderlyError::configuration(format!(
                "unknown merge input policy '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for MergeInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verify => "verify",
            Self::Sort => "sort",
        })
    }
}

/// Configuration of the [`SetAlgebra`](crate::algorithms::SetAlgebra) engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgebraConfig {
    /// Sort used on private copies of the inputs
    pub sort_strategy: SortStrategy,
    /// Largest input bubble-sorted under [`SortStrategy::Adaptive`]
    pub adaptive_threshold: usize,
    /// Handling of unsorted `merge` inputs
    pub merge_inputs: MergeInputs,
    /// Record comparison and element counts
    pub collect_stats: bool,
}

impl Default for AlgebraConfig {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::Adaptive,
            adaptive_threshold: 64,
            merge_inputs: MergeInputs::Verify,
            collect_stats: true,
        }
    }
}

impl AlgebraConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AlgebraConfigBuilder {
        AlgebraConfigBuilder::new()
    }
}

impl Config for AlgebraConfig {
    fn validate(&self) -> Result<()> {
        if self.sort_strategy == SortStrategy::Adaptive && self.adaptive_threshold == 0 {
            let err = ValidationError::new(
                "adaptive_threshold",
                "0",
                "adaptive sorting needs a positive threshold",
            )
            .with_suggestion("1..=1024, or use the stable strategy");
            return Err(OrderlyError::configuration(err.to_string()));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.sort_strategy = parse_env_var(
            &format!("{}ALGEBRA_SORT_STRATEGY", prefix),
            config.sort_strategy,
        );
        config.adaptive_threshold = parse_env_var(
            &format!("{}ALGEBRA_ADAPTIVE_THRESHOLD", prefix),
            config.adaptive_threshold,
        );
        config.merge_inputs = parse_env_var(
            &format!("{}ALGEBRA_MERGE_INPUTS", prefix),
            config.merge_inputs,
        );
        config.collect_stats = parse_env_bool(
            &format!("{}ALGEBRA_COLLECT_STATS", prefix),
            config.collect_stats,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            sort_strategy: SortStrategy::Stable,
            adaptive_threshold: 64,
            merge_inputs: MergeInputs::Sort,
            collect_stats: false,
        }
    }

    fn faithful_preset() -> Self {
        Self {
            sort_strategy: SortStrategy::Bubble,
            adaptive_threshold: 64,
            merge_inputs: MergeInputs::Verify,
            collect_stats: true,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            OrderlyError::configuration(format!("Failed to serialize algebra config: {}", e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            OrderlyError::configuration(format!("Failed to parse algebra config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`AlgebraConfig`]
#[derive(Debug, Clone)]
pub struct AlgebraConfigBuilder {
    config: AlgebraConfig,
}

impl AlgebraConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: AlgebraConfig::default(),
        }
    }

    /// Set the sort strategy.
    pub fn sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.config.sort_strategy = strategy;
        self
    }

    /// Set the adaptive bubble-sort threshold.
    pub fn adaptive_threshold(mut self, threshold: usize) -> Self {
        self.config.adaptive_threshold = threshold;
        self
    }

    /// Set the merge input policy.
    pub fn merge_inputs(mut self, policy: MergeInputs) -> Self {
        self.config.merge_inputs = policy;
        self
    }

    /// Enable or disable statistics collection.
    pub fn collect_stats(mut self, enabled: bool) -> Self {
        self.config.collect_stats = enabled;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<AlgebraConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for AlgebraConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
