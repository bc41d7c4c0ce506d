//! Configuration for a check run.

use std::fmt;

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid maximum success count (must be > 0).
    InvalidMaxSuccess(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxSuccess(n) => {
                write!(f, "Invalid max success count: {} (must be > 0)", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Number of successful trials before the property is considered to pass.
    pub max_success: usize,
    /// Cap on the target size handed to generators.
    pub max_size: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_success: 100,
            max_size: 100,
        }
    }
}

impl CheckConfig {
    /// Create a configuration with validation.
    pub fn new(max_success: usize, max_size: u64) -> Result<Self, ConfigError> {
        let config = Self {
            max_success,
            max_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_success == 0 {
            return Err(ConfigError::InvalidMaxSuccess(self.max_success));
        }
        Ok(())
    }

    /// Set the number of trials.
    pub fn with_max_success(mut self, max_success: usize) -> Self {
        self.max_success = max_success;
        self
    }

    /// Set the size cap.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}
