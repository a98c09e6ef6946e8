use thiserror::Error;

/// Largest trace a run may produce unless configured otherwise.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Configuration for the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_steps: usize,
}

/// Errors that can occur when validating a stepper config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_steps must be at least 1")]
    ZeroMaxSteps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero.
    pub fn new(max_steps: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        Ok(Self { max_steps })
    }

    /// Returns the maximum number of Euler steps a run may take.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget() {
        assert_eq!(Config::default().max_steps(), DEFAULT_MAX_STEPS);
    }

    #[test]
    fn rejects_zero_budget() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroMaxSteps));
        assert_eq!(Config::new(10).map(|c| c.max_steps()), Ok(10));
    }
}
