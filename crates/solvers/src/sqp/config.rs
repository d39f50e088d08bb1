use thiserror::Error;

/// Configuration for the SQP solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    goal: f64,
    lr: f64,
    regularization: f64,
}

/// Errors that can occur when validating an SQP solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("goal must be finite and non-negative")]
    Goal,

    #[error("lr must be finite and positive")]
    LearningRate,

    #[error("regularization must be finite and non-negative")]
    Regularization,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            goal: 1e-5,
            lr: 0.1,
            regularization: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with a validated goal and learning rate.
    ///
    /// Regularization starts at zero, which is the exact Newton-KKT step.
    ///
    /// # Errors
    ///
    /// Returns an error if `goal` is negative or non-finite, or if `lr` is
    /// not a finite positive number.
    pub fn new(max_iters: usize, goal: f64, lr: f64) -> Result<Self, ConfigError> {
        if !goal.is_finite() || goal < 0.0 {
            return Err(ConfigError::Goal);
        }
        if !lr.is_finite() || lr <= 0.0 {
            return Err(ConfigError::LearningRate);
        }

        Ok(Self {
            max_iters,
            goal,
            lr,
            regularization: 0.0,
        })
    }

    /// Returns a copy with Levenberg-style regularization `delta`.
    ///
    /// The KKT matrix becomes `[[B + δI, Jgᵀ], [Jg, -δI]]`, which keeps the
    /// linear solve well posed when `B` or `Jg` is rank deficient at the
    /// cost of no longer taking the exact Newton step.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` is negative or non-finite.
    pub fn with_regularization(self, delta: f64) -> Result<Self, ConfigError> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(ConfigError::Regularization);
        }

        Ok(Self {
            regularization: delta,
            ..self
        })
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the Lagrangian gradient norm at which the solver stops.
    #[must_use]
    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Returns the damping factor applied to every step.
    #[must_use]
    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Returns the regularization added to the KKT diagonal.
    #[must_use]
    pub fn regularization(&self) -> f64 {
        self.regularization
    }
}
