use std::error::Error as StdError;

use sqp_core::Point;
use thiserror::Error;

use super::{best::Best, config::ConfigError};

/// Errors that can occur during an SQP solve.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration was rejected.
    ///
    /// The solver itself only accepts a validated [`Config`], so this
    /// variant is produced by `?` on [`Config::new`] or
    /// [`Config::with_regularization`] in code that returns this error type.
    ///
    /// [`Config`]: super::Config
    /// [`Config::new`]: super::Config::new
    /// [`Config::with_regularization`]: super::Config::with_regularization
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A problem method returned data of the wrong dimension.
    #[error("{quantity} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        quantity: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The KKT matrix could not be factored at this point.
    ///
    /// Rows are equilibrated before factoring, so this reports a system that
    /// is singular or ill-conditioned after scaling, not one that merely mixes
    /// very large and very small derivatives.
    #[error("KKT matrix is singular at {point}")]
    SingularSystem { point: Point },

    /// The Lagrangian gradient evaluated to NaN or infinity.
    #[error("Lagrangian gradient is not finite at {point}")]
    NonFiniteResidual { point: Point },

    /// The iteration limit was reached before the goal.
    ///
    /// `best` holds the iterate with the smallest residual norm seen.
    #[error("no convergence after {iters} iterations")]
    NonConvergence { iters: usize, best: Box<Best> },

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }

    /// Checks a vector length against the expected one.
    pub(crate) fn check_len(
        quantity: &'static str,
        expected: usize,
        actual: usize,
    ) -> Result<(), Self> {
        Self::check_shape(quantity, (expected, 1), (actual, 1))
    }

    /// Checks a matrix shape against the expected one.
    pub(crate) fn check_shape(
        quantity: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::ShapeMismatch {
                quantity,
                expected,
                actual,
            })
        }
    }
}
