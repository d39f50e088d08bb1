use super::Iterate;

/// Events emitted by the SQP solver.
///
/// `Iterated` is emitted once for the initial iterate (`iter == 0`) and once
/// after every Newton step. `Converged` is emitted exactly once, when the
/// residual norm first reaches the goal, and carries the final summary.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A new iterate was produced.
    Iterated {
        /// Iteration index (0 for the initial iterate).
        iter: usize,

        /// The iterate after this step.
        iterate: &'a Iterate,

        /// Objective value at the iterate's point.
        objective: f64,

        /// Euclidean norm of the Lagrangian gradient.
        residual_norm: f64,
    },

    /// The solver converged.
    Converged {
        /// Number of Newton steps taken.
        iters: usize,

        /// The final iterate.
        iterate: &'a Iterate,

        /// Objective value at the final point.
        objective: f64,

        /// Euclidean norm of the Lagrangian gradient.
        residual_norm: f64,
    },
}

impl Event<'_> {
    /// Returns the iteration index (the step count for `Converged`).
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Iterated { iter, .. } => *iter,
            Self::Converged { iters, .. } => *iters,
        }
    }

    /// Returns the iterate carried by the event.
    #[must_use]
    pub fn iterate(&self) -> &Iterate {
        match self {
            Self::Iterated { iterate, .. } | Self::Converged { iterate, .. } => iterate,
        }
    }

    /// Returns the objective value at the event's point.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Iterated { objective, .. } | Self::Converged { objective, .. } => *objective,
        }
    }

    /// Returns the Lagrangian gradient norm at the event's iterate.
    #[must_use]
    pub fn residual_norm(&self) -> f64 {
        match self {
            Self::Iterated { residual_norm, .. } | Self::Converged { residual_norm, .. } => {
                *residual_norm
            }
        }
    }
}
