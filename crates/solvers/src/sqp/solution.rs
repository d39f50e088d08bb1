use sqp_core::Point;

use super::Iterate;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The Lagrangian gradient norm reached the configured goal.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an SQP solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final primal point and multipliers.
    pub iterate: Iterate,

    /// Objective value at the final point.
    pub objective: f64,

    /// Lagrangian gradient norm at the final iterate.
    pub residual_norm: f64,

    /// Number of Newton steps taken.
    pub iters: usize,

    /// Every visited point, starting with the initial one.
    ///
    /// Always holds `iters + 1` points.
    pub trajectory: Vec<Point>,
}

impl Solution {
    /// Returns the final primal point.
    #[must_use]
    pub fn point(&self) -> Point {
        self.iterate.point
    }

    /// Splits the solution into `(x, y, trajectory)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, f64, Vec<Point>) {
        let Point { x, y } = self.iterate.point;
        (x, y, self.trajectory)
    }
}
