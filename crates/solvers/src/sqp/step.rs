//! The Newton step on the KKT stationarity conditions.

use nalgebra::{DMatrix, DVector};
use sqp_core::ConstrainedProblem;
use tracing::{trace, warn};

use super::{
    Error, Iterate,
    kkt::{self, PRIMAL_DIM},
};

/// A Newton direction in primal and dual variables.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonStep {
    /// Step in `x`.
    pub dx: f64,

    /// Step in `y`.
    pub dy: f64,

    /// Step in each multiplier.
    pub dmultipliers: DVector<f64>,
}

impl NewtonStep {
    /// Splits a stacked `(2 + m)` solution into primal and dual parts.
    fn from_stacked(step: &DVector<f64>) -> Self {
        Self {
            dx: step[0],
            dy: step[1],
            dmultipliers: step.rows(PRIMAL_DIM, step.len() - PRIMAL_DIM).into_owned(),
        }
    }
}

/// Computes the Newton step `J · step = -∇L` at `iterate`.
///
/// # Errors
///
/// Returns [`Error::SingularSystem`] if the KKT matrix cannot be factored
/// reliably, or a problem or shape error from evaluating the derivatives.
pub(super) fn compute<P>(
    problem: &P,
    iterate: &Iterate,
    regularization: f64,
) -> Result<NewtonStep, Error>
where
    P: ConstrainedProblem,
{
    let kkt = kkt::assemble(problem, iterate, regularization)?;

    let gradient = problem
        .lagrangian_gradient(&iterate.point, &iterate.multipliers)
        .map_err(Error::problem)?;
    Error::check_len("Lagrangian gradient", kkt.nrows(), gradient.len())?;

    trace!(dim = kkt.nrows(), "solving KKT system");

    let Some(step) = solve(kkt, -gradient) else {
        warn!(x = iterate.point.x, y = iterate.point.y, "singular KKT matrix");
        return Err(Error::SingularSystem {
            point: iterate.point,
        });
    };

    let step = NewtonStep::from_stacked(&step);
    trace!(dx = step.dx, dy = step.dy, "newton step");
    Ok(step)
}

/// Solves `matrix · x = rhs` by LU decomposition with partial pivoting.
///
/// Each row is first scaled by its largest entry so the pivot test does not
/// depend on how the objective and constraints are scaled. Returns `None` if
/// a row is zero, if the smallest pivot is negligible next to the largest,
/// or if the solution is not finite.
fn solve(mut matrix: DMatrix<f64>, mut rhs: DVector<f64>) -> Option<DVector<f64>> {
    #[allow(clippy::cast_precision_loss)]
    let dim = matrix.nrows() as f64;

    for (i, mut row) in matrix.row_iter_mut().enumerate() {
        let scale = row.amax();
        if !scale.is_finite() || scale == 0.0 {
            return None;
        }
        row /= scale;
        rhs[i] /= scale;
    }

    let lu = matrix.lu();
    let pivots = lu.u().diagonal();
    let largest = pivots.amax();
    let smallest = pivots.iter().fold(f64::INFINITY, |acc, p| acc.min(p.abs()));

    if smallest.is_nan() || smallest <= f64::EPSILON * dim * largest {
        return None;
    }

    lu.solve(&rhs)
        .filter(|solution| solution.iter().all(|value| value.is_finite()))
}
