//! Assembly of the KKT Jacobian.
//!
//! For `n = 2` primal variables and `m` constraints the Jacobian of the
//! Lagrangian gradient is the bordered `(2 + m)×(2 + m)` matrix
//!
//! ```text
//! [ B    Jgᵀ ]
//! [ Jg   0   ]
//! ```
//!
//! where `B = Hf + Σ λ_i Hg_i` is the Hessian of the Lagrangian.

use nalgebra::{DMatrix, DVector, Matrix2};
use sqp_core::ConstrainedProblem;

use super::{Error, Iterate};

/// Number of primal variables.
pub(super) const PRIMAL_DIM: usize = 2;

/// Computes the Lagrangian Hessian block `B = Hf + Σ λ_i Hg_i`.
///
/// # Errors
///
/// Returns a shape mismatch if the number of constraint Hessians differs
/// from the number of multipliers.
pub(super) fn lagrangian_hessian(
    objective_hessian: Matrix2<f64>,
    constraint_hessians: &[Matrix2<f64>],
    multipliers: &DVector<f64>,
) -> Result<Matrix2<f64>, Error> {
    Error::check_len(
        "constraint Hessians",
        multipliers.len(),
        constraint_hessians.len(),
    )?;

    Ok(constraint_hessians
        .iter()
        .zip(multipliers.iter())
        .fold(objective_hessian, |acc, (hessian, &lambda)| {
            acc + hessian * lambda
        }))
}

/// Borders `B` with the constraint Jacobian.
///
/// A positive `regularization` adds `δ` to the primal diagonal and `-δ` to
/// the dual diagonal.
pub(super) fn bordered(
    hessian: &Matrix2<f64>,
    jacobian: &DMatrix<f64>,
    regularization: f64,
) -> DMatrix<f64> {
    let dim = PRIMAL_DIM + jacobian.nrows();

    DMatrix::from_fn(dim, dim, |row, col| {
        let diagonal = if row != col {
            0.0
        } else if row < PRIMAL_DIM {
            regularization
        } else {
            -regularization
        };

        let entry = match (row < PRIMAL_DIM, col < PRIMAL_DIM) {
            (true, true) => hessian[(row, col)],
            (true, false) => jacobian[(col - PRIMAL_DIM, row)],
            (false, true) => jacobian[(row - PRIMAL_DIM, col)],
            (false, false) => 0.0,
        };

        entry + diagonal
    })
}

/// Evaluates the problem's derivatives and assembles the KKT Jacobian.
///
/// # Errors
///
/// Returns an error if a problem method fails or returns data of the wrong
/// shape for the problem's constraint count.
pub(super) fn assemble<P>(
    problem: &P,
    iterate: &Iterate,
    regularization: f64,
) -> Result<DMatrix<f64>, Error>
where
    P: ConstrainedProblem,
{
    let m = problem.num_constraints();
    let point = &iterate.point;

    let objective_hessian = problem
        .objective_hessian(point)
        .map_err(Error::problem)?;
    let constraint_hessians = problem
        .constraints_hessians(point)
        .map_err(Error::problem)?;
    let jacobian = problem
        .constraints_jacobian(point)
        .map_err(Error::problem)?;

    Error::check_len("constraint Hessians", m, constraint_hessians.len())?;
    Error::check_shape("constraint Jacobian", (m, PRIMAL_DIM), jacobian.shape())?;

    let hessian = lagrangian_hessian(
        objective_hessian,
        &constraint_hessians,
        &iterate.multipliers,
    )?;

    Ok(bordered(&hessian, &jacobian, regularization))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn hessian_block_weights_constraints_by_multipliers() {
        let hf = Matrix2::new(2.0, 0.0, 0.0, 2.0);
        let hg = [Matrix2::new(1.0, 0.5, 0.5, 0.0), Matrix2::new(0.0, 0.0, 0.0, 4.0)];
        let lambda = DVector::from_vec(vec![2.0, -0.5]);

        let b = lagrangian_hessian(hf, &hg, &lambda).unwrap();

        assert_relative_eq!(b, Matrix2::new(4.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn hessian_block_without_constraints_is_objective_hessian() {
        let hf = Matrix2::new(3.0, 1.0, 1.0, 5.0);

        let b = lagrangian_hessian(hf, &[], &DVector::zeros(0)).unwrap();

        assert_relative_eq!(b, hf);
    }

    #[test]
    fn hessian_block_rejects_count_mismatch() {
        let hf = Matrix2::identity();
        let hg = [Matrix2::identity()];
        let lambda = DVector::from_vec(vec![1.0, 2.0]);

        let result = lagrangian_hessian(hf, &hg, &lambda);

        assert!(matches!(
            result,
            Err(Error::ShapeMismatch {
                expected: (2, 1),
                actual: (1, 1),
                ..
            })
        ));
    }

    #[test]
    fn bordered_places_jacobian_and_transpose() {
        let b = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let jg = DMatrix::from_row_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let kkt = bordered(&b, &jg, 0.0);

        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(4, 4, &[
            1.0, 2.0, 5.0, 7.0,
            3.0, 4.0, 6.0, 8.0,
            5.0, 6.0, 0.0, 0.0,
            7.0, 8.0, 0.0, 0.0,
        ]);
        assert_relative_eq!(kkt, expected);
    }

    #[test]
    fn bordered_without_constraints_is_hessian_block() {
        let b = Matrix2::new(2.0, 0.0, 0.0, 2.0);

        let kkt = bordered(&b, &DMatrix::zeros(0, 2), 0.0);

        assert_eq!(kkt.shape(), (2, 2));
        assert_relative_eq!(kkt, DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 2.0]));
    }

    #[test]
    fn regularization_shifts_diagonal_by_block() {
        let b = Matrix2::zeros();
        let jg = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);

        let kkt = bordered(&b, &jg, 0.25);

        assert_relative_eq!(kkt[(0, 0)], 0.25);
        assert_relative_eq!(kkt[(1, 1)], 0.25);
        assert_relative_eq!(kkt[(2, 2)], -0.25);
        assert_relative_eq!(kkt[(0, 2)], 1.0);
    }
}
