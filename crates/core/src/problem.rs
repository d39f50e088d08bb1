use std::convert::Infallible;

use nalgebra::{DMatrix, DVector, Matrix2};

use crate::Point;

/// Defines a constrained minimization problem in two variables.
///
/// The problem supplies the objective and every derivative the solver needs;
/// nothing is differentiated automatically. Constraints are `g_i(x, y)` for
/// `i in 0..num_constraints()`, and the Lagrangian is
/// `L(x, y, λ) = f(x, y) + Σ λ_i g_i(x, y)`.
///
/// Shapes are part of the contract. The solver validates them and reports a
/// shape mismatch rather than computing with garbled data:
///
/// | method                   | shape          |
/// |--------------------------|----------------|
/// | `objective_hessian`      | 2×2            |
/// | `constraints_jacobian`   | m×2            |
/// | `constraints_hessians`   | m blocks, 2×2  |
/// | `lagrangian_gradient`    | (2 + m)        |
pub trait ConstrainedProblem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of constraints `m`.
    fn num_constraints(&self) -> usize;

    /// Computes the objective value `f(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, point: &Point) -> Result<f64, Self::Error>;

    /// Computes the objective Hessian.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Hessian cannot be computed.
    fn objective_hessian(&self, point: &Point) -> Result<Matrix2<f64>, Self::Error>;

    /// Computes the constraint Jacobian, one row per constraint.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn constraints_jacobian(&self, point: &Point) -> Result<DMatrix<f64>, Self::Error>;

    /// Computes the Hessian of each constraint, in constraint order.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if any Hessian cannot be computed.
    fn constraints_hessians(&self, point: &Point) -> Result<Vec<Matrix2<f64>>, Self::Error>;

    /// Computes the Lagrangian gradient with respect to `(x, y, λ)`.
    ///
    /// The result is stacked primal first: `[∂L/∂x, ∂L/∂y, ∂L/∂λ_0, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed.
    fn lagrangian_gradient(
        &self,
        point: &Point,
        multipliers: &DVector<f64>,
    ) -> Result<DVector<f64>, Self::Error>;
}

/// Adapter that builds a [`ConstrainedProblem`] from plain closures.
///
/// Each closure takes the coordinates directly, mirroring how derivatives are
/// usually written down by hand:
///
/// - `f(x, y) -> f64`
/// - `hf(x, y) -> Matrix2`
/// - `hg(x, y) -> Vec<Matrix2>`
/// - `jg(x, y) -> DMatrix` (m×2)
/// - `dl(x, y, λ) -> DVector` (2 + m)
///
/// # Example
///
/// ```
/// use nalgebra::{DMatrix, DVector, Matrix2};
/// use sqp_core::{Callables, ConstrainedProblem, Point};
///
/// // f(x, y) = x² + y², no constraints.
/// let problem = Callables::new(
///     0,
///     |x, y| x * x + y * y,
///     |_, _| Matrix2::identity() * 2.0,
///     |_, _| Vec::new(),
///     |_, _| DMatrix::zeros(0, 2),
///     |x, y, _: &DVector<f64>| DVector::from_vec(vec![2.0 * x, 2.0 * y]),
/// );
///
/// let value = problem.objective(&Point::new(1.0, 2.0)).unwrap();
/// assert_eq!(value, 5.0);
/// ```
pub struct Callables<F, HF, HG, JG, DL> {
    num_constraints: usize,
    f: F,
    hf: HF,
    hg: HG,
    jg: JG,
    dl: DL,
}

impl<F, HF, HG, JG, DL> Callables<F, HF, HG, JG, DL>
where
    F: Fn(f64, f64) -> f64,
    HF: Fn(f64, f64) -> Matrix2<f64>,
    HG: Fn(f64, f64) -> Vec<Matrix2<f64>>,
    JG: Fn(f64, f64) -> DMatrix<f64>,
    DL: Fn(f64, f64, &DVector<f64>) -> DVector<f64>,
{
    /// Bundles the closures for a problem with `num_constraints` constraints.
    pub fn new(num_constraints: usize, f: F, hf: HF, hg: HG, jg: JG, dl: DL) -> Self {
        Self {
            num_constraints,
            f,
            hf,
            hg,
            jg,
            dl,
        }
    }
}

impl<F, HF, HG, JG, DL> ConstrainedProblem for Callables<F, HF, HG, JG, DL>
where
    F: Fn(f64, f64) -> f64,
    HF: Fn(f64, f64) -> Matrix2<f64>,
    HG: Fn(f64, f64) -> Vec<Matrix2<f64>>,
    JG: Fn(f64, f64) -> DMatrix<f64>,
    DL: Fn(f64, f64, &DVector<f64>) -> DVector<f64>,
{
    type Error = Infallible;

    fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    fn objective(&self, point: &Point) -> Result<f64, Self::Error> {
        Ok((self.f)(point.x, point.y))
    }

    fn objective_hessian(&self, point: &Point) -> Result<Matrix2<f64>, Self::Error> {
        Ok((self.hf)(point.x, point.y))
    }

    fn constraints_jacobian(&self, point: &Point) -> Result<DMatrix<f64>, Self::Error> {
        Ok((self.jg)(point.x, point.y))
    }

    fn constraints_hessians(&self, point: &Point) -> Result<Vec<Matrix2<f64>>, Self::Error> {
        Ok((self.hg)(point.x, point.y))
    }

    fn lagrangian_gradient(
        &self,
        point: &Point,
        multipliers: &DVector<f64>,
    ) -> Result<DVector<f64>, Self::Error> {
        Ok((self.dl)(point.x, point.y, multipliers))
    }
}
