//! Sequential quadratic programming for two-variable constrained problems.
//!
//! # Algorithm
//!
//! The solver applies Newton's method to the KKT stationarity conditions
//! `∇L(x, y, λ) = 0`. At every iterate it assembles the bordered KKT matrix
//!
//! ```text
//! [ Hf + Σ λ_i Hg_i   Jgᵀ ]
//! [ Jg                0   ]
//! ```
//!
//! solves `J · step = -∇L`, and moves primal and dual variables by the same
//! damping factor `lr`:
//!
//! ```text
//! (x, y, λ) ← (x, y, λ) + lr · step
//! ```
//!
//! Iteration stops once `‖∇L‖` is at most the configured goal.
//!
//! # Limitations
//!
//! - **Every constraint is active**: each constraint is treated as an equality
//!   of the QP subproblem at every iteration. Multiplier signs are not
//!   projected, so inequality constraints behave as equalities.
//! - **No globalization**: there is no line search or trust region. Far from
//!   a KKT point the Newton step may increase the residual.
//! - **Two variables only**: the primal point is always `(x, y)`.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Iterated`] for the initial iterate and after
//! every step, then a single [`Event::Converged`] on success. Observers can
//! return [`Action::StopEarly`] from an `Iterated` event to halt with
//! [`Status::StoppedByObserver`]. The action returned for `Converged` is
//! ignored.
//!
//! # Example
//!
//! ```
//! use nalgebra::{DMatrix, DVector, Matrix2};
//! use sqp_core::Callables;
//! use sqp_solvers::sqp::{self, Config, Iterate};
//!
//! // Minimize (x - 1)² + (y - 2)² on the line x + y = 1.
//! let problem = Callables::new(
//!     1,
//!     |x, y| (x - 1.0).powi(2) + (y - 2.0).powi(2),
//!     |_, _| Matrix2::identity() * 2.0,
//!     |_, _| vec![Matrix2::zeros()],
//!     |_, _| DMatrix::from_row_slice(1, 2, &[1.0, 1.0]),
//!     |x, y, l: &DVector<f64>| {
//!         DVector::from_vec(vec![2.0 * (x - 1.0) + l[0], 2.0 * (y - 2.0) + l[0], x + y - 1.0])
//!     },
//! );
//!
//! let initial = Iterate::new([0.0, 0.0], DVector::zeros(1));
//! let solution = sqp::solve_unobserved(&problem, initial, &Config::default()).unwrap();
//!
//! let (x, y, trajectory) = solution.into_parts();
//! assert!(x.abs() < 1e-4 && (y - 1.0).abs() < 1e-4);
//! assert!(trajectory.len() > 1);
//! ```

mod action;
mod best;
mod config;
mod error;
mod event;
mod iterate;
mod kkt;
mod solution;
mod step;


pub use action::Action;
pub use best::Best;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use iterate::Iterate;
pub use solution::{Solution, Status};
pub use step::NewtonStep;

use sqp_core::{ConstrainedProblem, Observer, StepIntegrable};
use tracing::{debug, warn};

/// Finds a KKT point of the problem starting from `initial`.
///
/// The observer receives an [`Event`] for every iterate, including the
/// initial one. See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns an error if:
/// - a problem method fails or returns data of the wrong shape,
/// - the KKT matrix is singular at some iterate,
/// - the Lagrangian gradient is not finite,
/// - the goal is not reached within `config.max_iters()` steps.
pub fn solve<P, Obs>(
    problem: &P,
    initial: Iterate,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: ConstrainedProblem,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    Error::check_len(
        "initial multipliers",
        problem.num_constraints(),
        initial.multipliers.len(),
    )?;

    let mut current = initial;
    let mut residual_norm = lagrangian_residual(problem, &current)?;
    let mut objective = problem.objective(&current.point).map_err(Error::problem)?;
    let mut trajectory = vec![current.point];
    let mut best = Best::new(&current, residual_norm);

    debug!(
        iter = 0,
        x = current.point.x,
        y = current.point.y,
        residual_norm,
        "sqp start"
    );

    let event = Event::Iterated {
        iter: 0,
        iterate: &current,
        objective,
        residual_norm,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            iterate: current,
            objective,
            residual_norm,
            iters: 0,
            trajectory,
        });
    }

    let mut iters = 0;

    while residual_norm > config.goal() {
        if iters == config.max_iters() {
            warn!(
                iters,
                best_residual_norm = best.residual_norm,
                "sqp did not converge"
            );
            return Err(Error::NonConvergence {
                iters,
                best: Box::new(best),
            });
        }
        iters += 1;

        let direction = step::compute(problem, &current, config.regularization())?;
        current = current.step(direction, config.lr());

        residual_norm = lagrangian_residual(problem, &current)?;
        objective = problem.objective(&current.point).map_err(Error::problem)?;
        trajectory.push(current.point);
        best.update(iters, &current, residual_norm);

        debug!(
            iter = iters,
            x = current.point.x,
            y = current.point.y,
            residual_norm,
            "sqp step"
        );

        let event = Event::Iterated {
            iter: iters,
            iterate: &current,
            objective,
            residual_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                iterate: current,
                objective,
                residual_norm,
                iters,
                trajectory,
            });
        }
    }

    debug!(iters, residual_norm, "sqp converged");

    let event = Event::Converged {
        iters,
        iterate: &current,
        objective,
        residual_norm,
    };
    observer.observe(&event);

    Ok(Solution {
        status: Status::Converged,
        iterate: current,
        objective,
        residual_norm,
        iters,
        trajectory,
    })
}

/// Finds a KKT point without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<P>(
    problem: &P,
    initial: Iterate,
    config: &Config,
) -> Result<Solution, Error>
where
    P: ConstrainedProblem,
{
    solve(problem, initial, config, ())
}

/// Evaluates `‖∇L‖` at an iterate, checking its shape and finiteness.
fn lagrangian_residual<P>(problem: &P, iterate: &Iterate) -> Result<f64, Error>
where
    P: ConstrainedProblem,
{
    let gradient = problem
        .lagrangian_gradient(&iterate.point, &iterate.multipliers)
        .map_err(Error::problem)?;
    Error::check_len(
        "Lagrangian gradient",
        kkt::PRIMAL_DIM + iterate.multipliers.len(),
        gradient.len(),
    )?;

    let norm = gradient.norm();
    if norm.is_finite() {
        Ok(norm)
    } else {
        Err(Error::NonFiniteResidual {
            point: iterate.point,
        })
    }
}
