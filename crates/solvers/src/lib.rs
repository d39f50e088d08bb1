//! Solvers for constrained optimization problems.
//!
//! # Solvers
//!
//! - [`sqp`] — sequential quadratic programming by Newton iteration on the
//!   KKT stationarity conditions

pub mod sqp;
