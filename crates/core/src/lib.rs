//! Core traits and types for sequential quadratic programming.
//!
//! This crate defines the shared abstractions that the SQP solver and its
//! observers build on:
//!
//! - [`Point`] — a primal iterate `(x, y)`
//! - [`ConstrainedProblem`] — supplies the objective and the derivatives the
//!   solver needs, for any concrete problem definition
//! - [`Callables`] — adapts plain closures into a [`ConstrainedProblem`]
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`StepIntegrable`] — values advanced by a scaled direction

mod observer;
mod point;
mod problem;
mod step;

pub use observer::Observer;
pub use point::Point;
pub use problem::{Callables, ConstrainedProblem};
pub use step::{DirectionOf, StepIntegrable};
