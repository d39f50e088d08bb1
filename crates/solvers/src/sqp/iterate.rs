use nalgebra::DVector;
use sqp_core::{Point, StepIntegrable};

use super::NewtonStep;

/// A primal point together with its multiplier estimates.
///
/// The solver never mutates an iterate; each step produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Iterate {
    /// The primal point `(x, y)`.
    pub point: Point,

    /// One multiplier per constraint.
    pub multipliers: DVector<f64>,
}

impl Iterate {
    /// Creates an iterate from a point and multiplier estimates.
    #[must_use]
    pub fn new(point: impl Into<Point>, multipliers: DVector<f64>) -> Self {
        Self {
            point: point.into(),
            multipliers,
        }
    }

    /// Creates an iterate for a problem without constraints.
    #[must_use]
    pub fn unconstrained(point: impl Into<Point>) -> Self {
        Self::new(point, DVector::zeros(0))
    }
}

impl StepIntegrable<f64> for Iterate {
    type Direction = NewtonStep;

    /// Applies the same damping factor to the primal and dual components.
    fn step(&self, direction: NewtonStep, lr: f64) -> Self {
        let point = Point::new(
            self.point.x + lr * direction.dx,
            self.point.y + lr * direction.dy,
        );
        let multipliers = &self.multipliers + direction.dmultipliers * lr;
        Self { point, multipliers }
    }
}
