/// A trait for values that advance along a direction scaled by a step size.
///
/// Iterative solvers use this to produce the next iterate as a fresh value,
/// `next = current + direction * delta`, instead of mutating in place. This
/// keeps every recorded iterate intact and makes snapshots trivially safe.
///
/// `Delta` is usually a plain `f64` damping factor.
pub trait StepIntegrable<Delta> {
    /// The direction type the value is stepped along.
    type Direction;

    /// Returns the value after stepping along `direction` scaled by `delta`.
    #[must_use]
    fn step(&self, direction: Self::Direction, delta: Delta) -> Self;
}

/// Type alias for the direction of a `StepIntegrable` type.
pub type DirectionOf<T, Delta> = <T as StepIntegrable<Delta>>::Direction;
