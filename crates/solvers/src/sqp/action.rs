/// Control actions supported by the SQP solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate and trajectory.
    StopEarly,
}
