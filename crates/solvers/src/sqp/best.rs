use super::Iterate;

/// The iterate with the smallest residual norm seen so far.
#[derive(Debug, Clone)]
pub struct Best {
    /// Iteration index at which this iterate was produced.
    pub iter: usize,

    /// The iterate itself.
    pub iterate: Iterate,

    /// Lagrangian gradient norm at the iterate.
    pub residual_norm: f64,
}

impl Best {
    /// Starts tracking from the initial iterate.
    pub(super) fn new(iterate: &Iterate, residual_norm: f64) -> Self {
        Self {
            iter: 0,
            iterate: iterate.clone(),
            residual_norm,
        }
    }

    /// Replaces the tracked iterate if `residual_norm` improves on it.
    pub(super) fn update(&mut self, iter: usize, iterate: &Iterate, residual_norm: f64) {
        if residual_norm >= self.residual_norm {
            return;
        }
        self.iter = iter;
        self.iterate = iterate.clone();
        self.residual_norm = residual_norm;
    }
}
