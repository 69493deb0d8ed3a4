use super::Point;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A step was rejected, so the best point is a local minimum under the
    /// direction set.
    LocalMinimum,

    /// Used every iteration without a rejected step.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a linear descent search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// Best input found.
    pub input: T,

    /// Loss at `input`.
    pub loss: f32,

    /// The step candidate that ended the search, if it was evaluated.
    ///
    /// The returned `input` is always the best point seen, which is one step
    /// behind this candidate. `None` when the search ended for any other
    /// reason or the candidate's loss evaluation failed.
    pub rejected: Option<Point<T>>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of loss evaluations, including the starting point.
    pub evals: usize,
}
