use descent_core::Descendible;

use super::Point;

/// Events emitted by the linear descent solver.
///
/// Successful probes during the direction scan are not reported; only the
/// clamped step candidate of each iteration and any loss failures are.
/// `best` is the best point before the event, which is also the point the
/// solver is currently stepping from.
pub enum Event<'a, D>
where
    D: Descendible,
{
    /// The step candidate for this iteration was evaluated.
    ///
    /// The solver adopts it only if its loss is no worse than `best` and the
    /// observer does not intervene.
    Stepped {
        /// The 1-based iteration number.
        iter: usize,

        /// The clamped candidate and its loss.
        point: &'a Point<D::Input>,

        /// The best point so far.
        best: &'a Point<D::Input>,
    },

    /// A probe or step candidate could not be evaluated.
    LossFailed {
        /// The 1-based iteration number.
        iter: usize,

        /// The input that failed.
        input: &'a D::Input,

        /// The best point so far.
        best: &'a Point<D::Input>,

        /// The loss error.
        error: &'a D::Error,
    },
}

impl<D> Event<'_, D>
where
    D: Descendible,
{
    /// Returns the iteration the event belongs to.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Stepped { iter, .. } | Self::LossFailed { iter, .. } => *iter,
        }
    }

    /// Returns the input that was evaluated (or attempted).
    #[must_use]
    pub fn input(&self) -> &D::Input {
        match self {
            Self::Stepped { point, .. } => &point.input,
            Self::LossFailed { input, .. } => input,
        }
    }

    /// Returns the evaluated loss, or `None` if evaluation failed.
    #[must_use]
    pub fn loss(&self) -> Option<f32> {
        match self {
            Self::Stepped { point, .. } => Some(point.loss),
            Self::LossFailed { .. } => None,
        }
    }

    /// Returns the best point so far.
    #[must_use]
    pub fn best(&self) -> &Point<D::Input> {
        match self {
            Self::Stepped { best, .. } | Self::LossFailed { best, .. } => best,
        }
    }
}
