use descent_core::Observer;

use crate::traits::HasLoss;

/// Records the loss of every evaluated step.
///
/// Events without a loss (failed evaluations) are skipped. The recorder never
/// returns an action, so it does not change how the solver behaves.
///
/// Pass `&mut history` to keep the record after the solve:
///
/// ```
/// use descent_core::LossFn;
/// use descent_observers::LossHistory;
/// use descent_solvers::optimization::linear_descent::{self, Bounds, Config};
///
/// let contract = LossFn::new(|x: &f32| (x - 1.0).powi(2));
/// let mut history = LossHistory::new();
///
/// linear_descent::minimize(
///     &contract,
///     0.0,
///     &Bounds::new(-5.0, 5.0),
///     &0.25,
///     &Config::default(),
///     &mut history,
/// )
/// .unwrap();
///
/// assert!(history.is_non_increasing_until_last());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossHistory {
    entries: Vec<(usize, f32)>,
}

impl LossHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(iter, loss)` pairs in order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Returns the most recent loss, if any.
    #[must_use]
    pub fn last_loss(&self) -> Option<f32> {
        self.entries.last().map(|&(_, loss)| loss)
    }

    /// Returns `true` if every recorded loss is no greater than the one before,
    /// ignoring the final entry.
    ///
    /// The final step of a converged search is the candidate that made things
    /// worse, so it is excluded.
    #[must_use]
    pub fn is_non_increasing_until_last(&self) -> bool {
        let len = self.entries.len().saturating_sub(1);
        self.entries[..len].windows(2).all(|w| w[1].1 <= w[0].1)
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn record<E: HasLoss>(&mut self, event: &E) {
        if let Some(loss) = event.loss() {
            self.entries.push((event.iter(), loss));
        }
    }
}

impl<E: HasLoss, A> Observer<E, A> for LossHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E: HasLoss, A> Observer<E, A> for &mut LossHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
