use descent_core::{Descendible, Observer};

use super::{Action, Error, Event, Point, Solution, Status};

/// Result of one loss evaluation after the observer has had its say.
pub(super) enum Eval {
    Loss(f32),
    AssumeWorse,
    StopEarly,
}

/// Mutable search state shared by the scan and the step.
///
/// The point being stepped from is always the best point: a candidate is
/// either adopted as the new best or ends the search.
pub(super) struct State<T> {
    best: Point<T>,
    rejected: Option<Point<T>>,
    evals: usize,
}

impl<T> State<T> {
    /// Creates state from the evaluated starting point.
    pub(super) fn new(start: Point<T>) -> Self {
        Self {
            best: start,
            rejected: None,
            evals: 1,
        }
    }

    pub(super) fn best(&self) -> &Point<T> {
        &self.best
    }

    /// Evaluates `input`, reporting a failure to the observer.
    ///
    /// Successful evaluations are not reported here; the caller decides
    /// which of them become events.
    pub(super) fn evaluate<D, Obs>(
        &mut self,
        descendible: &D,
        input: &T,
        iter: usize,
        observer: &mut Obs,
    ) -> Result<Eval, Error<D::Error>>
    where
        D: Descendible<Input = T>,
        Obs: for<'a> Observer<Event<'a, D>, Action>,
    {
        self.evals += 1;

        match descendible.loss(input) {
            Ok(loss) => Ok(Eval::Loss(loss)),
            Err(error) => {
                let event = Event::LossFailed {
                    iter,
                    input,
                    best: &self.best,
                    error: &error,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => Ok(Eval::StopEarly),
                    Some(Action::AssumeWorse) => Ok(Eval::AssumeWorse),
                    None => Err(Error::Loss(error)),
                }
            }
        }
    }

    /// Adopts `point` as the new best.
    pub(super) fn accept(&mut self, point: Point<T>) {
        self.best = point;
    }

    /// Records the candidate that ended the search.
    pub(super) fn reject(&mut self, point: Point<T>) {
        self.rejected = Some(point);
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<T> {
        tracing::debug!(
            ?status,
            iters,
            evals = self.evals,
            loss = self.best.loss,
            "linear descent finished"
        );

        Solution {
            status,
            input: self.best.input,
            loss: self.best.loss,
            rejected: self.rejected,
            iters,
            evals: self.evals,
        }
    }
}
