use descent_core::{Descendible, Observer};

use super::{
    Action, Bounds, Config, Error, Event, Point, Solution,
    scan::{Scan, steepest},
    solution::Status,
    state::{Eval, State},
};

/// Core linear descent loop.
///
/// The direction set is computed once and reused for every iteration. Each
/// iteration moves from the best point toward its steepest neighbour, clamps
/// the result into `bounds`, and stops at the first step that makes the loss
/// worse.
pub(super) fn search<D, Obs>(
    descendible: &D,
    start: D::Input,
    bounds: &Bounds<D::Input>,
    epsilon: &D::Input,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<D::Input>, Error<D::Error>>
where
    D: Descendible,
    Obs: for<'a> Observer<Event<'a, D>, Action>,
{
    if !descendible.bounds_ordered(&bounds.min, &bounds.max) {
        return Err(Error::InvalidBounds);
    }

    let directions = descendible.directions(epsilon);
    if directions.is_empty() {
        return Err(Error::NoDirections);
    }

    let start_loss = descendible.loss(&start).map_err(Error::Loss)?;
    let mut state = State::new(Point::new(start, start_loss));

    for iter in 1..=config.max_iters() {
        let probe = match steepest(descendible, &mut state, &directions, iter, &mut observer)? {
            Scan::Steepest(probe) => probe,
            Scan::Exhausted => return Ok(state.into_solution(Status::LocalMinimum, iter)),
            Scan::StopEarly => return Ok(state.into_solution(Status::StoppedByObserver, iter)),
        };

        let candidate = descendible.clamp(&probe, &bounds.min, &bounds.max);

        let loss = match state.evaluate(descendible, &candidate, iter, &mut observer)? {
            Eval::Loss(loss) => loss,
            Eval::AssumeWorse => return Ok(state.into_solution(Status::LocalMinimum, iter)),
            Eval::StopEarly => return Ok(state.into_solution(Status::StoppedByObserver, iter)),
        };
        let point = Point::new(candidate, loss);

        let action = observer.observe(&Event::Stepped {
            iter,
            point: &point,
            best: state.best(),
        });

        match action {
            Some(Action::StopEarly) => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter));
            }
            Some(Action::AssumeWorse) => {
                tracing::trace!(iter, loss, "step discarded by observer");
                state.reject(point);
                return Ok(state.into_solution(Status::LocalMinimum, iter));
            }
            None if !state.best().admits(loss) => {
                tracing::trace!(iter, loss, best = state.best().loss, "step rejected");
                state.reject(point);
                return Ok(state.into_solution(Status::LocalMinimum, iter));
            }
            None => {
                tracing::trace!(iter, loss, "step accepted");
                state.accept(point);
            }
        }
    }

    Ok(state.into_solution(Status::MaxIters, config.max_iters()))
}
