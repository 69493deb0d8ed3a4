use descent_core::{Descendible, Observer};

use super::{
    Action, Error, Event, Point,
    state::{Eval, State},
};

/// Outcome of probing every direction from the current best point.
pub(super) enum Scan<T> {
    /// The unclamped probe with the strictly lowest loss.
    Steepest(T),

    /// No probe produced a usable loss.
    Exhausted,

    /// The observer asked to stop.
    StopEarly,
}

/// Probes `best + d` for every direction `d` and keeps the lowest loss.
///
/// This stands in for a gradient: every neighbour is evaluated, in direction
/// order, and the first strict minimum wins ties. `NaN` losses and failures
/// the observer marks [`Action::AssumeWorse`] are never selected.
pub(super) fn steepest<D, Obs>(
    descendible: &D,
    state: &mut State<D::Input>,
    directions: &[D::Input],
    iter: usize,
    observer: &mut Obs,
) -> Result<Scan<D::Input>, Error<D::Error>>
where
    D: Descendible,
    Obs: for<'a> Observer<Event<'a, D>, Action>,
{
    let mut steepest: Option<Point<D::Input>> = None;

    for direction in directions {
        let probe = descendible.add(&state.best().input, direction);

        let loss = match state.evaluate(descendible, &probe, iter, observer)? {
            Eval::Loss(loss) if !loss.is_nan() => loss,
            Eval::Loss(_) | Eval::AssumeWorse => continue,
            Eval::StopEarly => return Ok(Scan::StopEarly),
        };

        if steepest.as_ref().is_none_or(|s| loss < s.loss) {
            steepest = Some(Point::new(probe, loss));
        }
    }

    Ok(steepest.map_or(Scan::Exhausted, |point| Scan::Steepest(point.input)))
}
