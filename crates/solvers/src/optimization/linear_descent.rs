//! Linear descent: derivative-free local search with a fixed step.
//!
//! # Algorithm
//!
//! From the current point, the solver evaluates the loss at every neighbour
//! `current + d` for a fixed direction set, moves toward the neighbour with
//! the lowest loss, and clamps the result into the bounds. If the clamped
//! candidate is worse than the best point so far, the search stops and
//! returns that best point. Otherwise the candidate becomes the new current
//! and best point and the next iteration begins.
//!
//! The step never shrinks, so the result is only accurate to about one
//! epsilon. It is called *linear* descent because it ignores the slope: it
//! only ranks neighbours.
//!
//! # When to Use
//!
//! - The loss is a black box (a simulation, a lookup, ...) with no derivative
//! - The input has only a few components
//! - A good starting point is known
//!
//! # Limitations
//!
//! - **Local only**: the result is a minimum of whichever basin the start
//!   lies in. On a loss shaped like `-height` over two peaks, starting near the
//!   lower peak converges there and never finds the higher one.
//! - **Cost**: each iteration evaluates the loss once per direction plus once
//!   for the step. For `[f32; N]` there are `3^N - 1` directions, so this is
//!   not meant for per-frame use or high-dimensional inputs.
//!
//! # Observer Events
//!
//! - [`Event::Stepped`] — the clamped step candidate was evaluated
//! - [`Event::LossFailed`] — a probe or step candidate failed to evaluate
//!
//! Observers can return [`Action::StopEarly`] to return the best point
//! immediately, or [`Action::AssumeWorse`] to reject a step or absorb a
//! failure. Evaluating the starting point is not observed; if it fails the
//! error is returned directly.

mod action;
mod bounds;
mod config;
mod error;
mod event;
mod point;
mod scan;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use bounds::Bounds;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use descent_core::{Descendible, Observer};

use search::search;

/// Searches for a local minimum of the contract's loss, starting at `start`.
///
/// The observer receives an [`Event`] for every step candidate and every
/// failed evaluation. See the [module docs](self) for details.
///
/// # Errors
///
/// - [`Error::InvalidBounds`] if the contract rejects `bounds`
/// - [`Error::NoDirections`] if the contract yields no directions for `epsilon`
/// - [`Error::Loss`] if the loss fails and the observer does not absorb it
pub fn minimize<D, Obs>(
    descendible: &D,
    start: D::Input,
    bounds: &Bounds<D::Input>,
    epsilon: &D::Input,
    config: &Config,
    observer: Obs,
) -> Result<Solution<D::Input>, Error<D::Error>>
where
    D: Descendible,
    Obs: for<'a> Observer<Event<'a, D>, Action>,
{
    search(descendible, start, bounds, epsilon, config, observer)
}

/// Searches for a local minimum without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bounds or directions are unusable, or if the loss
/// fails.
pub fn minimize_unobserved<D>(
    descendible: &D,
    start: D::Input,
    bounds: &Bounds<D::Input>,
    epsilon: &D::Input,
    config: &Config,
) -> Result<Solution<D::Input>, Error<D::Error>>
where
    D: Descendible,
{
    minimize(descendible, start, bounds, epsilon, config, ())
}
