//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused.
//!
//! # Event traits
//!
//! - [`HasLoss`] — events that may carry an evaluated loss
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can mark a point as worse than the best
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasLoss};
//!
//! /// Stops as soon as a step reaches the target loss.
//! struct GoodEnough {
//!     target: f32,
//! }
//!
//! impl<E: HasLoss, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         match event.loss() {
//!             Some(loss) if loss <= self.target => Some(A::stop_early()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use descent_core::Descendible;

use descent_solvers::optimization::linear_descent;

/// An event that may carry an evaluated loss.
pub trait HasLoss {
    /// Returns the iteration the event belongs to.
    fn iter(&self) -> usize;

    /// Returns the loss for this event, or `None` when evaluation failed.
    fn loss(&self) -> Option<f32>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can mark the evaluated point as worse than the best.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse.
    fn assume_worse() -> Self;
}

impl<D> HasLoss for linear_descent::Event<'_, D>
where
    D: Descendible,
{
    fn iter(&self) -> usize {
        linear_descent::Event::iter(self)
    }

    fn loss(&self) -> Option<f32> {
        linear_descent::Event::loss(self)
    }
}

impl CanStopEarly for linear_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for linear_descent::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
