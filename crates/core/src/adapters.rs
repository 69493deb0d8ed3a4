//! Ready-made [`Descendible`] contracts built by composition.
//!
//! - [`LossFn`] — infallible loss closure over a [`DirectionProvider`] type
//! - [`TryLossFn`] — fallible loss closure over a [`DirectionProvider`] type
//! - [`PartialClamp`] — wraps another contract and clamps only masked axes
//!
//! [`Descendible`]: crate::Descendible
//! [`DirectionProvider`]: crate::DirectionProvider

mod loss_fn;
mod partial_clamp;

pub use loss_fn::{LossFn, TryLossFn};
pub use partial_clamp::PartialClamp;
