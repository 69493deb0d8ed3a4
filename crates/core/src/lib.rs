//! Core traits and types for linear descent.
//!
//! This crate defines what a type has to provide to be optimized, and the
//! observer seam solvers report through:
//!
//! - [`Descendible`] — loss, probe directions, addition, and clamping for an
//!   input type
//! - [`DirectionProvider`] — standard neighbourhoods for `f32` and `[f32; N]`
//! - [`LossFn`], [`TryLossFn`], [`PartialClamp`] — contracts composed from a
//!   loss closure and a direction provider
//! - [`Observer`] — receives solver events and optionally returns control actions

mod adapters;
mod descendible;
pub mod direction;
mod observer;

pub use adapters::{LossFn, PartialClamp, TryLossFn};
pub use descendible::Descendible;
pub use direction::DirectionProvider;
pub use observer::Observer;
