//! Solvers for optimization problems — minimizing a loss.
//!
//! A [`Descendible`] contract supplies the loss together with the operations
//! needed to move around the input space. Solvers in this module search for
//! the input that minimizes that loss.
//!
//! # Solvers
//!
//! - [`linear_descent`] — steepest-neighbour search with a fixed step, for
//!   low-dimensional inputs and black-box losses
//!
//! [`Descendible`]: descent_core::Descendible

pub mod linear_descent;
