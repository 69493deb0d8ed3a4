//! Solvers for the linear descent framework.
//!
//! - [`optimization::linear_descent`] — derivative-free local search over any
//!   [`Descendible`] input type
//!
//! [`Descendible`]: descent_core::Descendible

pub mod optimization;
