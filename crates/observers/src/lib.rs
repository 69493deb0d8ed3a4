//! Reusable observers for linear descent.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasLoss`], [`CanStopEarly`], [`CanAssumeWorse`])
//! - [`LossHistory`] — records the loss of every evaluated step
//!
//! [`Observer`]: descent_core::Observer
//! [`HasLoss`]: traits::HasLoss
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

mod history;
pub mod traits;

pub use history::LossHistory;
