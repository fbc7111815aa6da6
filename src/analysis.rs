//! Estimators that turn observable series into summary statistics.

pub mod equilibrium;
pub mod stats;
pub mod velocity;
