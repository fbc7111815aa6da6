//! Per-generation observables and the series that hold them.

pub mod series;
pub mod tracker;
