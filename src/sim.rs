//! Run drivers and snapshot sinks.

pub mod experiment;
pub mod sink;
