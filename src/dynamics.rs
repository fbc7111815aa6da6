//! Generation update rule.

pub mod update;
