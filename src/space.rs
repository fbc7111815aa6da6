//! The periodic lattice, its access trait and its initial conditions.

pub mod initial;
pub mod lattice;
pub mod space_trait;
