//! Domain model for the Ecosystem context.

pub mod aggregates;
pub mod events;
pub mod factory;
pub mod habitat;
pub mod products;
