//! MyWorld Core — shared abstractions.
//!
//! This crate defines the error type, the event trait and the output seam
//! that the ecosystem context and the driver depend on. It contains no
//! domain types.

pub mod error;
pub mod event;
pub mod sink;
