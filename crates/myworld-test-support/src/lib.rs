//! Shared test doubles for the MyWorld food chain.

mod sink;

pub use sink::{FailingSink, RecordingSink};
