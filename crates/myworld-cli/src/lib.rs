//! MyWorld driver.
//!
//! Builds a forest world and a desert world, each from its own factory, and
//! runs the food chain once in each.

pub mod error;

use myworld_core::sink::OutputSink;
use myworld_ecosystem::{DesertWorldFactory, ForestWorldFactory, MyWorld, WorldFactory};

use crate::error::AppError;

/// Runs the forest food chain, then the desert food chain, writing one line
/// per world to `sink`.
///
/// # Errors
///
/// Returns `AppError::FoodChain` for the first world whose food chain fails.
/// Later worlds are not run.
pub fn run(sink: &mut dyn OutputSink) -> Result<(), AppError> {
    run_world(&ForestWorldFactory, sink)?;
    run_world(&DesertWorldFactory, sink)?;
    Ok(())
}

fn run_world(factory: &dyn WorldFactory, sink: &mut dyn OutputSink) -> Result<(), AppError> {
    let habitat = factory.habitat();
    let world = MyWorld::new(factory);

    let meal = world
        .run_food_chain(sink)
        .map_err(|source| AppError::FoodChain { habitat, source })?;

    tracing::info!(%habitat, meal = %meal, "food chain complete");
    Ok(())
}
