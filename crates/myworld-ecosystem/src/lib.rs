//! MyWorld — Ecosystem bounded context.
//!
//! Each habitat has a factory that produces a matched herbivore and
//! carnivore. A `MyWorld` takes one factory, keeps the pair it produced,
//! and runs the food chain between them.

pub mod domain;

pub use domain::aggregates::MyWorld;
pub use domain::events::MealEaten;
pub use domain::factory::{DesertWorldFactory, ForestWorldFactory, WorldFactory, factory_for};
pub use domain::habitat::Habitat;
pub use domain::products::{Carnivore, Herbivore};
