//! Domain events for the Ecosystem context.

use std::fmt;

use myworld_core::event::DomainEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::habitat::Habitat;

/// Emitted when a carnivore eats a herbivore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEaten {
    /// The habitat the carnivore belongs to.
    pub habitat: Habitat,
    /// The carnivore that ate.
    pub carnivore_id: Uuid,
    /// Label of the carnivore, e.g. `ForestCarnivore`.
    pub carnivore: String,
    /// The herbivore that was eaten.
    pub herbivore_id: Uuid,
    /// Label of the herbivore, e.g. `ForestHerbivore`.
    pub herbivore: String,
}

impl fmt::Display for MealEaten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} eats {}", self.carnivore, self.herbivore)
    }
}

impl DomainEvent for MealEaten {
    fn event_type(&self) -> &'static str {
        "ecosystem.meal_eaten"
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(self).expect("MealEaten serialization is infallible")
    }
}
