//! Products created by a world factory.
//!
//! Constructors are crate-private: the only way to obtain a product is
//! through a `WorldFactory`, which keeps every pair within one habitat.

use myworld_core::error::DomainError;
use myworld_core::event::DomainEvent;
use myworld_core::sink::OutputSink;
use uuid::Uuid;

use super::events::MealEaten;
use super::habitat::Habitat;

/// A plant eater. Has identity and a habitat, nothing else.
#[derive(Debug)]
pub struct Herbivore {
    id: Uuid,
    habitat: Habitat,
    label: &'static str,
}

impl Herbivore {
    pub(crate) fn new(habitat: Habitat) -> Self {
        Self {
            id: Uuid::new_v4(),
            habitat,
            label: habitat.herbivore_label(),
        }
    }

    /// Instance identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Habitat this herbivore belongs to.
    #[must_use]
    pub fn habitat(&self) -> Habitat {
        self.habitat
    }

    /// Label used in output, e.g. `ForestHerbivore`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// A meat eater.
#[derive(Debug)]
pub struct Carnivore {
    id: Uuid,
    habitat: Habitat,
    label: &'static str,
}

impl Carnivore {
    pub(crate) fn new(habitat: Habitat) -> Self {
        Self {
            id: Uuid::new_v4(),
            habitat,
            label: habitat.carnivore_label(),
        }
    }

    /// Instance identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Habitat this carnivore belongs to.
    #[must_use]
    pub fn habitat(&self) -> Habitat {
        self.habitat
    }

    /// Label used in output, e.g. `ForestCarnivore`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Eats `herbivore`, writing `"<carnivore> eats <herbivore>"` to `sink`.
    ///
    /// The herbivore's habitat is not checked here; `MyWorld` guarantees the
    /// pairing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `herbivore` is `None`, in
    /// which case nothing is written. Returns the sink's error if the line
    /// cannot be written.
    pub fn eat(
        &self,
        herbivore: Option<&Herbivore>,
        sink: &mut dyn OutputSink,
    ) -> Result<MealEaten, DomainError> {
        let Some(herbivore) = herbivore else {
            tracing::warn!(carnivore = self.label, "eat called without a herbivore");
            return Err(DomainError::InvalidArgument("missing herbivore".to_owned()));
        };

        let meal = MealEaten {
            habitat: self.habitat,
            carnivore_id: self.id,
            carnivore: self.label.to_owned(),
            herbivore_id: herbivore.id,
            herbivore: herbivore.label.to_owned(),
        };

        sink.write_line(&meal.to_string())?;
        tracing::debug!(
            event_type = meal.event_type(),
            payload = %meal.to_payload(),
            "meal eaten"
        );

        Ok(meal)
    }
}
