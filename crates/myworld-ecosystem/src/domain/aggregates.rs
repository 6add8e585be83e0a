//! Aggregate roots for the Ecosystem context.

use myworld_core::error::DomainError;
use myworld_core::sink::OutputSink;

use super::events::MealEaten;
use super::factory::WorldFactory;
use super::habitat::Habitat;
use super::products::{Carnivore, Herbivore};

/// A world holding one herbivore and one carnivore from the same factory.
#[derive(Debug)]
pub struct MyWorld {
    herbivore: Herbivore,
    carnivore: Carnivore,
}

impl MyWorld {
    /// Creates a world, asking `factory` for a herbivore and then a carnivore.
    #[must_use]
    pub fn new(factory: &dyn WorldFactory) -> Self {
        let herbivore = factory.create_herbivore();
        let carnivore = factory.create_carnivore();
        debug_assert_eq!(herbivore.habitat(), carnivore.habitat());

        tracing::debug!(habitat = %factory.habitat(), "world created");
        Self {
            herbivore,
            carnivore,
        }
    }

    /// Habitat shared by both products.
    #[must_use]
    pub fn habitat(&self) -> Habitat {
        self.carnivore.habitat()
    }

    /// The herbivore owned by this world.
    #[must_use]
    pub fn herbivore(&self) -> &Herbivore {
        &self.herbivore
    }

    /// The carnivore owned by this world.
    #[must_use]
    pub fn carnivore(&self) -> &Carnivore {
        &self.carnivore
    }

    /// Lets the carnivore eat the herbivore, writing one line to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the line cannot be written.
    pub fn run_food_chain(&self, sink: &mut dyn OutputSink) -> Result<MealEaten, DomainError> {
        self.carnivore.eat(Some(&self.herbivore), sink)
    }
}

#[cfg(test)]
mod tests {
    use myworld_test_support::{FailingSink, RecordingSink};

    use super::*;
    use crate::domain::factory::{DesertWorldFactory, ForestWorldFactory, factory_for};

    #[test]
    fn test_forest_world_runs_forest_food_chain() {
        // Arrange
        let world = MyWorld::new(&ForestWorldFactory);
        let mut sink = RecordingSink::new();

        // Act
        let meal = world.run_food_chain(&mut sink).unwrap();

        // Assert
        assert_eq!(sink.lines(), ["ForestCarnivore eats ForestHerbivore"]);
        assert_eq!(meal.carnivore_id, world.carnivore().id());
        assert_eq!(meal.herbivore_id, world.herbivore().id());
    }

    #[test]
    fn test_desert_world_runs_desert_food_chain() {
        let world = MyWorld::new(&DesertWorldFactory);
        let mut sink = RecordingSink::new();

        world.run_food_chain(&mut sink).unwrap();

        assert_eq!(sink.lines(), ["DesertCarnivore eats DesertHerbivore"]);
    }

    #[test]
    fn test_every_habitat_pairs_products_of_the_same_habitat() {
        for habitat in Habitat::ALL {
            let world = MyWorld::new(factory_for(habitat).as_ref());

            assert_eq!(world.habitat(), habitat);
            assert_eq!(world.herbivore().habitat(), habitat);
            assert_eq!(world.carnivore().habitat(), habitat);
        }
    }

    #[test]
    fn test_worlds_from_one_factory_share_no_products() {
        // Arrange
        let factory = ForestWorldFactory;

        // Act
        let first = MyWorld::new(&factory);
        let second = MyWorld::new(&factory);

        // Assert
        assert_ne!(first.herbivore().id(), second.herbivore().id());
        assert_ne!(first.carnivore().id(), second.carnivore().id());
    }

    #[test]
    fn test_run_food_chain_can_repeat_with_same_pair() {
        let world = MyWorld::new(&DesertWorldFactory);
        let mut sink = RecordingSink::new();

        let first = world.run_food_chain(&mut sink).unwrap();
        let second = world.run_food_chain(&mut sink).unwrap();

        assert_eq!(first, second);
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_run_food_chain_surfaces_sink_failure() {
        let world = MyWorld::new(&ForestWorldFactory);
        let mut sink = FailingSink::new();

        let result = world.run_food_chain(&mut sink);

        match result {
            Err(DomainError::Output(msg)) => assert_eq!(msg, "stdout closed"),
            other => panic!("expected Output error, got {other:?}"),
        }
    }
}
