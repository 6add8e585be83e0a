//! World factories: one per habitat, each producing a matched product pair.

use std::fmt;

use super::habitat::Habitat;
use super::products::{Carnivore, Herbivore};

mod sealed {
    pub trait Sealed {}
}

/// Creates the products of a single habitat.
///
/// This trait is sealed. New worlds are added as new `Habitat` variants with
/// a matching factory in this module, which keeps every product pair within
/// one habitat.
pub trait WorldFactory: sealed::Sealed + fmt::Debug {
    /// The habitat shared by every product this factory creates.
    fn habitat(&self) -> Habitat;

    /// Creates a fresh herbivore of this factory's habitat.
    fn create_herbivore(&self) -> Herbivore;

    /// Creates a fresh carnivore of this factory's habitat.
    fn create_carnivore(&self) -> Carnivore;
}

/// Factory for the forest world.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForestWorldFactory;

impl sealed::Sealed for ForestWorldFactory {}

impl WorldFactory for ForestWorldFactory {
    fn habitat(&self) -> Habitat {
        Habitat::Forest
    }

    fn create_herbivore(&self) -> Herbivore {
        tracing::debug!(habitat = %Habitat::Forest, "creating herbivore");
        Herbivore::new(Habitat::Forest)
    }

    fn create_carnivore(&self) -> Carnivore {
        tracing::debug!(habitat = %Habitat::Forest, "creating carnivore");
        Carnivore::new(Habitat::Forest)
    }
}

/// Factory for the desert world.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesertWorldFactory;

impl sealed::Sealed for DesertWorldFactory {}

impl WorldFactory for DesertWorldFactory {
    fn habitat(&self) -> Habitat {
        Habitat::Desert
    }

    fn create_herbivore(&self) -> Herbivore {
        tracing::debug!(habitat = %Habitat::Desert, "creating herbivore");
        Herbivore::new(Habitat::Desert)
    }

    fn create_carnivore(&self) -> Carnivore {
        tracing::debug!(habitat = %Habitat::Desert, "creating carnivore");
        Carnivore::new(Habitat::Desert)
    }
}

/// Returns the factory for `habitat`.
#[must_use]
pub fn factory_for(habitat: Habitat) -> Box<dyn WorldFactory> {
    match habitat {
        Habitat::Forest => Box::new(ForestWorldFactory),
        Habitat::Desert => Box::new(DesertWorldFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_for_selects_matching_habitat() {
        for habitat in Habitat::ALL {
            assert_eq!(factory_for(habitat).habitat(), habitat);
        }
    }

    #[test]
    fn test_factories_only_create_their_own_habitat() {
        for habitat in Habitat::ALL {
            // Arrange
            let factory = factory_for(habitat);

            // Act
            let herbivore = factory.create_herbivore();
            let carnivore = factory.create_carnivore();

            // Assert
            assert_eq!(herbivore.habitat(), habitat);
            assert_eq!(carnivore.habitat(), habitat);
            assert_eq!(herbivore.label(), habitat.herbivore_label());
            assert_eq!(carnivore.label(), habitat.carnivore_label());
        }
    }

    #[test]
    fn test_repeated_creation_yields_fresh_instances() {
        let factory = ForestWorldFactory;

        let first = factory.create_carnivore();
        let second = factory.create_carnivore();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.habitat(), second.habitat());
    }
}
