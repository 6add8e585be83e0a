//! The habitat tag shared by a factory and every product it creates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A world whose products are mutually compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Habitat {
    /// Woodland world.
    Forest,
    /// Arid world.
    Desert,
}

impl Habitat {
    /// Every supported habitat, in declaration order.
    pub const ALL: [Habitat; 2] = [Habitat::Forest, Habitat::Desert];

    /// Returns the display name of the habitat.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forest => "Forest",
            Self::Desert => "Desert",
        }
    }

    /// Returns the label carried by herbivores of this habitat.
    #[must_use]
    pub const fn herbivore_label(self) -> &'static str {
        match self {
            Self::Forest => "ForestHerbivore",
            Self::Desert => "DesertHerbivore",
        }
    }

    /// Returns the label carried by carnivores of this habitat.
    #[must_use]
    pub const fn carnivore_label(self) -> &'static str {
        match self {
            Self::Forest => "ForestCarnivore",
            Self::Desert => "DesertCarnivore",
        }
    }
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
