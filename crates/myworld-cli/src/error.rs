//! MyWorld driver error types.

use myworld_core::error::DomainError;
use myworld_ecosystem::Habitat;
use thiserror::Error;

/// Errors surfaced by the driver.
#[derive(Debug, Error)]
pub enum AppError {
    /// Running the food chain of one world failed.
    #[error("food chain failed in {habitat} world: {source}")]
    FoodChain {
        /// The world that was running.
        habitat: Habitat,
        /// The underlying domain error.
        source: DomainError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_chain_error_names_the_world() {
        let err = AppError::FoodChain {
            habitat: Habitat::Desert,
            source: DomainError::Output("stdout closed".into()),
        };

        assert_eq!(
            err.to_string(),
            "food chain failed in Desert world: output error: stdout closed"
        );
    }

    #[test]
    fn test_food_chain_error_exposes_source() {
        let err = AppError::FoodChain {
            habitat: Habitat::Forest,
            source: DomainError::InvalidArgument("missing herbivore".into()),
        };

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("invalid argument: missing herbivore"));
    }
}
