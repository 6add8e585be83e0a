//! Domain event abstractions.

/// Trait that all domain events implement.
///
/// The `Display` form is the human-readable line written to an output sink.
pub trait DomainEvent: std::fmt::Debug + std::fmt::Display {
    /// Returns the event type name (used for log routing).
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;
}
