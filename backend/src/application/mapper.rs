//! Bidirectional DTO/entity conversion consumed by handlers.

/// Pure, side-effect-free transform between an entity and its wire shapes.
pub trait Mapper<E>: Send + Sync {
    /// Inbound request shape.
    type Request;
    /// Outbound response shape.
    type Response;

    /// Build a domain entity from a request.
    fn to_entity(&self, request: Self::Request) -> E;

    /// Project an entity onto its response shape.
    fn to_dto(&self, entity: &E) -> Self::Response;
}
