//! Common wire types shared by every entity endpoint

pub mod entity_id;
pub mod envelope;
pub mod pagination;
pub mod serde_helpers;

// Re-exports
pub use entity_id::EntityId;
pub use envelope::ApiEnvelope;
pub use pagination::{FilterFacets, ListPage, Pagination};
