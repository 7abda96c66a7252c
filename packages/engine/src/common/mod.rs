//! Shared building blocks: typed ids and pagination.

pub mod entity_ids;
pub mod id;
pub mod pagination;

pub use entity_ids::{EventId, OpenCallId, ViewerId};
pub use id::Id;
pub use pagination::{paginate, Page};
