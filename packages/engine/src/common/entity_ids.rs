//! Typed ID aliases for the domain entities this engine joins.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Event entities (festivals, projects, residencies, ...).
pub struct Event;

/// Marker type for OpenCall entities (submission windows).
pub struct OpenCall;

/// Marker type for the viewing user.
pub struct Viewer;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for OpenCall entities.
pub type OpenCallId = Id<OpenCall>;

/// Typed ID for the viewing user.
pub type ViewerId = Id<Viewer>;
