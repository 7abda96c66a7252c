//! # artlist-engine
//!
//! Temporal status and ranking engine for a street-art events directory.
//!
//! Given a batch of event and open-call records with partially-trustworthy
//! date data, the engine:
//!
//! - classifies each open call's lifecycle state relative to a single
//!   injected "now" ([`status`]),
//! - joins that state onto the owning event with per-viewer annotations
//!   (bookmarked / hidden / applied) ([`enrich::enrich`]),
//! - filters the resulting views ([`filter::filter`]),
//! - produces a deterministic total order ([`rank`]), and
//! - slices the sorted list into a page ([`common::pagination`]).
//!
//! ## Key invariants
//!
//! 1. **One clock reading per invocation** - all statuses and comparisons in
//!    one response agree on "now" ([`clock::ClockSource`]).
//! 2. **Bad data never throws** - malformed or missing dates classify into
//!    [`dates::DateValue`] and land in defined ranking buckets; a single bad
//!    record cannot fail a listing page.
//! 3. **One comparator everywhere** - every surface that sorts views imports
//!    [`rank::Ranking`]; there is no second copy of the ordering rules.
//! 4. **Pure and stateless** - no IO, no locks, no caches; trivially safe to
//!    run concurrently across requests.
//!
//! ## Example
//!
//! ```rust
//! use artlist_engine::{list, ListingBatch, ListingRequest, SystemClock};
//!
//! let batch = ListingBatch::default(); // normally filled by the query layer
//! let page = list(&batch, &ListingRequest::default(), &SystemClock).unwrap();
//! assert_eq!(page.total, 0);
//! ```

pub mod clock;
pub mod common;
pub mod dates;
pub mod engine;
pub mod enrich;
pub mod filter;
pub mod models;
pub mod rank;
pub mod status;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use common::{EventId, OpenCallId, Page, ViewerId};
pub use dates::DateValue;
pub use engine::{list, EngineError, ListingBatch, ListingRequest};
pub use enrich::enrich;
pub use filter::{filter, FilterCriteria};
pub use models::{
    Application, ApplicationStatus, CallType, EnrichedView, Event, EventCategory, EventDates,
    EventFormat, EventType, EventWindow, LifecycleState, ListAction, Location, OpenCall,
    OpenCallBasicInfo, OpenCallDates,
};
pub use rank::{Ranking, SortBy, SortDirection, SortOptions};
pub use status::{resolve_status, OpenCallStatus};
