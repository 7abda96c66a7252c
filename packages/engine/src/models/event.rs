//! Event records as handed to the engine by the persistence layer.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::EventId;

/// What kind of entry this is in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Event,
    Project,
    Residency,
    GrantFund,
    Roster,
}

/// Sub-type tags an event may carry (at most two).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    GraffitiJam,
    MuralFest,
    StreetArtFest,
    PasteUp,
    Other,
}

/// How the event's dates are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventFormat {
    SetDates,
    Monthly,
    Yearly,
    /// No fixed window; the event runs continuously.
    Ongoing,
    NoEvent,
}

/// Editorial lifecycle of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleState {
    Draft,
    Submitted,
    Published,
    Archived,
}

/// One start/end window, raw strings straight from the store.
///
/// Either side may be absent or malformed; classification happens once at
/// enrichment, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// The dates block of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct EventDates {
    #[builder(default = 1)]
    pub edition: i32,
    /// Ordered sequence of windows; the first one drives ranking.
    #[builder(default)]
    pub event_dates: Vec<EventWindow>,
    pub event_format: EventFormat,
}

/// Where the event takes place. Either field may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: Option<String>,
    pub continent: Option<String>,
}

/// A directory entry: festival, project, residency, grant, or roster.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
pub struct Event {
    #[builder(default = EventId::new())]
    pub id: EventId,
    pub name: String,
    pub slug: String,
    pub category: EventCategory,
    /// Zero to two sub-type tags.
    #[builder(default)]
    pub event_types: Vec<EventType>,
    #[builder(default)]
    pub location: Location,
    pub dates: EventDates,
    #[builder(default = LifecycleState::Published)]
    pub state: LifecycleState,
}

impl Event {
    /// Raw start string of the first date window, if any window exists.
    pub fn first_start_raw(&self) -> Option<&str> {
        self.dates
            .event_dates
            .first()
            .and_then(|w| w.start.as_deref())
    }

    /// Whether any date window is recorded at all.
    pub fn has_date_window(&self) -> bool {
        !self.dates.event_dates.is_empty()
    }
}
