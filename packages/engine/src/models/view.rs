//! The computed listing view: one event joined with one open call (or none)
//! plus the viewer's annotations. Never persisted; rebuilt per request.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{EventId, OpenCallId};
use crate::dates::DateValue;
use crate::models::annotations::ApplicationStatus;
use crate::models::event::{EventCategory, EventDates, EventType, Location};
use crate::models::open_call::{CallType, OpenCall};
use crate::status::OpenCallStatus;

/// One row of a listing.
///
/// Date fields are pre-classified [`DateValue`]s so filtering and ranking
/// never touch the raw strings again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedView {
    pub event_id: EventId,
    pub name: String,
    pub slug: String,
    pub category: EventCategory,
    pub event_types: Vec<EventType>,
    pub location: Location,
    pub dates: EventDates,
    /// Classified start of the event's first date window.
    pub event_start: DateValue,
    /// The joined call, or `None` when the event has no published call.
    pub open_call: Option<OpenCall>,
    pub oc_start: DateValue,
    pub oc_end: DateValue,
    pub open_call_status: Option<OpenCallStatus>,
    pub has_active_open_call: bool,
    pub bookmarked: bool,
    pub hidden: bool,
    pub application_status: Option<ApplicationStatus>,
}

impl EnrichedView {
    pub fn open_call_id(&self) -> Option<OpenCallId> {
        self.open_call.as_ref().map(|oc| oc.id)
    }

    pub fn call_type(&self) -> Option<CallType> {
        self.open_call.as_ref().map(|oc| oc.call_type())
    }

    /// Whether this view's call is currently accepting submissions.
    pub fn is_active(&self) -> bool {
        self.has_active_open_call
    }

    /// Active with a known end date inside the given window. Used by the
    /// "closing soon" recap upstream.
    pub fn ends_soon(&self, within: Duration, now: DateTime<Utc>) -> bool {
        if !self.has_active_open_call {
            return false;
        }
        match self.oc_end.known() {
            Some(end) => end >= now && end - now <= within,
            None => false,
        }
    }
}
