//! Deterministic ranking of listing views.
//!
//! Every sortable surface (public listing, dashboard, recap generation) uses
//! this one comparator. Views are first assigned to an integer priority
//! bucket (lower sorts earlier), then ordered within the bucket by a
//! secondary key, then by ids so the order never depends on input order.
//!
//! Bucket order is never direction-scaled; `direction` only flips the
//! within-bucket magnitude comparison (and the whole order for name mode).

use std::cmp::{Ordering, Reverse};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::EventFormat;
use crate::models::open_call::CallType;
use crate::models::view::EnrichedView;
use crate::status::OpenCallStatus;

/// Which key drives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// By the event's first date-window start.
    EventStart,
    /// By open-call urgency (active calls first, soonest-ending first).
    OpenCall,
    /// Case-insensitive by event name.
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Sort mode plus direction, as supplied by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOptions {
    pub sort_by: SortBy,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            sort_by: SortBy::EventStart,
            direction: SortDirection::Desc,
        }
    }
}

/// A comparator bound to one sort mode and one "now" instant.
///
/// Binding `now` at construction keeps every comparison within one sort
/// mutually consistent; the clock is never re-read mid-sort.
#[derive(Debug, Clone, Copy)]
pub struct Ranking {
    sort_by: SortBy,
    direction: SortDirection,
    now: DateTime<Utc>,
}

impl Ranking {
    pub fn new(options: SortOptions, now: DateTime<Utc>) -> Self {
        Ranking {
            sort_by: options.sort_by,
            direction: options.direction,
            now,
        }
    }

    /// Total-order comparison of two views.
    ///
    /// Ties after the mode's own keys break on `(event_id, open_call_id)`,
    /// so the result is deterministic for any input permutation.
    pub fn compare(&self, a: &EnrichedView, b: &EnrichedView) -> Ordering {
        let primary = match self.sort_by {
            SortBy::EventStart => self.compare_event_start(a, b),
            SortBy::OpenCall => self.compare_open_call(a, b),
            SortBy::Name => self
                .direction
                .apply(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        };
        primary
            .then_with(|| a.event_id.cmp(&b.event_id))
            .then_with(|| a.open_call_id().cmp(&b.open_call_id()))
    }

    /// Sort a batch in place.
    pub fn sort(&self, views: &mut [EnrichedView]) {
        views.sort_by(|a, b| self.compare(a, b));
    }

    // ------------------------------------------------------------------
    // Event-start mode
    // ------------------------------------------------------------------

    /// Priority bucket for event-start mode:
    /// 0 start known, today or later; 1 start present but unparseable;
    /// 2 start missing on an ongoing event; 3 start known and past, or
    /// missing on a non-ongoing event; 5 no date window recorded at all.
    /// (4 is reserved for call-only rows, which this mode never produces.)
    fn event_start_bucket(&self, view: &EnrichedView) -> u8 {
        if view.dates.event_dates.is_empty() {
            return 5;
        }
        match view.event_start.known() {
            Some(start) => {
                if start.date_naive() >= self.now.date_naive() {
                    0
                } else {
                    3
                }
            }
            None if view.event_start.is_invalid() => 1,
            None => {
                if view.dates.event_format == EventFormat::Ongoing {
                    2
                } else {
                    3
                }
            }
        }
    }

    fn compare_event_start(&self, a: &EnrichedView, b: &EnrichedView) -> Ordering {
        let (bucket_a, bucket_b) = (self.event_start_bucket(a), self.event_start_bucket(b));
        if bucket_a != bucket_b {
            return bucket_a.cmp(&bucket_b);
        }
        if bucket_a == 3 {
            // Past bucket: most recent year first, then calendar order within
            // the year. Direction does not flip this presentation.
            return past_start_key(a).cmp(&past_start_key(b));
        }
        let ts_a = a.event_start.timestamp_millis_or(i64::MAX);
        let ts_b = b.event_start.timestamp_millis_or(i64::MAX);
        self.direction.apply(ts_a.cmp(&ts_b))
    }

    // ------------------------------------------------------------------
    // Open-call mode
    // ------------------------------------------------------------------

    /// Priority bucket for open-call mode:
    /// 0 active fixed; 1 active rolling; 2 active email; 3 active call of
    /// unrecognized type; 4 coming soon; 5 a published call that is not
    /// currently active (ended or undeterminable); 6 no call at all.
    fn open_call_bucket(&self, view: &EnrichedView) -> u8 {
        let Some(call) = view.open_call.as_ref() else {
            return 6;
        };
        match view.open_call_status {
            Some(OpenCallStatus::Active) => match call.call_type() {
                CallType::Fixed => 0,
                CallType::Rolling => 1,
                CallType::Email => 2,
                CallType::Unknown => 3,
            },
            Some(OpenCallStatus::ComingSoon) => 4,
            Some(OpenCallStatus::Ended) | None => 5,
        }
    }

    fn compare_open_call(&self, a: &EnrichedView, b: &EnrichedView) -> Ordering {
        let (bucket_a, bucket_b) = (self.open_call_bucket(a), self.open_call_bucket(b));
        if bucket_a != bucket_b {
            return bucket_a.cmp(&bucket_b);
        }
        // Within every bucket the key is the call's end date, with epoch
        // standing in for absent ends.
        let ts_a = a.oc_end.timestamp_millis_or(0);
        let ts_b = b.oc_end.timestamp_millis_or(0);
        self.direction.apply(ts_a.cmp(&ts_b))
    }
}

/// Key for views whose event start lies in the past: descending year, then
/// ascending month and day. Entries without a usable date key as epoch.
fn past_start_key(view: &EnrichedView) -> (Reverse<i32>, u32, u32) {
    match view.event_start.known() {
        Some(start) => (Reverse(start.year()), start.month(), start.day()),
        None => (Reverse(1970), 1, 1),
    }
}
