//! Joins events, open calls, and viewer annotations into listing views.
//!
//! Pure function of its inputs and the single `now` instant. Missing
//! relations degrade to defaults; one bad record never fails the batch.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::common::{EventId, OpenCallId, ViewerId};
use crate::dates::DateValue;
use crate::models::annotations::{Application, ApplicationStatus, ListAction};
use crate::models::event::Event;
use crate::models::open_call::OpenCall;
use crate::models::view::EnrichedView;
use crate::status::{resolve_status, OpenCallStatus};

/// Fan each event out into one view per published open call, or a single
/// call-less view when it has none.
///
/// Annotations are looked up per viewer; with no viewer every view carries
/// the defaults (not bookmarked, not hidden, no application).
pub fn enrich(
    events: &[Event],
    open_calls: &[OpenCall],
    list_actions: &[ListAction],
    applications: &[Application],
    viewer_id: Option<ViewerId>,
    now: DateTime<Utc>,
) -> Vec<EnrichedView> {
    // Index published calls by owning event.
    let mut calls_by_event: HashMap<EventId, Vec<&OpenCall>> = HashMap::new();
    for call in open_calls.iter().filter(|c| c.is_published()) {
        calls_by_event.entry(call.event_id).or_default().push(call);
    }

    // Index the viewer's annotations.
    let actions_by_event: HashMap<EventId, &ListAction> = match viewer_id {
        Some(viewer) => list_actions
            .iter()
            .filter(|a| a.viewer_id == viewer)
            .map(|a| (a.event_id, a))
            .collect(),
        None => HashMap::new(),
    };
    let applications_by_call: HashMap<OpenCallId, &Application> = match viewer_id {
        Some(viewer) => applications
            .iter()
            .filter(|a| a.viewer_id == viewer)
            .map(|a| (a.open_call_id, a))
            .collect(),
        None => HashMap::new(),
    };

    let mut views = Vec::with_capacity(events.len());
    for event in events {
        let (bookmarked, hidden) = actions_by_event
            .get(&event.id)
            .map(|a| (a.bookmarked, a.hidden))
            .unwrap_or((false, false));

        match calls_by_event.get(&event.id) {
            Some(calls) => {
                for &call in calls.iter() {
                    let application_status = applications_by_call
                        .get(&call.id)
                        .and_then(|a| a.effective_status());
                    views.push(build_view(
                        event,
                        Some(call),
                        bookmarked,
                        hidden,
                        application_status,
                        now,
                    ));
                }
            }
            None => {
                views.push(build_view(event, None, bookmarked, hidden, None, now));
            }
        }
    }
    views
}

fn build_view(
    event: &Event,
    open_call: Option<&OpenCall>,
    bookmarked: bool,
    hidden: bool,
    application_status: Option<ApplicationStatus>,
    now: DateTime<Utc>,
) -> EnrichedView {
    let event_start = DateValue::classify(event.first_start_raw());
    if event_start.is_invalid() {
        trace!(event = %event.slug, "event start date present but unparseable");
    }

    let (oc_start, oc_end, open_call_status) = match open_call {
        Some(call) => {
            let oc_start = DateValue::classify(call.basic_info.dates.oc_start.as_deref());
            let oc_end = DateValue::classify(call.basic_info.dates.oc_end.as_deref());
            let status = resolve_status(call.call_type(), &oc_start, &oc_end, now);
            (oc_start, oc_end, status)
        }
        None => (DateValue::Missing, DateValue::Missing, None),
    };

    EnrichedView {
        event_id: event.id,
        name: event.name.clone(),
        slug: event.slug.clone(),
        category: event.category,
        event_types: event.event_types.clone(),
        location: event.location.clone(),
        dates: event.dates.clone(),
        event_start,
        open_call: open_call.cloned(),
        oc_start,
        oc_end,
        open_call_status,
        has_active_open_call: open_call_status == Some(OpenCallStatus::Active),
        bookmarked,
        hidden,
        application_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventCategory, EventDates, EventFormat, LifecycleState};
    use crate::models::open_call::{CallType, OpenCallBasicInfo, OpenCallDates};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn event(slug: &str) -> Event {
        Event::builder()
            .name(slug.to_uppercase())
            .slug(slug)
            .category(EventCategory::Event)
            .dates(
                EventDates::builder()
                    .event_format(EventFormat::SetDates)
                    .build(),
            )
            .build()
    }

    fn fixed_call(event_id: EventId, start: &str, end: &str) -> OpenCall {
        OpenCall::builder()
            .event_id(event_id)
            .basic_info(OpenCallBasicInfo {
                call_type: CallType::Fixed,
                dates: OpenCallDates {
                    oc_start: Some(start.into()),
                    oc_end: Some(end.into()),
                },
            })
            .build()
    }

    #[test]
    fn event_without_calls_yields_one_null_view() {
        let e = event("solo");
        let views = enrich(&[e], &[], &[], &[], None, now());
        assert_eq!(views.len(), 1);
        assert!(views[0].open_call.is_none());
        assert_eq!(views[0].open_call_status, None);
        assert!(!views[0].has_active_open_call);
    }

    #[test]
    fn event_with_two_published_calls_fans_out() {
        let e = event("duo");
        let a = fixed_call(e.id, "2025-06-01", "2025-06-30");
        let b = fixed_call(e.id, "2025-07-01", "2025-07-31");
        let views = enrich(&[e.clone()], &[a, b], &[], &[], None, now());
        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|v| v.event_id == e.id && v.slug == "duo"));
        let ids: Vec<_> = views.iter().map(|v| v.open_call_id()).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn unpublished_calls_are_treated_as_absent() {
        let e = event("drafted");
        let mut call = fixed_call(e.id, "2025-06-01", "2025-06-30");
        call.state = LifecycleState::Draft;
        let views = enrich(&[e], &[call], &[], &[], None, now());
        assert_eq!(views.len(), 1);
        assert!(views[0].open_call.is_none());
    }

    #[test]
    fn active_status_drives_has_active_open_call() {
        let e = event("live");
        let call = fixed_call(e.id, "2025-06-01", "2025-06-30");
        let views = enrich(&[e], &[call], &[], &[], None, now());
        assert_eq!(views[0].open_call_status, Some(OpenCallStatus::Active));
        assert!(views[0].has_active_open_call);
    }

    #[test]
    fn viewer_annotations_join_by_event_and_call() {
        let e = event("noted");
        let call = fixed_call(e.id, "2025-06-01", "2025-06-30");
        let viewer = ViewerId::new();
        let action = ListAction {
            viewer_id: viewer,
            event_id: e.id,
            bookmarked: true,
            hidden: false,
        };
        let app = Application {
            viewer_id: viewer,
            open_call_id: call.id,
            application_status: None,
            manual_applied: true,
        };
        let views = enrich(&[e], &[call], &[action], &[app], Some(viewer), now());
        assert!(views[0].bookmarked);
        assert!(!views[0].hidden);
        assert_eq!(views[0].application_status, Some(ApplicationStatus::Applied));
    }

    #[test]
    fn other_viewers_annotations_do_not_leak() {
        let e = event("private");
        let stranger = ViewerId::new();
        let action = ListAction {
            viewer_id: stranger,
            event_id: e.id,
            bookmarked: true,
            hidden: true,
        };
        let views = enrich(&[e], &[], &[action], &[], Some(ViewerId::new()), now());
        assert!(!views[0].bookmarked);
        assert!(!views[0].hidden);
    }
}
