//! Open-call lifecycle status resolution.
//!
//! One decision table, used by every call site. The listing query, the
//! dashboard, and recap generation all see the same status for the same
//! record and instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::DateValue;
use crate::models::open_call::CallType;

/// Where an open call stands relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenCallStatus {
    ComingSoon,
    Active,
    Ended,
}

/// Derive a call's status from its type and date window.
///
/// Returns `None` when no status can be determined: a fixed call without a
/// usable end date, or an unrecognized call type. Rolling calls are active
/// indefinitely unless they carry a known end date that has passed; email
/// calls behave the same way.
pub fn resolve_status(
    call_type: CallType,
    oc_start: &DateValue,
    oc_end: &DateValue,
    now: DateTime<Utc>,
) -> Option<OpenCallStatus> {
    match call_type {
        CallType::Fixed => match (oc_start.known(), oc_end.known()) {
            (Some(start), Some(end)) => Some(if now < start {
                OpenCallStatus::ComingSoon
            } else if now > end {
                OpenCallStatus::Ended
            } else {
                OpenCallStatus::Active
            }),
            (None, Some(end)) => Some(if now > end {
                OpenCallStatus::Ended
            } else {
                OpenCallStatus::Active
            }),
            // No usable end date: cannot determine.
            (_, None) => None,
        },
        CallType::Rolling | CallType::Email => match oc_end.known() {
            Some(end) if now > end => Some(OpenCallStatus::Ended),
            _ => Some(OpenCallStatus::Active),
        },
        CallType::Unknown => None,
    }
}
