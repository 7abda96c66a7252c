//! Open-call records: submission windows attached to events.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::{EventId, OpenCallId};
use crate::models::event::LifecycleState;

/// How applications are collected for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallType {
    /// Has a defined start/end window.
    Fixed,
    /// Open-ended, optionally hard-capped by an end date.
    Rolling,
    /// Applications via email, end date only.
    Email,
    /// Unrecognized value in the source record.
    #[serde(other)]
    Unknown,
}

/// Raw date strings for a call's window. Either may be absent or malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenCallDates {
    pub oc_start: Option<String>,
    pub oc_end: Option<String>,
}

/// The portion of a call's basic info this engine reads. Compensation and
/// application details are opaque here and stay with the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenCallBasicInfo {
    pub call_type: CallType,
    #[serde(default)]
    pub dates: OpenCallDates,
}

/// A submission window owned by an event.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct OpenCall {
    #[builder(default = OpenCallId::new())]
    pub id: OpenCallId,
    pub event_id: EventId,
    #[builder(default = LifecycleState::Published)]
    pub state: LifecycleState,
    pub basic_info: OpenCallBasicInfo,
}

impl OpenCall {
    pub fn is_published(&self) -> bool {
        self.state == LifecycleState::Published
    }

    pub fn call_type(&self) -> CallType {
        self.basic_info.call_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_call_type_deserializes_without_error() {
        let call: CallType = serde_json::from_str("\"carrier-pigeon\"").unwrap();
        assert_eq!(call, CallType::Unknown);
    }

    #[test]
    fn only_published_calls_count() {
        let call = OpenCall::builder()
            .event_id(EventId::new())
            .state(LifecycleState::Draft)
            .basic_info(OpenCallBasicInfo {
                call_type: CallType::Fixed,
                dates: OpenCallDates::default(),
            })
            .build();
        assert!(!call.is_published());
    }
}
