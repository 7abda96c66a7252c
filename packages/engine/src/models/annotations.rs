//! Per-viewer annotations: list actions (bookmark/hide) and applications.

use serde::{Deserialize, Serialize};

use crate::common::{EventId, OpenCallId, ViewerId};

/// A viewer's bookmark/hide flags on one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAction {
    pub viewer_id: ViewerId,
    pub event_id: EventId,
    #[serde(default)]
    pub bookmarked: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// Where a viewer's application to a call stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationStatus {
    Applied,
    Pending,
    Accepted,
    Rejected,
}

/// A viewer's application record for one open call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub viewer_id: ViewerId,
    pub open_call_id: OpenCallId,
    pub application_status: Option<ApplicationStatus>,
    /// The viewer marked themselves as applied without a tracked submission.
    #[serde(default)]
    pub manual_applied: bool,
}

impl Application {
    /// The status to surface on a view: an explicit status wins, otherwise a
    /// manual "I applied" mark reads as `Applied`.
    pub fn effective_status(&self) -> Option<ApplicationStatus> {
        self.application_status.or_else(|| {
            if self.manual_applied {
                Some(ApplicationStatus::Applied)
            } else {
                None
            }
        })
    }
}
