//! Domain records and the computed listing view.

pub mod annotations;
pub mod event;
pub mod open_call;
pub mod view;

pub use annotations::{Application, ApplicationStatus, ListAction};
pub use event::{
    Event, EventCategory, EventDates, EventFormat, EventType, EventWindow, LifecycleState, Location,
};
pub use open_call::{CallType, OpenCall, OpenCallBasicInfo, OpenCallDates};
pub use view::EnrichedView;
