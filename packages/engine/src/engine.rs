//! The listing pipeline: enrich, filter, rank, paginate.
//!
//! Callers hand over already-fetched, already-authorized record slices; the
//! engine reads the clock once and returns one page of computed views.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::clock::ClockSource;
use crate::common::{paginate, Page, ViewerId};
use crate::enrich::enrich;
use crate::filter::{filter, FilterCriteria};
use crate::models::annotations::{Application, ListAction};
use crate::models::event::Event;
use crate::models::open_call::OpenCall;
use crate::models::view::EnrichedView;
use crate::rank::{Ranking, SortOptions};

/// Everything the persistence layer fetched for one request.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ListingBatch {
    #[builder(default)]
    pub events: Vec<Event>,
    #[builder(default)]
    pub open_calls: Vec<OpenCall>,
    #[builder(default)]
    pub list_actions: Vec<ListAction>,
    #[builder(default)]
    pub applications: Vec<Application>,
    #[builder(default, setter(strip_option))]
    pub viewer_id: Option<ViewerId>,
}

/// Filters, sort, and page selection for one listing request.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    #[builder(default)]
    #[serde(default)]
    pub filters: FilterCriteria,
    #[builder(default)]
    #[serde(default)]
    pub sort: SortOptions,
    #[builder(default = 1)]
    #[serde(default = "default_page")]
    pub page: usize,
    #[builder(default = 10)]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

impl Default for ListingRequest {
    fn default() -> Self {
        ListingRequest::builder().build()
    }
}

/// Request-shape errors. Data-quality problems never error; they resolve to
/// defined status and ranking buckets instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(usize),
    #[error("limit must be at least 1, got {0}")]
    InvalidLimit(usize),
}

/// Compute one page of the listing.
///
/// The clock is read exactly once; that instant drives every status and
/// every comparison in this invocation.
pub fn list(
    batch: &ListingBatch,
    request: &ListingRequest,
    clock: &dyn ClockSource,
) -> Result<Page<EnrichedView>, EngineError> {
    if request.page < 1 {
        return Err(EngineError::InvalidPage(request.page));
    }
    if request.limit < 1 {
        return Err(EngineError::InvalidLimit(request.limit));
    }

    let now = clock.now();

    let views = enrich(
        &batch.events,
        &batch.open_calls,
        &batch.list_actions,
        &batch.applications,
        batch.viewer_id,
        now,
    );
    let enriched_count = views.len();

    let mut views = filter(views, &request.filters);
    Ranking::new(request.sort, now).sort(&mut views);

    let page = paginate(views, request.page, request.limit);
    debug!(
        events = batch.events.len(),
        enriched = enriched_count,
        total = page.total,
        page = request.page,
        returned = page.results.len(),
        "computed listing page"
    );
    Ok(page)
}
