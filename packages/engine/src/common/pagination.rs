//! Offset-based pagination over an already-sorted in-memory list.
//!
//! Listings are computed per request from a small in-memory batch, so plain
//! page/limit slicing is sufficient here; `total` always reports the count
//! before slicing so callers can render page controls.

use serde::{Deserialize, Serialize};

/// One page of results plus the pre-slice total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in sorted order.
    pub results: Vec<T>,
    /// Count of items before slicing (after filtering and sorting).
    pub total: usize,
}

impl<T> Page<T> {
    /// An empty page with zero total.
    pub fn empty() -> Self {
        Page {
            results: Vec::new(),
            total: 0,
        }
    }
}

/// Slice a sorted list into the requested page.
///
/// `page` is 1-based; callers validate `page >= 1` and `limit >= 1` before
/// calling. An out-of-range page yields empty `results` with the correct
/// `total`, never an error.
pub fn paginate<T>(sorted: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let total = sorted.len();
    let offset = page.saturating_sub(1).saturating_mul(limit);
    let results = sorted.into_iter().skip(offset).take(limit).collect();
    Page { results, total }
}
