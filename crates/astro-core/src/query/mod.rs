//! Query state system for dashboard views
//!
//! Every view owns one [`QueryEngine`]. The engine holds the view's
//! filter criteria and pagination cursor, applies the reset rules that
//! keep them consistent, and notifies subscribers after each change.
//! Views themselves stay stateless: they are pure functions of the
//! state snapshot the engine hands out.

use serde::{Deserialize, Serialize};

mod criteria;
mod engine;
mod page;
mod subscriber;

pub use criteria::{CategoryFilter, DateRange, FilterCriteria};
pub use engine::QueryEngine;
pub use page::{PageRequest, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use subscriber::QuerySubscriber;

/// Complete query state for one view
///
/// The criteria select which records are visible; the page cursor
/// selects which window of the selection is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Active filter criteria
    pub criteria: FilterCriteria,
    /// Pagination cursor into the filtered sequence
    pub page: PageRequest,
}
