//! Query engine implementation

use super::{CategoryFilter, DateRange, QueryState, QuerySubscriber};
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::sync::{Arc, Weak};

/// The query engine behind one dashboard view
///
/// Holds the view's filter criteria and pagination cursor. Filter and
/// page-size changes send the cursor back to the first page so the
/// window never starts beyond a freshly shrunk result set; moving to
/// another page of the same result set leaves the criteria alone.
pub struct QueryEngine {
    state: Arc<RwLock<QueryState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn QuerySubscriber>>>>,
}

impl QueryEngine {
    /// Create an engine with empty criteria and the default page size
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(QueryState::default())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> QueryState {
        self.state.read().clone()
    }

    /// Replace the search needle and return to the first page
    pub fn set_search(&self, needle: impl Into<String>) {
        let needle = needle.into();
        tracing::debug!("Search changed to '{}'", needle);
        let mut state = self.state.write();
        state.criteria.search = needle;
        state.page.index = 0;
        drop(state);
        self.notify_subscribers();
    }

    /// Replace the category selection and return to the first page
    pub fn set_category(&self, category: CategoryFilter) {
        tracing::debug!("Category changed to {:?}", category);
        let mut state = self.state.write();
        state.criteria.category = category;
        state.page.index = 0;
        drop(state);
        self.notify_subscribers();
    }

    /// Replace the date range and return to the first page
    pub fn set_date_range(&self, dates: DateRange) {
        tracing::debug!("Date range changed to {:?}", dates);
        let mut state = self.state.write();
        state.criteria.dates = dates;
        state.page.index = 0;
        drop(state);
        self.notify_subscribers();
    }

    /// Clear every criterion and return to the first page
    pub fn clear_filters(&self) {
        tracing::debug!("Filters cleared");
        let mut state = self.state.write();
        state.criteria = Default::default();
        state.page.index = 0;
        drop(state);
        self.notify_subscribers();
    }

    /// Move to another page of the current result set
    ///
    /// The index is not bounds-checked here; the engine does not know
    /// the filtered length. A page past the end simply yields an empty
    /// window downstream.
    pub fn set_page(&self, index: usize) {
        tracing::debug!("Moved to page {}", index);
        let mut state = self.state.write();
        state.page.index = index;
        drop(state);
        self.notify_subscribers();
    }

    /// Change the rows-per-page and return to the first page
    pub fn set_page_size(&self, size: usize) -> Result<(), String> {
        if size == 0 {
            return Err("Page size must be positive".to_string());
        }
        tracing::debug!("Page size changed to {}", size);
        let mut state = self.state.write();
        state.page.size = size;
        state.page.index = 0;
        drop(state);
        self.notify_subscribers();
        Ok(())
    }

    /// Serialize the current state for persistence
    pub fn save_state(&self) -> Value {
        let state = self.state.read();
        let category = match &state.criteria.category {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(label) => label.clone(),
        };
        json!({
            "search": state.criteria.search,
            "category": category,
            "date_start": state.criteria.dates.start.map(|d| d.to_string()),
            "date_end": state.criteria.dates.end.map(|d| d.to_string()),
            "page_index": state.page.index,
            "page_size": state.page.size,
        })
    }

    /// Restore a previously saved state
    ///
    /// Missing fields keep their current values, a malformed date
    /// clears its bound, and a zero page size is ignored.
    pub fn load_state(&self, value: &Value) {
        let mut state = self.state.write();

        if let Some(search) = value.get("search").and_then(|v| v.as_str()) {
            state.criteria.search = search.to_string();
        }
        if let Some(category) = value.get("category").and_then(|v| v.as_str()) {
            state.criteria.category = if category == "all" {
                CategoryFilter::All
            } else {
                CategoryFilter::Only(category.to_string())
            };
        }
        if let Some(start) = value.get("date_start").and_then(|v| v.as_str()) {
            state.criteria.dates.start = start.parse::<NaiveDate>().ok();
        }
        if let Some(end) = value.get("date_end").and_then(|v| v.as_str()) {
            state.criteria.dates.end = end.parse::<NaiveDate>().ok();
        }
        if let Some(index) = value.get("page_index").and_then(|v| v.as_u64()) {
            state.page.index = index as usize;
        }
        if let Some(size) = value.get("page_size").and_then(|v| v.as_u64()) {
            if size > 0 {
                state.page.size = size as usize;
            }
        }

        drop(state);
        tracing::debug!("Query state restored");
        self.notify_subscribers();
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn QuerySubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of a state change
    fn notify_subscribers(&self) {
        let state = self.state();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        // Notify live subscribers
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_query_change(&state);
            }
        }
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
