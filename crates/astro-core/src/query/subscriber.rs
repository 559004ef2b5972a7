//! Query-state subscriber trait

use super::QueryState;

/// Trait for components that react to query-state changes
pub trait QuerySubscriber: Send + Sync {
    /// Called after any criteria or pagination change
    fn on_query_change(&self, state: &QueryState);
}
