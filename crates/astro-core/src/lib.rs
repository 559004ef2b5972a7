//! Core functionality for the astronomy dashboard
//!
//! This crate provides the query-state abstractions shared by every
//! dashboard view: filter criteria, the pagination cursor, and the
//! engine that owns them on behalf of a view.

pub mod query;

// Re-export commonly used types
pub use query::{
    CategoryFilter, DateRange, FilterCriteria, PageRequest, QueryEngine, QueryState,
    QuerySubscriber, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
