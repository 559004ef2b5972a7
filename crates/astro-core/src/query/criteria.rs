//! Filter criteria value types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selection state of a view's category dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// The "all" sentinel: every record passes
    #[default]
    All,
    /// Exact match against the view's categorical field
    Only(String),
}

impl CategoryFilter {
    /// Whether a record's category label passes this selection
    pub fn accepts(&self, label: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == label,
        }
    }
}

/// Inclusive date range; an absent bound imposes no constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a date falls within the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Filter criteria for one view
///
/// Active criteria combine with logical AND; an inactive criterion
/// (empty search, "all" category, unbounded dates) passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring needle for the view's searchable fields
    pub search: String,
    /// Selection for the view's categorical field, if it has one
    pub category: CategoryFilter,
    /// Date range applied to the view's date field, if it has one
    pub dates: DateRange,
}

impl FilterCriteria {
    /// True when no criterion is active and filtering is the identity
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All && self.dates.is_unbounded()
    }
}
