//! Filter stage: criteria matching over one dataset
//!
//! Active criteria AND together. Matching is permissive: a record with
//! an unparsable date simply fails a bounded date check; nothing in
//! this stage returns an error.

use astro_core::FilterCriteria;
use astro_data::parse_iso_date;

/// Field bindings that make a record type filterable
///
/// Accessors are plain field getters. A view declares which string
/// fields the search box scans, which field the category dropdown
/// compares against, and which field the date pickers bound; `None`
/// means the view has no such control.
pub struct FilterBinding<R: 'static> {
    /// Fields scanned by the free-text search; a record passes if any
    /// of them contains the needle, case-insensitively
    pub search_fields: &'static [fn(&R) -> &str],
    /// Categorical field compared for exact label equality
    pub category: Option<fn(&R) -> &str>,
    /// ISO date field bounded by the range criterion
    pub date: Option<fn(&R) -> &str>,
}

impl<R> FilterBinding<R> {
    /// Binding for views with only a search box
    pub fn search_only(search_fields: &'static [fn(&R) -> &str]) -> Self {
        Self {
            search_fields,
            category: None,
            date: None,
        }
    }

    /// Whether one record passes the given criteria
    pub fn matches(&self, record: &R, criteria: &FilterCriteria) -> bool {
        if !criteria.search.is_empty() {
            let needle = criteria.search.to_lowercase();
            let hit = self
                .search_fields
                .iter()
                .any(|get| get(record).to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(get) = self.category {
            if !criteria.category.accepts(get(record)) {
                return false;
            }
        }

        if let Some(get) = self.date {
            if !criteria.dates.is_unbounded() {
                match parse_iso_date(get(record)) {
                    Some(date) => {
                        if !criteria.dates.contains(date) {
                            return false;
                        }
                    }
                    // An unparsable date never matches a bounded range
                    None => return false,
                }
            }
        }

        true
    }
}

/// Apply `criteria` to `records`, preserving input order
///
/// Empty criteria yields an order-preserving copy of the input.
pub fn apply<R: Clone>(
    records: &[R],
    criteria: &FilterCriteria,
    binding: &FilterBinding<R>,
) -> Vec<R> {
    if criteria.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| binding.matches(record, criteria))
        .cloned()
        .collect()
}
