//! Pagination stage: clipped row windows over a filtered dataset

use astro_core::PageRequest;

/// The contiguous slice of `records` visible on the requested page
///
/// The window is `[offset, offset + size)` clipped to the input; a
/// page starting at or past the end yields an empty slice. Sending the
/// cursor back to page zero when criteria change is the query engine's
/// job, not this stage's.
pub fn page_slice<'a, R>(records: &'a [R], page: &PageRequest) -> &'a [R] {
    let start = page.offset();
    if start >= records.len() {
        return &[];
    }
    let end = (start + page.size).min(records.len());
    &records[start..end]
}
