//! Pagination cursor value type

use serde::{Deserialize, Serialize};

/// Page sizes offered by the pager control
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Rows per page before the user picks anything
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A pagination cursor: zero-based page index and rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub index: usize,
    /// Rows per page, always positive
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    /// Offset of the first row of this page; saturates at `usize::MAX`
    ///
    /// The index can be arbitrarily large: it is not bounds-checked,
    /// and snapshots restore it verbatim.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Number of pages needed for `total` rows; zero rows need none
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }
}
