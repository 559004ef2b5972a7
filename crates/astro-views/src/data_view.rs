//! Generic data view: one dataset behind the filter, paginate,
//! summarize and project stages

use std::any::Any;

use ahash::AHashSet;
use uuid::Uuid;

use astro_core::{FilterCriteria, QueryState};

use crate::filter::{self, FilterBinding};
use crate::paginate;
use crate::project::{ChartData, ChartSpec};
use crate::summary::{self, SummaryCard, SummaryReport};

/// Unique identifier for a dashboard view
pub type ViewId = Uuid;

/// How a view's category dropdown is populated
pub enum CategoryOptions<R> {
    /// The view has no categorical filter
    None,
    /// Fixed label list, in dropdown order
    Fixed(&'static [&'static str]),
    /// Distinct values of a field, in first-appearance order
    Distinct(fn(&R) -> &str),
}

/// The rows visible on the current page plus pager bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct TableWindow<R> {
    /// Rows of the current page, in source order
    pub rows: Vec<R>,
    /// Length of the whole filtered sequence; drives the pager
    pub total: usize,
    /// Page count at the current page size
    pub pages: usize,
}

/// One dashboard page: a dataset plus its declarative bindings
///
/// The view holds no query state of its own; every read takes the
/// state snapshot as an argument, so two calls with the same snapshot
/// always see the same rows.
pub struct DataView<R: 'static> {
    id: ViewId,
    title: String,
    view_type: &'static str,
    source: &'static [R],
    filter: FilterBinding<R>,
    categories: CategoryOptions<R>,
    cards: Vec<SummaryCard<R>>,
    chart: Option<ChartSpec<R>>,
}

impl<R: Clone + 'static> DataView<R> {
    /// Create a view with no category dropdown, cards, or chart
    pub fn new(
        title: impl Into<String>,
        view_type: &'static str,
        source: &'static [R],
        filter: FilterBinding<R>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            view_type,
            source,
            filter,
            categories: CategoryOptions::None,
            cards: Vec::new(),
            chart: None,
        }
    }

    /// Set how the category dropdown is populated
    pub fn with_categories(mut self, categories: CategoryOptions<R>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the summary cards
    pub fn with_cards(mut self, cards: Vec<SummaryCard<R>>) -> Self {
        self.cards = cards;
        self
    }

    /// Set the chart binding
    pub fn with_chart(mut self, chart: ChartSpec<R>) -> Self {
        self.chart = Some(chart);
        self
    }

    /// The dataset behind this view
    pub fn source(&self) -> &'static [R] {
        self.source
    }

    /// Records passing `criteria`, in source order
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<R> {
        filter::apply(self.source, criteria, &self.filter)
    }

    /// Filter then paginate: the visible window for one query state
    pub fn window(&self, query: &QueryState) -> TableWindow<R> {
        let filtered = self.filtered(&query.criteria);
        let rows = paginate::page_slice(&filtered, &query.page).to_vec();
        tracing::debug!(
            "{}: showing {} of {} rows on page {}",
            self.title,
            rows.len(),
            filtered.len(),
            query.page.index
        );
        TableWindow {
            total: filtered.len(),
            pages: query.page.page_count(filtered.len()),
            rows,
        }
    }

    /// Card bindings, including units, for the renderer
    pub fn cards(&self) -> &[SummaryCard<R>] {
        &self.cards
    }
}

/// Base trait for dashboard pages, boxed by the registry
pub trait DashboardView: Send + Sync {
    /// Unique id of this view
    fn id(&self) -> ViewId;

    /// Display title
    fn title(&self) -> &str;

    /// View type tag for diagnostics
    fn view_type(&self) -> &str;

    /// Labels for the category dropdown, without the "all" sentinel;
    /// empty when the view has no categorical filter
    fn category_options(&self) -> Vec<String>;

    /// Summary cards evaluated over the unfiltered dataset
    fn summary(&self) -> SummaryReport;

    /// Chart view model, if the view has a chart
    fn chart(&self) -> Option<ChartData>;

    /// Number of records passing the criteria
    fn filtered_count(&self, criteria: &FilterCriteria) -> usize;

    /// Downcast support for typed access through the registry
    fn as_any(&self) -> &dyn Any;
}

impl<R: Clone + Send + Sync + 'static> DashboardView for DataView<R> {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        self.view_type
    }

    fn category_options(&self) -> Vec<String> {
        match &self.categories {
            CategoryOptions::None => Vec::new(),
            CategoryOptions::Fixed(labels) => labels.iter().map(|l| l.to_string()).collect(),
            CategoryOptions::Distinct(get) => {
                let mut seen = AHashSet::new();
                let mut labels = Vec::new();
                for record in self.source {
                    let label = get(record);
                    if seen.insert(label.to_string()) {
                        labels.push(label.to_string());
                    }
                }
                labels
            }
        }
    }

    fn summary(&self) -> SummaryReport {
        summary::summarize(self.source, &self.cards)
    }

    fn chart(&self) -> Option<ChartData> {
        self.chart
            .as_ref()
            .map(|spec| ChartData::Points(spec.project(self.source)))
    }

    fn filtered_count(&self, criteria: &FilterCriteria) -> usize {
        self.source
            .iter()
            .filter(|record| self.filter.matches(record, criteria))
            .count()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
