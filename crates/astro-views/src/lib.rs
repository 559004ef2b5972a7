//! View system for the astronomy dashboard
//!
//! Each dashboard page is a [`DataView`] over one dataset: a
//! declarative binding of searchable fields, an optional category
//! dropdown, an optional date field, summary cards, and a chart
//! projection. The pipeline stages (filter, paginate, summarize,
//! project) are pure functions; the only mutable state is the
//! per-view `QueryEngine` held by the [`Dashboard`] registry.

mod catalog;
mod data_view;
pub mod filter;
pub mod format;
pub mod paginate;
pub mod project;
pub mod summary;

pub use catalog::{
    asteroids_view, celestial_objects_view, exoplanets_view, galaxies_view,
    observation_logs_view, spectral_data_view, stars_view, Dashboard, OverviewPage,
};
pub use data_view::{CategoryOptions, DashboardView, DataView, TableWindow, ViewId};
pub use filter::FilterBinding;
pub use project::{BarChart, ChartData, ChartSpec, PointChart, PointKind, PointMapping, Transform};
pub use summary::{Aggregate, SummaryCard, SummaryReport, SummaryValue};
