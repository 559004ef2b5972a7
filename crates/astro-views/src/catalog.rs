//! Prewired dashboard pages over the sample datasets
//!
//! One constructor per page of the shipped dashboard, each binding the
//! generic pipeline to its dataset: searchable fields, category
//! dropdown, summary cards, chart projection. The [`Dashboard`]
//! registry owns the views together with one query engine per view.

use std::any::Any;
use std::sync::Arc;

use ahash::AHashMap;
use uuid::Uuid;

use astro_core::{FilterCriteria, QueryEngine};
use astro_data::overview::{self, SiteStats};
use astro_data::records::{
    Asteroid, CelestialObject, Exoplanet, Galaxy, ObservationLog, SpectralSample, Star,
};
use astro_data::samples;

use crate::data_view::{CategoryOptions, DashboardView, DataView, ViewId};
use crate::filter::FilterBinding;
use crate::project::{BarChart, ChartData, ChartSpec, PointKind, PointMapping};
use crate::summary::{Aggregate, SummaryCard, SummaryReport, SummaryValue};

// Field accessors for the view bindings below.

fn object_name(o: &CelestialObject) -> &str {
    &o.name
}

fn object_type_label(o: &CelestialObject) -> &str {
    o.object_type.label()
}

fn star_name(s: &Star) -> &str {
    &s.name
}

fn star_spectral_type(s: &Star) -> &str {
    &s.spectral_type
}

fn star_temperature(s: &Star) -> f64 {
    s.temperature
}

fn star_luminosity(s: &Star) -> f64 {
    s.luminosity
}

fn star_mass(s: &Star) -> f64 {
    s.mass
}

fn galaxy_name(g: &Galaxy) -> &str {
    &g.name
}

fn galaxy_type_label(g: &Galaxy) -> &str {
    g.galaxy_type.label()
}

fn galaxy_mass(g: &Galaxy) -> f64 {
    g.mass
}

fn galaxy_distance(g: &Galaxy) -> f64 {
    g.distance_ly
}

fn planet_name(p: &Exoplanet) -> &str {
    &p.name
}

fn planet_host_star(p: &Exoplanet) -> &str {
    &p.host_star
}

fn planet_mass(p: &Exoplanet) -> f64 {
    p.mass
}

fn planet_period(p: &Exoplanet) -> f64 {
    p.orbital_period
}

fn asteroid_name(a: &Asteroid) -> &str {
    &a.name
}

fn asteroid_orbit_label(a: &Asteroid) -> &str {
    a.orbit_type.label()
}

fn asteroid_diameter(a: &Asteroid) -> f64 {
    a.diameter
}

fn asteroid_perihelion(a: &Asteroid) -> f64 {
    a.perihelion
}

fn asteroid_aphelion(a: &Asteroid) -> f64 {
    a.aphelion
}

fn log_object_name(l: &ObservationLog) -> &str {
    &l.object_name
}

fn log_user_name(l: &ObservationLog) -> &str {
    &l.user_name
}

fn log_telescope(l: &ObservationLog) -> &str {
    &l.telescope
}

fn log_date_observed(l: &ObservationLog) -> &str {
    &l.date_observed
}

fn log_object_key(l: &ObservationLog) -> String {
    l.object_id.to_string()
}

fn log_user_key(l: &ObservationLog) -> String {
    l.user_id.to_string()
}

fn sample_object_name(s: &SpectralSample) -> &str {
    &s.object_name
}

fn sample_object_key(s: &SpectralSample) -> String {
    s.object_id.to_string()
}

fn sample_date_key(s: &SpectralSample) -> String {
    s.date_recorded.clone()
}

fn sample_wavelength(s: &SpectralSample) -> f64 {
    s.wavelength
}

fn sample_intensity(s: &SpectralSample) -> f64 {
    s.intensity
}

/// The celestial object catalog page
pub fn celestial_objects_view() -> DataView<CelestialObject> {
    DataView::new(
        "Celestial Objects",
        "CelestialObjectsView",
        samples::celestial_objects(),
        FilterBinding {
            search_fields: &[object_name],
            category: Some(object_type_label),
            date: None,
        },
    )
    .with_categories(CategoryOptions::Fixed(&["Star", "Galaxy", "Exoplanet"]))
}

/// The stars page with the Hertzsprung-Russell diagram
pub fn stars_view() -> DataView<Star> {
    DataView::new(
        "Stars",
        "StarsView",
        samples::stars(),
        FilterBinding::search_only(&[star_name, star_spectral_type]),
    )
    .with_cards(vec![
        SummaryCard {
            label: "Total Stars",
            unit: None,
            aggregate: Aggregate::Count,
        },
        SummaryCard {
            label: "Average Temperature",
            unit: Some("K"),
            aggregate: Aggregate::RoundedMean(star_temperature),
        },
        SummaryCard {
            label: "Average Mass",
            unit: Some("M☉"),
            aggregate: Aggregate::Mean(star_mass),
        },
    ])
    .with_chart(ChartSpec {
        kind: PointKind::Scatter,
        title: "Hertzsprung-Russell Diagram",
        x_label: "Log Temperature (K)",
        y_label: "Log Luminosity (L☉)",
        // Hotter stars are drawn on the left
        reverse_x: true,
        mapping: PointMapping::log_log(star_temperature, star_luminosity),
    })
}

/// The galaxies page
pub fn galaxies_view() -> DataView<Galaxy> {
    DataView::new(
        "Galaxies",
        "GalaxiesView",
        samples::galaxies(),
        FilterBinding {
            search_fields: &[galaxy_name],
            category: Some(galaxy_type_label),
            date: None,
        },
    )
    .with_categories(CategoryOptions::Fixed(&["Spiral", "Elliptical", "Irregular"]))
    .with_cards(vec![
        SummaryCard {
            label: "Total Galaxies",
            unit: None,
            aggregate: Aggregate::Count,
        },
        SummaryCard {
            label: "Average Mass",
            unit: Some("M☉"),
            aggregate: Aggregate::ExponentialMean {
                field: galaxy_mass,
                digits: 2,
            },
        },
        SummaryCard {
            label: "Average Distance",
            unit: Some("ly"),
            aggregate: Aggregate::RoundedMean(galaxy_distance),
        },
    ])
    .with_chart(ChartSpec {
        kind: PointKind::Scatter,
        title: "Galaxy Mass vs Distance",
        x_label: "Log Distance (Light Years)",
        y_label: "Log Mass (Solar Masses)",
        reverse_x: false,
        mapping: PointMapping::log_log(galaxy_distance, galaxy_mass),
    })
}

/// The exoplanets page
pub fn exoplanets_view() -> DataView<Exoplanet> {
    DataView::new(
        "Exoplanets",
        "ExoplanetsView",
        samples::exoplanets(),
        FilterBinding::search_only(&[planet_name, planet_host_star]),
    )
    .with_cards(vec![
        SummaryCard {
            label: "Total Exoplanets",
            unit: None,
            aggregate: Aggregate::Count,
        },
        SummaryCard {
            label: "Average Mass",
            unit: Some("M⊕"),
            aggregate: Aggregate::Mean(planet_mass),
        },
        SummaryCard {
            label: "Average Orbital Period",
            unit: Some("days"),
            aggregate: Aggregate::Mean(planet_period),
        },
    ])
    .with_chart(ChartSpec {
        kind: PointKind::Scatter,
        title: "Exoplanet Mass vs Orbital Period",
        x_label: "Orbital Period (days)",
        y_label: "Mass (Earth masses)",
        reverse_x: false,
        mapping: PointMapping::linear(planet_period, planet_mass),
    })
}

/// The asteroids page
pub fn asteroids_view() -> DataView<Asteroid> {
    DataView::new(
        "Asteroids",
        "AsteroidsView",
        samples::asteroids(),
        FilterBinding {
            search_fields: &[asteroid_name],
            category: Some(asteroid_orbit_label),
            date: None,
        },
    )
    .with_categories(CategoryOptions::Fixed(&["Main Belt", "Near-Earth", "Trojan"]))
    .with_cards(vec![
        SummaryCard {
            label: "Total Asteroids",
            unit: None,
            aggregate: Aggregate::Count,
        },
        SummaryCard {
            label: "Average Diameter",
            unit: Some("km"),
            aggregate: Aggregate::RoundedMean(asteroid_diameter),
        },
        SummaryCard {
            // The unit lives in the label on this card
            label: "Average Orbit (AU)",
            unit: None,
            aggregate: Aggregate::PairMean(asteroid_perihelion, asteroid_aphelion),
        },
    ])
    .with_chart(ChartSpec {
        kind: PointKind::Scatter,
        title: "Asteroid Orbital Characteristics",
        x_label: "Perihelion (AU)",
        y_label: "Aphelion (AU)",
        reverse_x: false,
        mapping: PointMapping::linear(asteroid_perihelion, asteroid_aphelion),
    })
}

/// The observation log page
///
/// The only view with a date filter; its telescope dropdown is built
/// from the distinct telescopes present in the log.
pub fn observation_logs_view() -> DataView<ObservationLog> {
    DataView::new(
        "Observation Logs",
        "ObservationLogsView",
        samples::observation_logs(),
        FilterBinding {
            search_fields: &[log_object_name, log_user_name],
            category: Some(log_telescope),
            date: Some(log_date_observed),
        },
    )
    .with_categories(CategoryOptions::Distinct(log_telescope))
    .with_cards(vec![
        SummaryCard {
            label: "Total Observations",
            unit: None,
            aggregate: Aggregate::Count,
        },
        SummaryCard {
            label: "Unique Objects",
            unit: None,
            aggregate: Aggregate::DistinctCount(log_object_key),
        },
        SummaryCard {
            label: "Active Observers",
            unit: None,
            aggregate: Aggregate::DistinctCount(log_user_key),
        },
    ])
}

/// The spectral measurements page
pub fn spectral_data_view() -> DataView<SpectralSample> {
    DataView::new(
        "Spectral Data",
        "SpectralDataView",
        samples::spectral_samples(),
        FilterBinding::search_only(&[sample_object_name]),
    )
    .with_cards(vec![
        SummaryCard {
            label: "Total Measurements",
            unit: None,
            aggregate: Aggregate::Count,
        },
        SummaryCard {
            label: "Unique Objects",
            unit: None,
            aggregate: Aggregate::DistinctCount(sample_object_key),
        },
        SummaryCard {
            label: "Date Range",
            unit: Some("days"),
            aggregate: Aggregate::DistinctCount(sample_date_key),
        },
    ])
    .with_chart(ChartSpec {
        kind: PointKind::Line,
        title: "Spectral Intensity vs Wavelength",
        x_label: "Wavelength (nm)",
        y_label: "Intensity",
        reverse_x: false,
        mapping: PointMapping::linear(sample_wavelength, sample_intensity),
    })
}

/// The landing page: static site figures and the distribution chart
pub struct OverviewPage {
    id: ViewId,
}

impl OverviewPage {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Site-wide headline figures
    pub fn site_stats(&self) -> SiteStats {
        overview::SITE_STATS
    }

    /// Recent-activity feed lines
    pub fn recent_activity(&self) -> &'static [&'static str] {
        &overview::RECENT_ACTIVITY
    }
}

impl Default for OverviewPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for OverviewPage {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        "Dashboard"
    }

    fn view_type(&self) -> &str {
        "OverviewPage"
    }

    fn category_options(&self) -> Vec<String> {
        Vec::new()
    }

    fn summary(&self) -> SummaryReport {
        let stats = overview::SITE_STATS;
        let mut report = SummaryReport::new();
        report.insert(
            "Total Users".to_string(),
            SummaryValue::Int(stats.total_users as i64),
        );
        report.insert(
            "Observations Today".to_string(),
            SummaryValue::Int(stats.observations_today as i64),
        );
        report.insert(
            "Total Objects".to_string(),
            SummaryValue::Int(stats.total_objects as i64),
        );
        report.insert(
            "Spectral Data Points".to_string(),
            SummaryValue::Int(stats.spectral_data_points as i64),
        );
        report
    }

    fn chart(&self) -> Option<ChartData> {
        Some(ChartData::Bars(BarChart {
            title: overview::DISTRIBUTION_TITLE.to_string(),
            labels: overview::OBJECT_DISTRIBUTION
                .iter()
                .map(|(label, _)| label.to_string())
                .collect(),
            values: overview::OBJECT_DISTRIBUTION
                .iter()
                .map(|(_, value)| *value)
                .collect(),
        }))
    }

    fn filtered_count(&self, _criteria: &FilterCriteria) -> usize {
        // The landing page has no table
        0
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Registry of dashboard pages and their per-view query state
///
/// Owns one [`QueryEngine`] per registered view. Callers mutate state
/// through the engine, then ask the view for windows, summaries and
/// charts with the snapshot the engine hands back.
pub struct Dashboard {
    views: AHashMap<ViewId, Box<dyn DashboardView>>,
    engines: AHashMap<ViewId, Arc<QueryEngine>>,
    order: Vec<ViewId>,
}

impl Dashboard {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            views: AHashMap::new(),
            engines: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registry with every page of the shipped dashboard
    pub fn with_default_pages() -> Self {
        let mut dashboard = Self::new();
        dashboard.register(Box::new(OverviewPage::new()));
        dashboard.register(Box::new(celestial_objects_view()));
        dashboard.register(Box::new(stars_view()));
        dashboard.register(Box::new(galaxies_view()));
        dashboard.register(Box::new(exoplanets_view()));
        dashboard.register(Box::new(asteroids_view()));
        dashboard.register(Box::new(observation_logs_view()));
        dashboard.register(Box::new(spectral_data_view()));
        dashboard
    }

    /// Add a view and create its query engine
    pub fn register(&mut self, view: Box<dyn DashboardView>) -> ViewId {
        let id = view.id();
        tracing::info!("Registered view '{}' ({})", view.title(), view.view_type());
        self.engines.insert(id, Arc::new(QueryEngine::new()));
        self.order.push(id);
        self.views.insert(id, view);
        id
    }

    /// Look up a view
    pub fn view(&self, id: ViewId) -> Option<&dyn DashboardView> {
        self.views.get(&id).map(|view| view.as_ref())
    }

    /// Typed access to a registered view
    pub fn typed_view<V: 'static>(&self, id: ViewId) -> Option<&V> {
        self.views
            .get(&id)
            .and_then(|view| view.as_any().downcast_ref::<V>())
    }

    /// The query engine owned by a view
    pub fn engine(&self, id: ViewId) -> Option<Arc<QueryEngine>> {
        self.engines.get(&id).cloned()
    }

    /// Registered views, in registration order
    pub fn views(&self) -> impl Iterator<Item = &dyn DashboardView> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.views.get(id).map(|view| view.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_core::CategoryFilter;
    use crate::project::PointChart;

    fn point_chart(view: &dyn DashboardView) -> PointChart {
        match view.chart() {
            Some(ChartData::Points(chart)) => chart,
            other => panic!("expected a point chart, got {:?}", other),
        }
    }

    #[test]
    fn test_default_pages_are_registered_in_order() {
        let dashboard = Dashboard::with_default_pages();
        assert_eq!(dashboard.len(), 8);

        let titles: Vec<&str> = dashboard.views().map(|view| view.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Dashboard",
                "Celestial Objects",
                "Stars",
                "Galaxies",
                "Exoplanets",
                "Asteroids",
                "Observation Logs",
                "Spectral Data",
            ]
        );

        for view in dashboard.views() {
            assert!(dashboard.engine(view.id()).is_some());
        }
    }

    #[test]
    fn test_typed_view_downcast() {
        let mut dashboard = Dashboard::new();
        let id = dashboard.register(Box::new(asteroids_view()));

        let typed = dashboard.typed_view::<DataView<Asteroid>>(id).unwrap();
        assert_eq!(typed.source().len(), 3);
        assert!(dashboard.typed_view::<DataView<Star>>(id).is_none());
    }

    #[test]
    fn test_search_end_to_end_with_page_reset() {
        let view = asteroids_view();
        let engine = QueryEngine::new();

        // Stale cursor from browsing, then a narrowing search
        engine.set_page(4);
        engine.set_search("ves");

        let window = view.window(&engine.state());
        assert_eq!(window.total, 1);
        assert_eq!(window.rows.len(), 1);
        assert_eq!(window.rows[0].name, "Vesta");
    }

    #[test]
    fn test_category_sentinel_end_to_end() {
        let view = asteroids_view();
        let engine = QueryEngine::new();

        engine.set_category(CategoryFilter::Only("Near-Earth".to_string()));
        let narrowed = view.window(&engine.state());
        assert_eq!(narrowed.total, 1);
        assert_eq!(narrowed.rows[0].name, "Eros");

        engine.set_category(CategoryFilter::All);
        assert_eq!(view.window(&engine.state()).total, 3);
    }

    #[test]
    fn test_star_cards() {
        let view = stars_view();
        let report = view.summary();
        assert_eq!(report["Total Stars"], SummaryValue::Int(3));
        assert_eq!(report["Average Temperature"], SummaryValue::Int(6439));
        assert_eq!(
            report["Average Mass"],
            SummaryValue::Float((1.0 + 2.02 + 16.5) / 3.0)
        );
        assert_eq!(view.cards()[1].unit, Some("K"));
    }

    #[test]
    fn test_galaxy_cards() {
        let report = galaxies_view().summary();
        assert_eq!(report["Total Galaxies"], SummaryValue::Int(3));
        assert_eq!(
            report["Average Mass"],
            SummaryValue::Text("1.35e+12".to_string())
        );
        // (2 537 000 + 158 200 + 53 490 000) / 3
        assert_eq!(report["Average Distance"], SummaryValue::Int(18_728_400));
    }

    #[test]
    fn test_exoplanet_cards() {
        let report = exoplanets_view().summary();
        assert_eq!(report["Total Exoplanets"], SummaryValue::Int(3));
        assert_eq!(
            report["Average Mass"],
            SummaryValue::Float((1.71 + 0.77 + 1.27) / 3.0)
        );
        assert_eq!(
            report["Average Orbital Period"],
            SummaryValue::Float((129.9 + 6.1 + 11.2) / 3.0)
        );
    }

    #[test]
    fn test_observation_log_cards_and_options() {
        let view = observation_logs_view();
        let report = view.summary();
        assert_eq!(report["Total Observations"], SummaryValue::Int(3));
        assert_eq!(report["Unique Objects"], SummaryValue::Int(3));
        assert_eq!(report["Active Observers"], SummaryValue::Int(2));

        assert_eq!(
            view.category_options(),
            vec!["Celestron EdgeHD 14", "Meade LX200 12\""]
        );
    }

    #[test]
    fn test_spectral_cards_and_line_chart() {
        let view = spectral_data_view();
        let report = view.summary();
        assert_eq!(report["Total Measurements"], SummaryValue::Int(3));
        assert_eq!(report["Unique Objects"], SummaryValue::Int(1));
        assert_eq!(report["Date Range"], SummaryValue::Int(1));

        let chart = point_chart(&view);
        assert_eq!(chart.kind, PointKind::Line);
        assert_eq!(chart.points, vec![[400.0, 0.8], [500.0, 1.0], [600.0, 0.9]]);
    }

    #[test]
    fn test_hr_diagram_projection() {
        let chart = point_chart(&stars_view());
        assert_eq!(chart.title, "Hertzsprung-Russell Diagram");
        assert!(chart.reverse_x);
        assert_eq!(chart.points[0], [5778.0_f64.log10(), 0.0]);
        assert_eq!(chart.points.len(), 3);
    }

    #[test]
    fn test_overview_page() {
        let page = OverviewPage::new();
        let report = page.summary();
        let labels: Vec<&str> = report.keys().map(String::as_str).collect();
        assert_eq!(
            labels,
            vec![
                "Total Users",
                "Observations Today",
                "Total Objects",
                "Spectral Data Points",
            ]
        );
        assert_eq!(report["Total Users"], SummaryValue::Int(150));
        assert_eq!(report["Spectral Data Points"], SummaryValue::Int(12_500));

        match page.chart() {
            Some(ChartData::Bars(bars)) => {
                assert_eq!(bars.title, "Celestial Objects Distribution");
                assert_eq!(bars.labels, vec!["Stars", "Galaxies", "Exoplanets", "Asteroids"]);
                assert_eq!(bars.values, vec![1250.0, 450.0, 780.0, 890.0]);
            }
            other => panic!("expected a bar chart, got {:?}", other),
        }

        assert_eq!(page.site_stats().total_objects, 3370);
        assert_eq!(page.recent_activity().len(), 4);
    }

    #[test]
    fn test_celestial_objects_have_no_cards_or_chart() {
        let view = celestial_objects_view();
        assert!(view.summary().is_empty());
        assert!(view.chart().is_none());
        assert_eq!(
            view.category_options(),
            vec!["Star", "Galaxy", "Exoplanet"]
        );
    }
}
