//! Static figures for the dashboard landing page
//!
//! The landing page shows fixed site-wide numbers, not aggregates of
//! the sample collections (the shipped system predates live counters).
//! They are kept verbatim as a static display dataset.

use serde::Serialize;

/// Site-wide headline figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    pub total_users: u32,
    pub observations_today: u32,
    pub total_objects: u32,
    pub spectral_data_points: u32,
}

/// Figures shown on the landing page stat cards
pub const SITE_STATS: SiteStats = SiteStats {
    total_users: 150,
    observations_today: 24,
    total_objects: 3370,
    spectral_data_points: 12_500,
};

/// Object-distribution bar series: label and object count per class
pub const OBJECT_DISTRIBUTION: [(&str, f64); 4] = [
    ("Stars", 1250.0),
    ("Galaxies", 450.0),
    ("Exoplanets", 780.0),
    ("Asteroids", 890.0),
];

/// Title of the distribution chart
pub const DISTRIBUTION_TITLE: &str = "Celestial Objects Distribution";

/// Recent-activity feed lines
pub const RECENT_ACTIVITY: [&str; 4] = [
    "New exoplanet discovered - 2 hours ago",
    "Spectral analysis completed - 4 hours ago",
    "New user registration - 5 hours ago",
    "Galaxy data updated - 6 hours ago",
];
