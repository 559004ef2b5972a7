//! Fixed sample datasets shipped with the dashboard
//!
//! Each collection is built once on first access and never mutated
//! afterwards. The values are the ones the dashboard has always
//! shipped with; several tests and summary figures depend on them.

use once_cell::sync::Lazy;

use crate::records::{
    Asteroid, CelestialObject, Exoplanet, Galaxy, GalaxyKind, ObjectKind, ObservationLog,
    OrbitKind, SpectralSample, Star,
};

static CELESTIAL_OBJECTS: Lazy<Vec<CelestialObject>> = Lazy::new(|| {
    vec![
        CelestialObject {
            id: 1,
            name: "Proxima Centauri".to_string(),
            object_type: ObjectKind::Star,
            discovery_date: "2016-08-24".to_string(),
            distance_ly: 4.2,
        },
        CelestialObject {
            id: 2,
            name: "Andromeda Galaxy".to_string(),
            object_type: ObjectKind::Galaxy,
            discovery_date: "964-01-01".to_string(),
            distance_ly: 2_537_000.0,
        },
        CelestialObject {
            id: 3,
            name: "Kepler-186f".to_string(),
            object_type: ObjectKind::Exoplanet,
            discovery_date: "2014-04-17".to_string(),
            distance_ly: 582.0,
        },
    ]
});

static STARS: Lazy<Vec<Star>> = Lazy::new(|| {
    vec![
        Star {
            id: 1,
            name: "Sun".to_string(),
            spectral_type: "G2V".to_string(),
            temperature: 5778.0,
            luminosity: 1.0,
            mass: 1.0,
            radius: 1.0,
        },
        Star {
            id: 2,
            name: "Sirius A".to_string(),
            spectral_type: "A1V".to_string(),
            temperature: 9940.0,
            luminosity: 25.4,
            mass: 2.02,
            radius: 1.71,
        },
        Star {
            id: 3,
            name: "Betelgeuse".to_string(),
            spectral_type: "M1-2".to_string(),
            temperature: 3600.0,
            luminosity: 126_000.0,
            mass: 16.5,
            radius: 370.0,
        },
    ]
});

static GALAXIES: Lazy<Vec<Galaxy>> = Lazy::new(|| {
    vec![
        Galaxy {
            id: 1,
            name: "Andromeda".to_string(),
            galaxy_type: GalaxyKind::Spiral,
            redshift: -0.001001,
            mass: 1.5e12,
            distance_ly: 2_537_000.0,
        },
        Galaxy {
            id: 2,
            name: "Large Magellanic Cloud".to_string(),
            galaxy_type: GalaxyKind::Irregular,
            redshift: 0.000927,
            mass: 1.38e11,
            distance_ly: 158_200.0,
        },
        Galaxy {
            id: 3,
            name: "Messier 87".to_string(),
            galaxy_type: GalaxyKind::Elliptical,
            redshift: 0.004283,
            mass: 2.4e12,
            distance_ly: 53_490_000.0,
        },
    ]
});

static EXOPLANETS: Lazy<Vec<Exoplanet>> = Lazy::new(|| {
    vec![
        Exoplanet {
            id: 1,
            name: "Kepler-186f".to_string(),
            host_star: "Kepler-186".to_string(),
            orbital_period: 129.9,
            mass: 1.71,
            radius: 1.17,
            atmosphere: "Unknown".to_string(),
            discovery_date: "2014-04-17".to_string(),
        },
        Exoplanet {
            id: 2,
            name: "TRAPPIST-1e".to_string(),
            host_star: "TRAPPIST-1".to_string(),
            orbital_period: 6.1,
            mass: 0.77,
            radius: 0.92,
            atmosphere: "Potentially rocky".to_string(),
            discovery_date: "2017-02-22".to_string(),
        },
        Exoplanet {
            id: 3,
            name: "Proxima Centauri b".to_string(),
            host_star: "Proxima Centauri".to_string(),
            orbital_period: 11.2,
            mass: 1.27,
            radius: 1.08,
            atmosphere: "Unknown".to_string(),
            discovery_date: "2016-08-24".to_string(),
        },
    ]
});

static ASTEROIDS: Lazy<Vec<Asteroid>> = Lazy::new(|| {
    vec![
        Asteroid {
            id: 1,
            name: "Ceres".to_string(),
            diameter: 939.4,
            composition: "Rock-ice".to_string(),
            orbit_type: OrbitKind::MainBelt,
            perihelion: 2.557,
            aphelion: 2.987,
            discovery_date: "1801-01-01".to_string(),
        },
        Asteroid {
            id: 2,
            name: "Vesta".to_string(),
            diameter: 525.4,
            composition: "Basaltic-rock".to_string(),
            orbit_type: OrbitKind::MainBelt,
            perihelion: 2.151,
            aphelion: 2.572,
            discovery_date: "1807-03-29".to_string(),
        },
        Asteroid {
            id: 3,
            name: "Eros".to_string(),
            diameter: 16.84,
            composition: "S-type".to_string(),
            orbit_type: OrbitKind::NearEarth,
            perihelion: 1.133,
            aphelion: 1.783,
            discovery_date: "1898-08-13".to_string(),
        },
    ]
});

static OBSERVATION_LOGS: Lazy<Vec<ObservationLog>> = Lazy::new(|| {
    vec![
        ObservationLog {
            id: 1,
            user_id: 1,
            user_name: "John Doe".to_string(),
            object_id: 1,
            object_name: "M31 - Andromeda Galaxy".to_string(),
            telescope: "Celestron EdgeHD 14".to_string(),
            date_observed: "2024-03-15".to_string(),
            notes: Some("Clear skies, excellent seeing conditions".to_string()),
        },
        ObservationLog {
            id: 2,
            user_id: 2,
            user_name: "Jane Smith".to_string(),
            object_id: 2,
            object_name: "M45 - Pleiades".to_string(),
            telescope: "Meade LX200 12\"".to_string(),
            date_observed: "2024-03-14".to_string(),
            notes: Some("Some cloud cover".to_string()),
        },
        ObservationLog {
            id: 3,
            user_id: 1,
            user_name: "John Doe".to_string(),
            object_id: 3,
            object_name: "Jupiter".to_string(),
            telescope: "Celestron EdgeHD 14".to_string(),
            date_observed: "2024-03-13".to_string(),
            notes: Some("Great view of the Great Red Spot".to_string()),
        },
    ]
});

static SPECTRAL_SAMPLES: Lazy<Vec<SpectralSample>> = Lazy::new(|| {
    vec![
        SpectralSample {
            id: 1,
            object_id: 1,
            object_name: "Sun".to_string(),
            wavelength: 400.0,
            intensity: 0.8,
            date_recorded: "2024-03-15".to_string(),
        },
        SpectralSample {
            id: 2,
            object_id: 1,
            object_name: "Sun".to_string(),
            wavelength: 500.0,
            intensity: 1.0,
            date_recorded: "2024-03-15".to_string(),
        },
        SpectralSample {
            id: 3,
            object_id: 1,
            object_name: "Sun".to_string(),
            wavelength: 600.0,
            intensity: 0.9,
            date_recorded: "2024-03-15".to_string(),
        },
    ]
});

/// The celestial object catalog
pub fn celestial_objects() -> &'static [CelestialObject] {
    &CELESTIAL_OBJECTS
}

/// The star collection
pub fn stars() -> &'static [Star] {
    &STARS
}

/// The galaxy collection
pub fn galaxies() -> &'static [Galaxy] {
    &GALAXIES
}

/// The exoplanet collection
pub fn exoplanets() -> &'static [Exoplanet] {
    &EXOPLANETS
}

/// The asteroid collection
pub fn asteroids() -> &'static [Asteroid] {
    &ASTEROIDS
}

/// The observation log
pub fn observation_logs() -> &'static [ObservationLog] {
    &OBSERVATION_LOGS
}

/// The spectral measurement collection
pub fn spectral_samples() -> &'static [SpectralSample] {
    &SPECTRAL_SAMPLES
}
