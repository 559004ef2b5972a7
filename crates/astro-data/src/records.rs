//! Record types for the astronomy datasets
//!
//! Records are immutable values constructed once when their collection
//! is built. Identifiers are unique within a collection; observation
//! logs carry denormalized display names next to the ids they refer
//! to, and no cross-collection integrity is enforced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::DataError;

/// Common surface for dataset records
pub trait Record {
    /// Identifier unique within the record's collection
    fn id(&self) -> u32;
}

/// Classification of a celestial object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Star,
    Galaxy,
    Exoplanet,
}

impl ObjectKind {
    /// All kinds, in dropdown order
    pub const ALL: [ObjectKind; 3] = [ObjectKind::Star, ObjectKind::Galaxy, ObjectKind::Exoplanet];

    /// Display label, also the value categorical filters compare against
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Star => "Star",
            ObjectKind::Galaxy => "Galaxy",
            ObjectKind::Exoplanet => "Exoplanet",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ObjectKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Star" => Ok(ObjectKind::Star),
            "Galaxy" => Ok(ObjectKind::Galaxy),
            "Exoplanet" => Ok(ObjectKind::Exoplanet),
            other => Err(DataError::UnknownKind {
                kind: "object type",
                value: other.to_string(),
            }),
        }
    }
}

/// Morphological classification of a galaxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalaxyKind {
    Spiral,
    Elliptical,
    Irregular,
}

impl GalaxyKind {
    pub const ALL: [GalaxyKind; 3] = [
        GalaxyKind::Spiral,
        GalaxyKind::Elliptical,
        GalaxyKind::Irregular,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalaxyKind::Spiral => "Spiral",
            GalaxyKind::Elliptical => "Elliptical",
            GalaxyKind::Irregular => "Irregular",
        }
    }
}

impl fmt::Display for GalaxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GalaxyKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spiral" => Ok(GalaxyKind::Spiral),
            "Elliptical" => Ok(GalaxyKind::Elliptical),
            "Irregular" => Ok(GalaxyKind::Irregular),
            other => Err(DataError::UnknownKind {
                kind: "galaxy type",
                value: other.to_string(),
            }),
        }
    }
}

/// Orbit family of an asteroid
///
/// Labels carry punctuation and spaces ("Main Belt", "Near-Earth");
/// the serde names match so serialized records show the same strings
/// the dropdowns do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitKind {
    #[serde(rename = "Main Belt")]
    MainBelt,
    #[serde(rename = "Near-Earth")]
    NearEarth,
    Trojan,
}

impl OrbitKind {
    pub const ALL: [OrbitKind; 3] = [OrbitKind::MainBelt, OrbitKind::NearEarth, OrbitKind::Trojan];

    pub fn label(&self) -> &'static str {
        match self {
            OrbitKind::MainBelt => "Main Belt",
            OrbitKind::NearEarth => "Near-Earth",
            OrbitKind::Trojan => "Trojan",
        }
    }
}

impl fmt::Display for OrbitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrbitKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Main Belt" => Ok(OrbitKind::MainBelt),
            "Near-Earth" => Ok(OrbitKind::NearEarth),
            "Trojan" => Ok(OrbitKind::Trojan),
            other => Err(DataError::UnknownKind {
                kind: "orbit type",
                value: other.to_string(),
            }),
        }
    }
}

/// An entry in the top-level celestial object catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    pub id: u32,
    pub name: String,
    pub object_type: ObjectKind,
    /// ISO date string, kept as recorded
    pub discovery_date: String,
    /// Distance from Earth in light years
    pub distance_ly: f64,
}

/// A star with its physical parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    pub name: String,
    /// Morgan-Keenan spectral classification, e.g. "G2V"
    pub spectral_type: String,
    /// Effective temperature in kelvin
    pub temperature: f64,
    /// Luminosity in solar luminosities
    pub luminosity: f64,
    /// Mass in solar masses
    pub mass: f64,
    /// Radius in solar radii
    pub radius: f64,
}

/// A galaxy with its large-scale parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub id: u32,
    pub name: String,
    pub galaxy_type: GalaxyKind,
    /// Redshift; blueshifted galaxies are negative
    pub redshift: f64,
    /// Mass in solar masses
    pub mass: f64,
    /// Distance from Earth in light years
    pub distance_ly: f64,
}

/// An exoplanet and its host star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    pub id: u32,
    pub name: String,
    pub host_star: String,
    /// Orbital period in days
    pub orbital_period: f64,
    /// Mass in Earth masses
    pub mass: f64,
    /// Radius in Earth radii
    pub radius: f64,
    /// Free-text atmosphere assessment, e.g. "Potentially rocky"
    pub atmosphere: String,
    /// ISO date string, kept as recorded
    pub discovery_date: String,
}

/// An asteroid and its orbital characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub name: String,
    /// Mean diameter in kilometers
    pub diameter: f64,
    /// Free-text composition, e.g. "Rock-ice"
    pub composition: String,
    pub orbit_type: OrbitKind,
    /// Closest approach to the Sun in AU
    pub perihelion: f64,
    /// Farthest distance from the Sun in AU
    pub aphelion: f64,
    /// ISO date string, kept as recorded
    pub discovery_date: String,
}

/// One observing-session entry from the observation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationLog {
    pub id: u32,
    /// Observer id; `user_name` is its denormalized display form
    pub user_id: u32,
    pub user_name: String,
    /// Observed object id; `object_name` is its denormalized display form
    pub object_id: u32,
    pub object_name: String,
    pub telescope: String,
    /// ISO date string, kept as recorded
    pub date_observed: String,
    pub notes: Option<String>,
}

/// One spectral intensity measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralSample {
    pub id: u32,
    pub object_id: u32,
    pub object_name: String,
    /// Wavelength in nanometers
    pub wavelength: f64,
    /// Relative intensity, unitless
    pub intensity: f64,
    /// ISO date string, kept as recorded
    pub date_recorded: String,
}

impl Record for CelestialObject {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Star {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Galaxy {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Exoplanet {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Asteroid {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for ObservationLog {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for SpectralSample {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Parse an ISO `YYYY-MM-DD` date string
///
/// Returns `None` for anything unparsable; date-bearing filters treat
/// that as a failed match rather than an error.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Check the per-collection id-uniqueness invariant
pub fn verify_unique_ids<R: Record>(
    records: &[R],
    collection: &'static str,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DataError::DuplicateId {
                collection,
                id: record.id(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in ObjectKind::ALL {
            assert_eq!(kind.label().parse::<ObjectKind>().unwrap(), kind);
        }
        for kind in GalaxyKind::ALL {
            assert_eq!(kind.label().parse::<GalaxyKind>().unwrap(), kind);
        }
        for kind in OrbitKind::ALL {
            assert_eq!(kind.label().parse::<OrbitKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let err = "Comet".parse::<ObjectKind>().unwrap_err();
        assert_eq!(
            err,
            DataError::UnknownKind {
                kind: "object type",
                value: "Comet".to_string(),
            }
        );
        assert!("main belt".parse::<OrbitKind>().is_err());
    }

    #[test]
    fn test_orbit_kind_serializes_with_display_labels() {
        let json = serde_json::to_string(&OrbitKind::MainBelt).unwrap();
        assert_eq!(json, "\"Main Belt\"");
        let back: OrbitKind = serde_json::from_str("\"Near-Earth\"").unwrap();
        assert_eq!(back, OrbitKind::NearEarth);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        // Pre-1000 years appear in the catalog (Andromeda, 964)
        assert_eq!(
            parse_iso_date("964-01-01"),
            NaiveDate::from_ymd_opt(964, 1, 1)
        );
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("15/03/2024"), None);
        assert_eq!(parse_iso_date("2024-13-40"), None);
    }

    #[test]
    fn test_verify_unique_ids() {
        let good = vec![
            ObservationLog {
                id: 1,
                user_id: 1,
                user_name: "A".to_string(),
                object_id: 1,
                object_name: "X".to_string(),
                telescope: "T".to_string(),
                date_observed: "2024-01-01".to_string(),
                notes: None,
            },
            ObservationLog {
                id: 2,
                user_id: 1,
                user_name: "A".to_string(),
                object_id: 2,
                object_name: "Y".to_string(),
                telescope: "T".to_string(),
                date_observed: "2024-01-02".to_string(),
                notes: None,
            },
        ];
        assert!(verify_unique_ids(&good, "logs").is_ok());

        let mut bad = good;
        bad[1].id = 1;
        assert_eq!(
            verify_unique_ids(&bad, "logs"),
            Err(DataError::DuplicateId {
                collection: "logs",
                id: 1,
            })
        );
    }
}
