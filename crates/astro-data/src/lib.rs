//! Datasets and record types for the astronomy dashboard
//!
//! The dashboard ships with small fixed collections (stars, galaxies,
//! exoplanets, asteroids, observation logs, spectral samples). This
//! crate defines the record types, the collections themselves, and the
//! static figures shown on the landing page.

pub mod overview;
pub mod records;
pub mod samples;

use thiserror::Error;

// Re-exports
pub use records::{
    parse_iso_date, verify_unique_ids, Asteroid, CelestialObject, Exoplanet, Galaxy, GalaxyKind,
    ObjectKind, ObservationLog, OrbitKind, Record, SpectralSample, Star,
};

/// Errors that can occur in data operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Unknown {kind} label: '{value}'")]
    UnknownKind { kind: &'static str, value: String },

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },
}
