//! Summary aggregation stage
//!
//! Summary cards describe the whole collection, so aggregation always
//! runs over the unfiltered source; the filter stage never feeds this
//! one.

use ahash::AHashSet;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::format::to_exponential;

/// Numeric field accessor
pub type NumericField<R> = fn(&R) -> f64;

/// Distinct-count key accessor
pub type KeyField<R> = fn(&R) -> String;

/// One aggregation over a dataset
///
/// The mean family divides by the record count; callers must not
/// evaluate those variants over an empty collection.
pub enum Aggregate<R> {
    /// Number of records
    Count,
    /// Arithmetic mean of a field
    Mean(NumericField<R>),
    /// Mean rounded to the nearest integer, halves away from zero
    RoundedMean(NumericField<R>),
    /// Mean of the per-record midpoint `(a + b) / 2`
    PairMean(NumericField<R>, NumericField<R>),
    /// Mean rendered in scientific notation
    ExponentialMean {
        field: NumericField<R>,
        digits: usize,
    },
    /// Cardinality of the set of distinct key values
    DistinctCount(KeyField<R>),
}

/// A labeled summary card: one aggregate plus display metadata
pub struct SummaryCard<R> {
    pub label: &'static str,
    /// Unit suffix rendered after the value, e.g. "K"
    pub unit: Option<&'static str>,
    pub aggregate: Aggregate<R>,
}

/// Computed card value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Int(v) => write!(f, "{v}"),
            SummaryValue::Float(v) => write!(f, "{v}"),
            SummaryValue::Text(v) => f.write_str(v),
        }
    }
}

/// Card label to computed value, in card order
pub type SummaryReport = IndexMap<String, SummaryValue>;

fn mean<R>(records: &[R], field: NumericField<R>) -> f64 {
    let sum: f64 = records.iter().map(field).sum();
    sum / records.len() as f64
}

/// Evaluate one aggregate over `records`
pub fn evaluate<R>(records: &[R], aggregate: &Aggregate<R>) -> SummaryValue {
    match aggregate {
        Aggregate::Count => SummaryValue::Int(records.len() as i64),
        Aggregate::Mean(field) => SummaryValue::Float(mean(records, *field)),
        Aggregate::RoundedMean(field) => SummaryValue::Int(mean(records, *field).round() as i64),
        Aggregate::PairMean(a, b) => {
            let (a, b) = (*a, *b);
            let sum: f64 = records.iter().map(|r| (a(r) + b(r)) / 2.0).sum();
            SummaryValue::Float(sum / records.len() as f64)
        }
        Aggregate::ExponentialMean { field, digits } => {
            SummaryValue::Text(to_exponential(mean(records, *field), *digits))
        }
        Aggregate::DistinctCount(key) => {
            let distinct: AHashSet<String> = records.iter().map(*key).collect();
            SummaryValue::Int(distinct.len() as i64)
        }
    }
}

/// Evaluate every card, preserving card order in the report
pub fn summarize<R>(records: &[R], cards: &[SummaryCard<R>]) -> SummaryReport {
    cards
        .iter()
        .map(|card| (card.label.to_string(), evaluate(records, &card.aggregate)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_data::samples;
    use astro_data::{Asteroid, Galaxy, ObservationLog, Star};

    fn star_temperature(s: &Star) -> f64 {
        s.temperature
    }

    fn star_mass(s: &Star) -> f64 {
        s.mass
    }

    fn galaxy_mass(g: &Galaxy) -> f64 {
        g.mass
    }

    fn galaxy_type_key(g: &Galaxy) -> String {
        g.galaxy_type.label().to_string()
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

    fn log_user_key(l: &ObservationLog) -> String {
        l.user_id.to_string()
    }

    fn log_object_key(l: &ObservationLog) -> String {
        l.object_id.to_string()
    }

    #[test]
    fn test_count() {
        assert_eq!(
            evaluate(samples::stars(), &Aggregate::Count),
            SummaryValue::Int(3)
        );
    }

    #[test]
    fn test_mean_and_rounded_mean() {
        // (5778 + 9940 + 3600) / 3 = 6439.33, displayed as 6439
        assert_eq!(
            evaluate(samples::stars(), &Aggregate::RoundedMean(star_temperature)),
            SummaryValue::Int(6439)
        );
        assert_eq!(
            evaluate(samples::stars(), &Aggregate::Mean(star_mass)),
            SummaryValue::Float((1.0 + 2.02 + 16.5) / 3.0)
        );
        // (939.4 + 525.4 + 16.84) / 3 = 493.88, displayed as 494
        assert_eq!(
            evaluate(samples::asteroids(), &Aggregate::RoundedMean(asteroid_diameter)),
            SummaryValue::Int(494)
        );
    }

    #[test]
    fn test_pair_mean() {
        let expected =
            ((2.557 + 2.987) / 2.0 + (2.151 + 2.572) / 2.0 + (1.133 + 1.783) / 2.0) / 3.0;
        assert_eq!(
            evaluate(
                samples::asteroids(),
                &Aggregate::PairMean(asteroid_perihelion, asteroid_aphelion),
            ),
            SummaryValue::Float(expected)
        );
    }

    #[test]
    fn test_exponential_mean() {
        // (1.5e12 + 1.38e11 + 2.4e12) / 3 = 1.346e12
        assert_eq!(
            evaluate(
                samples::galaxies(),
                &Aggregate::ExponentialMean {
                    field: galaxy_mass,
                    digits: 2,
                },
            ),
            SummaryValue::Text("1.35e+12".to_string())
        );
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(
            evaluate(
                samples::observation_logs(),
                &Aggregate::DistinctCount(log_user_key),
            ),
            SummaryValue::Int(2)
        );
        assert_eq!(
            evaluate(
                samples::observation_logs(),
                &Aggregate::DistinctCount(log_object_key),
            ),
            SummaryValue::Int(3)
        );
        // Spiral, Irregular and Elliptical are all distinct
        assert_eq!(
            evaluate(
                samples::galaxies(),
                &Aggregate::DistinctCount(galaxy_type_key),
            ),
            SummaryValue::Int(3)
        );
    }

    #[test]
    fn test_report_preserves_card_order() {
        let cards = vec![
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
        ];
        let report = summarize(samples::stars(), &cards);
        let labels: Vec<&str> = report.keys().map(String::as_str).collect();
        assert_eq!(
            labels,
            vec!["Total Stars", "Average Temperature", "Average Mass"]
        );
        assert_eq!(report["Total Stars"], SummaryValue::Int(3));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(SummaryValue::Int(6439).to_string(), "6439");
        assert_eq!(SummaryValue::Float(1.25).to_string(), "1.25");
        assert_eq!(
            SummaryValue::Text("1.35e+12".to_string()).to_string(),
            "1.35e+12"
        );
    }
}
