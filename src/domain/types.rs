//! Shared domain types.
//!
//! Input records mirror one row of each source table. `RankedResult` is the
//! joined, serializable row that ends up in the JSON output.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row of the hospital general information table.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalRecord {
    pub identifier: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Overall quality rating. `None` when the source says "Not Available".
    pub rating: Option<f64>,
}

/// One row of the Medicare spending-per-patient table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingRecord {
    pub identifier: String,
    pub score: Option<f64>,
}

/// A zip code centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipCentroid {
    pub zip: String,
    pub coordinate: Coordinate,
}

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Distance from the anchor to one centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRecord {
    pub zip: String,
    pub coordinate: Coordinate,
    pub distance: f64,
}

/// A hospital joined to its spending score and its zip centroid distance.
///
/// Field order is the key order of every object in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub identifier: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub rating: Option<f64>,
    pub score: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}

/// Unit used for every distance in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DistanceUnit {
    /// Kilometers.
    #[default]
    Km,
    /// Statute miles.
    Mi,
}

impl DistanceUnit {
    /// Earth's mean radius in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Km => 6371.0088,
            DistanceUnit::Mi => 3958.7613,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Mi => "mi",
        }
    }
}

/// Minimum overall rating filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatingFilter {
    /// No `--min_overall_rating`: every joined row is kept, unrated ones included.
    #[default]
    Unrestricted,
    /// Keep rows rated at least this value. Unrated rows are dropped.
    AtLeast(f64),
}

impl RatingFilter {
    pub fn from_option(min: Option<f64>) -> Self {
        match min {
            Some(v) => RatingFilter::AtLeast(v),
            None => RatingFilter::Unrestricted,
        }
    }

    pub fn accepts(self, rating: Option<f64>) -> bool {
        match self {
            RatingFilter::Unrestricted => true,
            RatingFilter::AtLeast(min) => rating.is_some_and(|r| r >= min),
        }
    }
}

/// A validated anchor zip code.
///
/// `raw` is what the user typed; `key` is the 5-digit prefix used to look up
/// the centroid (ZIP+4 inputs share the centroid of their 5-digit zip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorZip {
    pub raw: String,
    pub key: String,
}

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub hospitals: PathBuf,
    pub spending: PathBuf,
    pub centroids: PathBuf,
}

/// Fully validated configuration for one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub anchor: AnchorZip,
    pub num_facilities: usize,
    pub rating_filter: RatingFilter,
    pub unit: DistanceUnit,
    pub paths: DataPaths,
}
