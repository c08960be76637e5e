//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - source table records (`HospitalRecord`, `SpendingRecord`, `ZipCentroid`)
//! - the joined output row (`RankedResult`)
//! - run configuration (`SearchConfig`, `RatingFilter`, `DistanceUnit`)

pub mod types;

pub use types::*;
