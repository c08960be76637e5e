//! Anchor resolution and the per-zip distance table.

use std::collections::HashMap;

use crate::domain::{AnchorZip, Coordinate, DistanceRecord, DistanceUnit, ZipCentroid};
use crate::error::AppError;
use crate::geo::haversine;

/// Look up the anchor coordinate for a validated zip code.
///
/// Fails when the zip code has no centroid; distances are never computed
/// against an undefined anchor.
pub fn resolve_anchor(centroids: &[ZipCentroid], anchor: &AnchorZip) -> Result<Coordinate, AppError> {
    centroids
        .iter()
        .find(|c| c.zip == anchor.key)
        .map(|c| c.coordinate)
        .ok_or_else(|| {
            AppError::lookup(format!(
                "Zip code '{}' was not found in the zip code centroid table.",
                anchor.raw
            ))
        })
}

/// Distance from `anchor` to every centroid, keyed by zip code.
///
/// The first centroid wins when a zip code appears more than once.
pub fn distance_table(
    anchor: Coordinate,
    centroids: &[ZipCentroid],
    unit: DistanceUnit,
) -> HashMap<String, DistanceRecord> {
    let mut out = HashMap::with_capacity(centroids.len());
    for c in centroids {
        out.entry(c.zip.clone()).or_insert_with(|| DistanceRecord {
            zip: c.zip.clone(),
            coordinate: c.coordinate,
            distance: haversine(anchor, c.coordinate, unit),
        });
    }
    out
}
