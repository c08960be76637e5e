//! Inner joins of hospitals to spending scores and zip-code distances.
//!
//! Both joins are explicit hash-map lookups: a hospital survives only when its
//! identifier has a spending row and its zip code has a centroid.

use std::collections::HashMap;

use crate::domain::{DistanceRecord, HospitalRecord, RankedResult, SpendingRecord};

/// Row counts for one join pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinStats {
    pub hospitals: usize,
    pub missing_spending: usize,
    pub missing_centroid: usize,
    pub joined: usize,
}

/// Index spending rows by facility identifier. The first row per identifier wins.
pub fn index_spending(spending: &[SpendingRecord]) -> HashMap<&str, &SpendingRecord> {
    let mut index = HashMap::with_capacity(spending.len());
    for s in spending {
        index.entry(s.identifier.as_str()).or_insert(s);
    }
    index
}

/// Join hospitals (in input order) to spending and distance rows.
pub fn join_facilities(
    hospitals: &[HospitalRecord],
    spending: &[SpendingRecord],
    distances: &HashMap<String, DistanceRecord>,
) -> (Vec<RankedResult>, JoinStats) {
    let spending_by_id = index_spending(spending);
    let mut stats = JoinStats {
        hospitals: hospitals.len(),
        ..JoinStats::default()
    };

    let mut out = Vec::with_capacity(hospitals.len());
    for h in hospitals {
        let Some(s) = spending_by_id.get(h.identifier.as_str()) else {
            stats.missing_spending += 1;
            continue;
        };
        let Some(d) = distances.get(&h.zip) else {
            stats.missing_centroid += 1;
            continue;
        };

        out.push(RankedResult {
            identifier: h.identifier.clone(),
            name: h.name.clone(),
            address: h.address.clone(),
            city: h.city.clone(),
            state: h.state.clone(),
            zip: h.zip.clone(),
            rating: h.rating,
            score: s.score,
            latitude: d.coordinate.lat,
            longitude: d.coordinate.lng,
            distance: d.distance,
        });
    }

    stats.joined = out.len();
    (out, stats)
}
