//! Rating filter and deterministic ranking.
//!
//! Order: rating descending (unrated last), distance ascending, name
//! ascending, then identifier ascending so the order is total.

use std::cmp::Ordering;

use crate::domain::{RankedResult, RatingFilter};

/// Filter by minimum rating, sort, and keep the first `limit` rows.
pub fn rank_facilities(results: Vec<RankedResult>, filter: RatingFilter, limit: usize) -> Vec<RankedResult> {
    let mut kept: Vec<RankedResult> = results.into_iter().filter(|r| filter.accepts(r.rating)).collect();
    kept.sort_by(compare_ranked);
    kept.truncate(limit);
    kept
}

/// Total order used for ranking.
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    compare_rating_desc(a.rating, b.rating)
        .then_with(|| a.distance.total_cmp(&b.distance))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.identifier.cmp(&b.identifier))
}

fn compare_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, rating: Option<f64>, distance: f64) -> RankedResult {
        RankedResult {
            identifier: id.to_string(),
            name: name.to_string(),
            address: String::new(),
            city: String::new(),
            state: "NY".to_string(),
            zip: "10001".to_string(),
            rating,
            score: Some(1.0),
            latitude: 40.75,
            longitude: -73.99,
            distance,
        }
    }

    fn sample() -> Vec<RankedResult> {
        vec![
            row("1", "BELLEVUE", Some(3.0), 1.0),
            row("2", "MOUNT SINAI", Some(5.0), 8.0),
            row("3", "LENOX HILL", Some(5.0), 4.0),
            row("4", "UNRATED", None, 0.5),
            row("5", "BETH ISRAEL", Some(5.0), 4.0),
            row("6", "COLUMBIA", Some(4.0), 12.0),
        ]
    }

    fn ids(rows: &[RankedResult]) -> Vec<&str> {
        rows.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn sorts_by_rating_then_distance_then_name() {
        let ranked = rank_facilities(sample(), RatingFilter::Unrestricted, 20);
        assert_eq!(ids(&ranked), ["5", "3", "2", "6", "1", "4"]);

        for pair in ranked.windows(2) {
            assert_ne!(compare_ranked(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn unrestricted_keeps_unrated_rows_last() {
        let ranked = rank_facilities(sample(), RatingFilter::Unrestricted, 20);
        assert_eq!(ranked.len(), 6);
        assert_eq!(ranked.last().unwrap().rating, None);
    }

    #[test]
    fn min_rating_drops_low_and_unrated() {
        let ranked = rank_facilities(sample(), RatingFilter::AtLeast(4.0), 20);
        assert_eq!(ids(&ranked), ["5", "3", "2", "6"]);
        assert!(ranked.iter().all(|r| r.rating.is_some_and(|v| v >= 4.0)));
    }

    #[test]
    fn truncates_to_limit() {
        let ranked = rank_facilities(sample(), RatingFilter::AtLeast(4.0), 2);
        assert_eq!(ids(&ranked), ["5", "3"]);
    }

    #[test]
    fn min_rating_above_max_yields_empty() {
        let ranked = rank_facilities(sample(), RatingFilter::AtLeast(6.0), 20);
        assert!(ranked.is_empty());
    }

    #[test]
    fn identifier_breaks_full_ties() {
        let rows = vec![row("b", "SAME", Some(4.0), 1.0), row("a", "SAME", Some(4.0), 1.0)];
        let ranked = rank_facilities(rows, RatingFilter::Unrestricted, 20);
        assert_eq!(ids(&ranked), ["a", "b"]);
    }
}
