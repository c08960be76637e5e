//! Fixed-width text rendering of a search run, used for the verbose log.

use crate::domain::{DistanceUnit, RankedResult, SearchConfig};
use crate::report::JoinStats;

/// One-paragraph summary of a run's inputs and join counts.
pub fn format_run_summary(config: &SearchConfig, stats: &JoinStats, returned: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Anchor zip: {}\n", config.anchor.raw));
    out.push_str(&format!("Max facilities: {}\n", config.num_facilities));
    out.push_str(&format!("Rating filter: {:?}\n", config.rating_filter));
    out.push_str(&format!(
        "Joined: {} of {} hospitals (no spending row: {}, no centroid: {})\n",
        stats.joined, stats.hospitals, stats.missing_spending, stats.missing_centroid
    ));
    out.push_str(&format!("Returned: {returned}"));
    out
}

/// Ranked results as an aligned table.
pub fn format_results_table(rows: &[RankedResult], unit: DistanceUnit) -> String {
    let mut out = String::new();
    let dist_header = format!("dist_{}", unit.label());
    out.push_str(
        format!(
            "{:>4} {:<8} {:<32} {:<16} {:<5} {:<5} {:>6} {:>6} {:>10}",
            "#", "id", "name", "city", "state", "zip", "rating", "score", dist_header
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&format!(
        "{:-<4} {:-<8} {:-<32} {:-<16} {:-<5} {:-<5} {:-<6} {:-<6} {:-<10}",
        "", "", "", "", "", "", "", "", ""
    ));
    out.push('\n');

    for (i, r) in rows.iter().enumerate() {
        out.push_str(
            format!(
                "{:>4} {:<8} {:<32} {:<16} {:<5} {:<5} {:>6} {:>6} {:>10.2}",
                i + 1,
                truncate(&r.identifier, 8),
                truncate(&r.name, 32),
                truncate(&r.city, 16),
                truncate(&r.state, 5),
                truncate(&r.zip, 5),
                fmt_opt(r.rating, 1),
                fmt_opt(r.score, 2),
                r.distance,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn fmt_opt(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(v) => format!("{v:.precision$}"),
        None => "n/a".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
