//! The search pipeline:
//! load tables -> resolve anchor -> distance table -> joins -> filter/rank.
//!
//! Everything logs through whatever `tracing` dispatcher the caller has in
//! scope; `run_search_with_data` does no I/O at all.

use tracing::{debug, info, warn};

use crate::domain::{Coordinate, DataPaths, HospitalRecord, RankedResult, SearchConfig, SpendingRecord, ZipCentroid};
use crate::error::AppError;
use crate::geo::{distance_table, resolve_anchor};
use crate::io::ingest::{RowError, Table, load_centroids, load_hospitals, load_spending};
use crate::report::{JoinStats, format_results_table, format_run_summary, join_facilities, rank_facilities};

/// The three source tables, fully loaded.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub hospitals: Table<HospitalRecord>,
    pub spending: Table<SpendingRecord>,
    pub centroids: Table<ZipCentroid>,
}

/// All computed outputs of a single search.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub anchor: Coordinate,
    pub join_stats: JoinStats,
    pub results: Vec<RankedResult>,
}

/// Load all three tables. Any missing file or column aborts the run.
pub fn load_datasets(paths: &DataPaths) -> Result<Datasets, AppError> {
    info!("Creating datasets");

    let hospitals = load_hospitals(&paths.hospitals)?;
    log_table("hospitals", &paths.hospitals.display().to_string(), &hospitals);

    let spending = load_spending(&paths.spending)?;
    log_table("spending", &paths.spending.display().to_string(), &spending);

    let centroids = load_centroids(&paths.centroids)?;
    log_table("centroids", &paths.centroids.display().to_string(), &centroids);

    Ok(Datasets {
        hospitals,
        spending,
        centroids,
    })
}

/// Execute the full search: load tables from disk, then rank.
pub fn run_search(config: &SearchConfig) -> Result<RunOutput, AppError> {
    let data = load_datasets(&config.paths)?;
    run_search_with_data(config, &data)
}

/// Execute the search over already-loaded tables.
pub fn run_search_with_data(config: &SearchConfig, data: &Datasets) -> Result<RunOutput, AppError> {
    // 1) Anchor coordinate; no anchor, no distances.
    let anchor = resolve_anchor(&data.centroids.rows, &config.anchor)?;
    info!(
        zip = %config.anchor.raw,
        lat = anchor.lat,
        lng = anchor.lng,
        "Zip code passed and being used as anchor"
    );

    // 2) Distance from the anchor to every centroid.
    let distances = distance_table(anchor, &data.centroids.rows, config.unit);
    debug!(centroids = distances.len(), unit = config.unit.label(), "Computed distance table");

    // 3) Hospital ⋈ spending ⋈ distance.
    let (joined, join_stats) = join_facilities(&data.hospitals.rows, &data.spending.rows, &distances);
    info!(
        hospitals = join_stats.hospitals,
        joined = join_stats.joined,
        missing_spending = join_stats.missing_spending,
        missing_centroid = join_stats.missing_centroid,
        "Joined datasets"
    );

    // 4) Filter, sort, truncate.
    let results = rank_facilities(joined, config.rating_filter, config.num_facilities);

    info!("\n{}", format_run_summary(config, &join_stats, results.len()));
    info!("\n{}", format_results_table(&results, config.unit));

    Ok(RunOutput {
        anchor,
        join_stats,
        results,
    })
}

fn log_table<T>(label: &str, source: &str, table: &Table<T>) {
    info!(
        table = label,
        source,
        rows_read = table.rows_read,
        rows_used = table.rows_used(),
        rows_skipped = table.row_errors.len(),
        "Loaded table"
    );
    for RowError { line, key, message } in &table.row_errors {
        warn!(table = label, line, key = key.as_deref().unwrap_or(""), "{message}");
    }
}
