//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses and validates CLI arguments (before any table is opened)
//! - builds the logging handle for the run
//! - runs the search pipeline under that handle
//! - prints the ranked facilities as JSON

use chrono::Local;
use clap::Parser;
use tracing::{error, info};

use crate::cli::Cli;
use crate::config::{load_dotenv, log_config_from_args, search_config_from_args};
use crate::domain::SearchConfig;
use crate::error::AppError;
use crate::io::export::write_results_json;
use crate::logging::build_dispatch;

pub mod pipeline;

/// Entry point for the `hospital-compare-search` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` feeds the clap `env = ...` fallbacks, so it is read before parsing.
    load_dotenv();
    let cli = Cli::parse();

    let config = search_config_from_args(&cli)?;
    let dispatch = build_dispatch(&log_config_from_args(&cli))?;

    let run = tracing::dispatcher::with_default(&dispatch, || {
        info!(started = %Local::now().to_rfc3339(), "Begin logging");
        log_arguments(&config);

        let result = pipeline::run_search(&config);
        if let Err(err) = &result {
            error!(exit_code = err.exit_code(), "{err}");
        }
        result
    })?;

    let stdout = std::io::stdout();
    write_results_json(stdout.lock(), &run.results)
}

fn log_arguments(config: &SearchConfig) {
    info!("verbose flag is set");
    info!(zip = %config.anchor.raw, "zip code is valid");
    info!("Number of Facilities being returned: {}", config.num_facilities);
    info!("Overall Rating being used: {:?}", config.rating_filter);
    info!("Distance unit: {}", config.unit.label());
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::{AnchorZip, DataPaths, DistanceUnit, RatingFilter};
    use crate::logging::LogConfig;

    #[test]
    fn arguments_are_logged_to_the_verbose_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let dispatch = build_dispatch(&LogConfig { enabled: true, path: path.clone() }).unwrap();
        let config = SearchConfig {
            anchor: AnchorZip {
                raw: "10001".to_string(),
                key: "10001".to_string(),
            },
            num_facilities: 2,
            rating_filter: RatingFilter::AtLeast(4.0),
            unit: DistanceUnit::Km,
            paths: DataPaths::in_dir(dir.path()),
        };

        tracing::dispatcher::with_default(&dispatch, || log_arguments(&config));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("verbose flag is set"));
        assert!(text.contains("zip code is valid"));
        assert!(text.contains("Number of Facilities being returned: 2"));
    }
}
