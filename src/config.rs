//! Run configuration: input table locations and log settings.
//!
//! Defaults are relative to the working directory. `HOSPITAL_COMPARE_INPUT_DIR`
//! and `HOSPITAL_COMPARE_LOG_FILE` (from the environment or a `.env` file)
//! override them, and explicit CLI flags win over both.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, validate_min_rating, validate_num_facilities, validate_zip_code};
use crate::domain::{DataPaths, SearchConfig};
use crate::error::AppError;
use crate::logging::LogConfig;

pub const DEFAULT_INPUT_DIR: &str = "./inputs";
pub const DEFAULT_LOG_FILE: &str = "./logs/hospital_compare_search.log";

pub const HOSPITALS_FILE: &str = "Hospital_General_Information.csv";
pub const SPENDING_FILE: &str = "Medicare_Hospital Spending_per_Patient_Hospital.csv";
pub const CENTROIDS_FILE: &str = "zipcodecentroids.csv";

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            hospitals: dir.join(HOSPITALS_FILE),
            spending: dir.join(SPENDING_FILE),
            centroids: dir.join(CENTROIDS_FILE),
        }
    }
}

/// Load `.env` if present. Missing files are fine.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Validate parsed arguments into a `SearchConfig`.
///
/// Performs no I/O.
pub fn search_config_from_args(cli: &Cli) -> Result<SearchConfig, AppError> {
    let anchor = validate_zip_code(&cli.zip_code)?;
    let num_facilities = validate_num_facilities(cli.num_facilities)?;
    let rating_filter = validate_min_rating(cli.min_overall_rating)?;

    Ok(SearchConfig {
        anchor,
        num_facilities,
        rating_filter,
        unit: cli.units,
        paths: DataPaths::in_dir(&cli.input_dir),
    })
}

pub fn log_config_from_args(cli: &Cli) -> LogConfig {
    LogConfig {
        enabled: cli.verbose,
        path: PathBuf::from(&cli.log_file),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::domain::{DistanceUnit, RatingFilter};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["hospital-compare-search"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn builds_search_config() {
        let cli = parse(&["-z", "10001", "-n", "2", "-m", "4", "--input-dir", "data"]);
        let config = search_config_from_args(&cli).unwrap();
        assert_eq!(config.anchor.key, "10001");
        assert_eq!(config.num_facilities, 2);
        assert_eq!(config.rating_filter, RatingFilter::AtLeast(4.0));
        assert_eq!(config.unit, DistanceUnit::Km);
        assert_eq!(config.paths.centroids, Path::new("data").join(CENTROIDS_FILE));
        assert_eq!(config.paths.hospitals, Path::new("data").join(HOSPITALS_FILE));
    }

    #[test]
    fn rejects_bad_zip_before_io() {
        let cli = parse(&["-z", "abc12", "--input-dir", "/definitely/not/here"]);
        let err = search_config_from_args(&cli).unwrap_err();
        assert_eq!(err.exit_code(), AppError::EXIT_USAGE);
    }

    #[test]
    fn rejects_zero_facilities() {
        let cli = parse(&["-z", "10001", "-n", "0"]);
        assert!(search_config_from_args(&cli).is_err());
    }

    #[test]
    fn log_config_follows_verbose_flag() {
        let cli = parse(&["-z", "10001", "-v", "--log-file", "out/run.log"]);
        let log = log_config_from_args(&cli);
        assert!(log.enabled);
        assert_eq!(log.path, PathBuf::from("out/run.log"));
    }
}
