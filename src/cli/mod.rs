//! Command-line parsing for the hospital compare search.
//!
//! The goal of this module is to keep **argument parsing** and **input validation**
//! separate from the table loading and ranking code.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::DistanceUnit;

pub mod validate;

pub use validate::*;

/// Top-level CLI.
///
/// Long flags keep the underscore spelling (`--zip_code`) and also accept the
/// hyphenated form (`--zip-code`).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hospital-compare-search",
    version,
    about = "Rank Hospital Compare facilities by quality rating and distance from a zip code"
)]
pub struct Cli {
    /// Five digit zip code (optionally ZIP+4) that geographically anchors the search.
    #[arg(short = 'z', long = "zip_code", visible_alias = "zip-code", value_name = "ZIP")]
    pub zip_code: String,

    /// Maximum number of facilities returned by the search.
    #[arg(
        short = 'n',
        long = "num_facilities",
        visible_alias = "num-facilities",
        default_value_t = 20
    )]
    pub num_facilities: usize,

    /// Minimum allowable overall quality rating (default: no restriction).
    #[arg(
        short = 'm',
        long = "min_overall_rating",
        visible_alias = "min-overall-rating",
        allow_negative_numbers = true
    )]
    pub min_overall_rating: Option<f64>,

    /// Write a timestamped log of the run to the log file.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Unit for the reported distance.
    #[arg(long, value_enum, default_value_t = DistanceUnit::Km)]
    pub units: DistanceUnit,

    /// Directory holding the three input CSV tables.
    #[arg(
        long = "input-dir",
        env = "HOSPITAL_COMPARE_INPUT_DIR",
        default_value = crate::config::DEFAULT_INPUT_DIR
    )]
    pub input_dir: PathBuf,

    /// Log file written when `--verbose` is set.
    #[arg(
        long = "log-file",
        env = "HOSPITAL_COMPARE_LOG_FILE",
        default_value = crate::config::DEFAULT_LOG_FILE
    )]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_underscore_flags_with_defaults() {
        let cli = Cli::try_parse_from(["hospital-compare-search", "--zip_code", "10001"]).unwrap();
        assert_eq!(cli.zip_code, "10001");
        assert_eq!(cli.num_facilities, 20);
        assert_eq!(cli.min_overall_rating, None);
        assert!(!cli.verbose);
        assert_eq!(cli.units, DistanceUnit::Km);
    }

    #[test]
    fn parses_short_and_hyphenated_flags() {
        let cli = Cli::try_parse_from([
            "hospital-compare-search",
            "-z",
            "02138",
            "--num-facilities",
            "2",
            "-m",
            "4",
            "-v",
            "--units",
            "mi",
        ])
        .unwrap();
        assert_eq!(cli.zip_code, "02138");
        assert_eq!(cli.num_facilities, 2);
        assert_eq!(cli.min_overall_rating, Some(4.0));
        assert!(cli.verbose);
        assert_eq!(cli.units, DistanceUnit::Mi);
    }

    #[test]
    fn accepts_negative_min_rating() {
        let cli = Cli::try_parse_from(["hospital-compare-search", "-z", "10001", "-m", "-1"]).unwrap();
        assert_eq!(cli.min_overall_rating, Some(-1.0));
    }

    #[test]
    fn zip_code_is_required() {
        assert!(Cli::try_parse_from(["hospital-compare-search"]).is_err());
    }
}
