//! Input validation.
//!
//! Everything here runs before any file is opened: a bad zip code must end the
//! process without touching the input tables or the log file.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{AnchorZip, RatingFilter};
use crate::error::AppError;

// ASCII digits only; the `[..5]` prefix slices rely on one byte per digit.
static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:[-\s][0-9]{4})?$").expect("zip code pattern is valid"));

/// Accept a 5-digit zip code, optionally followed by a `-` or space and 4 digits.
///
/// The input is matched as given; surrounding whitespace is rejected.
pub fn validate_zip_code(input: &str) -> Result<AnchorZip, AppError> {
    if !is_zip_code(input) {
        return Err(AppError::usage(format!(
            "Zip code must be five digits (optionally ZIP+4), got '{input}'."
        )));
    }
    Ok(AnchorZip {
        raw: input.to_string(),
        key: input[..5].to_string(),
    })
}

pub fn validate_num_facilities(n: usize) -> Result<usize, AppError> {
    if n == 0 {
        return Err(AppError::usage("`--num_facilities` must be a positive integer."));
    }
    Ok(n)
}

pub fn validate_min_rating(min: Option<f64>) -> Result<RatingFilter, AppError> {
    match min {
        Some(v) if !v.is_finite() => Err(AppError::usage(format!(
            "`--min_overall_rating` must be a finite number, got {v}."
        ))),
        other => Ok(RatingFilter::from_option(other)),
    }
}

/// Whether `s` is a 5-digit or ZIP+4 code, exactly.
pub fn is_zip_code(s: &str) -> bool {
    ZIP_CODE.is_match(s)
}

/// Normalize a zip code read from a data table into a join key.
///
/// ZIP+4 values collapse to their 5-digit prefix; anything else is kept as an
/// opaque trimmed string so leading zeros survive.
pub fn zip_join_key(zip: &str) -> String {
    let zip = zip.trim();
    if is_zip_code(zip) {
        zip[..5].to_string()
    } else {
        zip.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_digit_and_plus_four() {
        let z = validate_zip_code("10001").unwrap();
        assert_eq!(z.key, "10001");

        let z = validate_zip_code("02138-1234").unwrap();
        assert_eq!(z.raw, "02138-1234");
        assert_eq!(z.key, "02138");

        let z = validate_zip_code("02138 1234").unwrap();
        assert_eq!(z.key, "02138");
    }

    #[test]
    fn rejects_malformed_zip_codes() {
        for bad in ["abc12", "1234", "123456", "12345-12", "", "12345-abcd", " 10001", "10001 "] {
            let err = validate_zip_code(bad).unwrap_err();
            assert_eq!(err.exit_code(), AppError::EXIT_USAGE, "input {bad:?}");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        let err = validate_zip_code("١٢٣٤٥").unwrap_err();
        assert_eq!(err.exit_code(), AppError::EXIT_USAGE);
        assert!(validate_zip_code("10001-١٢٣٤").is_err());
        assert!(!is_zip_code("１０００１"));
    }

    #[test]
    fn num_facilities_must_be_positive() {
        assert_eq!(validate_num_facilities(20).unwrap(), 20);
        assert_eq!(validate_num_facilities(0).unwrap_err().exit_code(), AppError::EXIT_USAGE);
    }

    #[test]
    fn min_rating_maps_to_filter() {
        assert_eq!(validate_min_rating(None).unwrap(), RatingFilter::Unrestricted);
        assert_eq!(validate_min_rating(Some(4.0)).unwrap(), RatingFilter::AtLeast(4.0));
        assert!(validate_min_rating(Some(f64::NAN)).is_err());
    }

    #[test]
    fn join_key_keeps_leading_zeros() {
        assert_eq!(zip_join_key(" 02138 "), "02138");
        assert_eq!(zip_join_key("02138-0001"), "02138");
        assert_eq!(zip_join_key("2138"), "2138");
        assert_eq!(zip_join_key("١٢٣٤٥"), "١٢٣٤٥");
    }
}
