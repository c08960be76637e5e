//! CSV ingest for the three source tables.
//!
//! Each loader turns one delimited table into typed records:
//! - **Strict schema** for required columns (clear errors + exit code 3)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Opaque join keys**: identifiers and zip codes stay strings so leading
//!   zeros survive
//! - **Unique keys**: a repeated identifier / zip code keeps the first row and
//!   reports the rest as row errors

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::cli::{is_zip_code, zip_join_key};
use crate::domain::{Coordinate, HospitalRecord, SpendingRecord, ZipCentroid};
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub key: Option<String>,
    pub message: String,
}

/// Ingest output: parsed rows plus what was skipped.
#[derive(Debug, Clone)]
pub struct Table<T> {
    pub rows: Vec<T>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

impl<T> Table<T> {
    pub fn rows_used(&self) -> usize {
        self.rows.len()
    }
}

/// A logical column and the header spellings accepted for it.
struct Column {
    name: &'static str,
    aliases: &'static [&'static str],
}

const HOSPITAL_COLUMNS: &[Column] = &[
    Column { name: "identifier", aliases: &["provider id", "facility id", "provider_id", "facility_id"] },
    Column { name: "name", aliases: &["hospital name", "facility name", "hospital_name", "facility_name"] },
    Column { name: "address", aliases: &["address"] },
    Column { name: "city", aliases: &["city", "city/town"] },
    Column { name: "state", aliases: &["state"] },
    Column { name: "zip", aliases: &["zip code", "zip_code", "zip"] },
    Column { name: "rating", aliases: &["hospital overall rating", "hospital_overall_rating"] },
];

const SPENDING_COLUMNS: &[Column] = &[
    Column { name: "identifier", aliases: &["provider id", "facility id", "provider_id", "facility_id"] },
    Column { name: "score", aliases: &["score"] },
];

const CENTROID_COLUMNS: &[Column] = &[
    Column { name: "zip", aliases: &["zip_code", "zip code", "zip"] },
    Column { name: "lat", aliases: &["lat", "latitude"] },
    Column { name: "lng", aliases: &["lng", "lon", "long", "longitude"] },
];

/// Resolved logical column name -> field index.
type ColumnIndex = HashMap<&'static str, usize>;

pub fn load_hospitals(path: &Path) -> Result<Table<HospitalRecord>, AppError> {
    read_hospitals(open(path)?, &path.display().to_string())
}

pub fn load_spending(path: &Path) -> Result<Table<SpendingRecord>, AppError> {
    read_spending(open(path)?, &path.display().to_string())
}

pub fn load_centroids(path: &Path) -> Result<Table<ZipCentroid>, AppError> {
    read_centroids(open(path)?, &path.display().to_string())
}

pub fn read_hospitals<R: Read>(reader: R, source: &str) -> Result<Table<HospitalRecord>, AppError> {
    read_table(reader, source, HOSPITAL_COLUMNS, parse_hospital, |r: &HospitalRecord| {
        r.identifier.clone()
    })
}

pub fn read_spending<R: Read>(reader: R, source: &str) -> Result<Table<SpendingRecord>, AppError> {
    read_table(reader, source, SPENDING_COLUMNS, parse_spending, |r: &SpendingRecord| {
        r.identifier.clone()
    })
}

pub fn read_centroids<R: Read>(reader: R, source: &str) -> Result<Table<ZipCentroid>, AppError> {
    read_table(reader, source, CENTROID_COLUMNS, parse_centroid, |r: &ZipCentroid| r.zip.clone())
}

fn open(path: &Path) -> Result<File, AppError> {
    File::open(path).map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))
}

fn read_table<R, T, P, K>(
    reader: R,
    source: &str,
    columns: &[Column],
    parse: P,
    key_of: K,
) -> Result<Table<T>, AppError>
where
    R: Read,
    P: Fn(&StringRecord, &ColumnIndex) -> Result<T, String>,
    K: Fn(&T) -> String,
{
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers of '{source}': {e}")))?
        .clone();

    let index = resolve_columns(&headers, columns, source)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut seen = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, and lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    key: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse(&record, &index) {
            Ok(row) => {
                let key = key_of(&row);
                if seen.insert(key.clone()) {
                    rows.push(row);
                } else {
                    row_errors.push(RowError {
                        line,
                        key: Some(key),
                        message: "Duplicate key; keeping the first row.".to_string(),
                    });
                }
            }
            Err(message) => row_errors.push(RowError {
                line,
                key: None,
                message,
            }),
        }
    }

    Ok(Table {
        rows,
        row_errors,
        rows_read,
    })
}

fn resolve_columns(headers: &StringRecord, columns: &[Column], source: &str) -> Result<ColumnIndex, AppError> {
    let header_map = build_header_map(headers);
    let mut index = ColumnIndex::new();
    for column in columns {
        let found = column.aliases.iter().find_map(|alias| header_map.get(*alias).copied());
        match found {
            Some(i) => {
                index.insert(column.name, i);
            }
            None => {
                return Err(AppError::input(format!(
                    "Missing required column in '{source}': `{}`",
                    column.aliases[0]
                )));
            }
        }
    }
    Ok(index)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // First occurrence wins for repeated header names.
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    // CMS exports are often saved with a UTF-8 BOM on the first header.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_hospital(record: &StringRecord, index: &ColumnIndex) -> Result<HospitalRecord, String> {
    let identifier = get_required(record, index, "identifier")?.to_string();
    let zip = zip_join_key(get_required(record, index, "zip")?);

    Ok(HospitalRecord {
        identifier,
        name: get_text(record, index, "name"),
        address: get_text(record, index, "address"),
        city: get_text(record, index, "city"),
        state: get_text(record, index, "state"),
        zip,
        rating: parse_opt_f64(get_optional(record, index, "rating")),
    })
}

fn parse_spending(record: &StringRecord, index: &ColumnIndex) -> Result<SpendingRecord, String> {
    Ok(SpendingRecord {
        identifier: get_required(record, index, "identifier")?.to_string(),
        score: parse_opt_f64(get_optional(record, index, "score")),
    })
}

fn parse_centroid(record: &StringRecord, index: &ColumnIndex) -> Result<ZipCentroid, String> {
    // Centroids are looked up by validated anchors, so their keys must be zip codes too.
    let raw_zip = get_required(record, index, "zip")?;
    if !is_zip_code(raw_zip) {
        return Err(format!("Invalid `zip_code` value '{raw_zip}'."));
    }
    let zip = zip_join_key(raw_zip);
    let lat = parse_degrees(get_required(record, index, "lat")?, 90.0, "lat")?;
    let lng = parse_degrees(get_required(record, index, "lng")?, 180.0, "lng")?;

    Ok(ZipCentroid {
        zip,
        coordinate: Coordinate::new(lat, lng),
    })
}

fn get_required<'a>(record: &'a StringRecord, index: &ColumnIndex, name: &str) -> Result<&'a str, String> {
    get_optional(record, index, name).ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, index: &ColumnIndex, name: &str) -> Option<&'a str> {
    let idx = index.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn get_text(record: &StringRecord, index: &ColumnIndex, name: &str) -> String {
    get_optional(record, index, name).unwrap_or_default().to_string()
}

/// Parse a numeric cell. "Not Available" and other non-numeric text map to `None`.
fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let s = s?;
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

fn parse_degrees(s: &str, limit: f64, name: &str) -> Result<f64, String> {
    let v = parse_opt_f64(Some(s)).ok_or_else(|| format!("Invalid `{name}` value '{s}'."))?;
    if v.abs() > limit {
        return Err(format!("`{name}` value {v} is out of range."));
    }
    Ok(v)
}
