use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{GrowthDataset, GrowthRow};

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Indicator", "Year", "Growth Rate"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a data file could not be turned into a [`GrowthDataset`].
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("data file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("data file is empty: {}", .path.display())]
    Empty { path: PathBuf },

    #[error("data file {} is missing required columns: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("data file {} line {line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing CSV {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a growth dataset from a CSV file.
///
/// Expected layout: a header row containing at least `Indicator`, `Year` and
/// `Growth Rate` (any order, surrounding whitespace ignored, extra columns
/// skipped). A blank or `NaN` growth rate is kept as a missing value.
pub fn load_file(path: &Path) -> Result<GrowthDataset, DataLoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DataLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        DataLoadError::Malformed {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() as u64 + 1,
            reason: "text is not valid UTF-8".to_string(),
        }
    })?;

    parse_csv(&text, path)
}

/// Parse CSV text. `path` is only used to label errors.
pub fn parse_csv(text: &str, path: &Path) -> Result<GrowthDataset, DataLoadError> {
    if text.trim().is_empty() {
        return Err(DataLoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let csv_err = |source: csv::Error| DataLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_err)?.clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |reason: String| DataLoadError::Malformed {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let raw: RawRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(e.to_string()))?;

        if raw.indicator.is_empty() {
            return Err(malformed("empty Indicator".to_string()));
        }
        let year = parse_year(&raw.year).map_err(malformed)?;
        let growth_rate = parse_growth_rate(&raw.growth_rate).map_err(malformed)?;

        rows.push(GrowthRow {
            indicator: raw.indicator,
            year,
            growth_rate,
        });
    }

    Ok(GrowthDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Indicator")]
    indicator: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Growth Rate")]
    growth_rate: String,
}

/// Years are integers; `2020.0` (as written by some exporters) is accepted.
fn parse_year(s: &str) -> Result<i32, String> {
    if s.is_empty() {
        return Err("missing Year".to_string());
    }
    if let Ok(y) = s.parse::<i32>() {
        return Ok(y);
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => Ok(f as i32),
        _ => Err(format!("Year '{s}' is not an integer")),
    }
}

fn parse_growth_rate(s: &str) -> Result<Option<f64>, String> {
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_nan() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(format!("Growth Rate '{s}' is not a number")),
    }
}
