//! Re-reading the canonical CSV tables written by `tn-output`.
//!
//! | Function       | Input                                     | Output            |
//! |----------------|-------------------------------------------|-------------------|
//! | `read_od_csv`  | `O,D,Ton` table                           | `Vec<DemandRow>`  |
//! | `read_matrix`  | any comma-separated numeric table         | `Vec<Vec<f64>>`   |

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;
use serde::Deserialize;

use tn_core::DemandRow;

use crate::{ReadError, ReadResult};

// ── CSV record ────────────────────────────────────────────────────────────────

/// Ids are read as floats: tables produced by array tools write `1.0`.
#[derive(Deserialize)]
struct OdRecord {
    #[serde(rename = "O")]
    origin:      f64,
    #[serde(rename = "D")]
    destination: f64,
    #[serde(rename = "Ton")]
    demand:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a canonical `O,D,Ton` table as dense demand rows, in file order.
pub fn read_od_csv(path: &Path) -> ReadResult<Vec<DemandRow>> {
    let rows = read_od_csv_reader(File::open(path)?)?;
    info!("read {} OD rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Like [`read_od_csv`] but accepts any `Read` source.
pub fn read_od_csv_reader<R: Read>(reader: R) -> ReadResult<Vec<DemandRow>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize::<OdRecord>() {
        let r = result?;
        rows.push(DemandRow::from_array([r.origin, r.destination, r.demand])?);
    }
    Ok(rows)
}

/// Load a comma-separated numeric table, skipping the first row when
/// `has_header` is set.  Every row must have the same width.
pub fn read_matrix(path: &Path, has_header: bool) -> ReadResult<Vec<Vec<f64>>> {
    let rows = read_matrix_reader(File::open(path)?, has_header)?;
    info!("read {} numeric rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Like [`read_matrix`] but accepts any `Read` source.
pub fn read_matrix_reader<R: Read>(reader: R, has_header: bool) -> ReadResult<Vec<Vec<f64>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let row = record
            .iter()
            .map(|f| {
                f.parse::<f64>()
                    .map_err(|_| ReadError::format(line, format!("{f:?} is not a number")))
            })
            .collect::<ReadResult<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}
