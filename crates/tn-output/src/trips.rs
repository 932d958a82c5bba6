//! Inverse conversion: demand rows back to the trips dialect.
//!
//! Layout produced for zones `1..=max origin`:
//!
//! ```text
//! <NUMBER OF ZONES> 2
//! <TOTAL OD FLOW> 15.0
//! <END OF METADATA>
//!
//!
//! Origin         1
//!     2 :       5.00;
//! Origin         2
//!     1 :      10.00;
//! ```
//!
//! Five entries per line.  Zones with no rows still get an `Origin` header.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use tn_core::DemandRow;

use crate::format::{digits, float, spaces};
use crate::{write_artifact, OutputError, OutputResult};

const ENTRIES_PER_LINE: usize = 5;

pub fn render_trips(rows: &[DemandRow]) -> OutputResult<String> {
    let zones = rows
        .iter()
        .map(|r| r.origin.0)
        .max()
        .ok_or(OutputError::Empty("demand rows"))?;

    // Zones start at 1; origin 0 has no section and stays out of the total.
    let mut by_origin: BTreeMap<u32, Vec<&DemandRow>> = BTreeMap::new();
    for r in rows {
        by_origin.entry(r.origin.0).or_default().push(r);
    }
    if let Some(stray) = by_origin.remove(&0) {
        warn!("dropping {} demand rows with origin 0", stray.len());
    }
    let total: f64 = by_origin.values().flatten().map(|r| r.demand).sum();

    let mut out = String::new();
    out.push_str(&format!("<NUMBER OF ZONES> {zones}\n"));
    out.push_str(&format!("<TOTAL OD FLOW> {}\n", float(total)));
    out.push_str("<END OF METADATA>\n\n\n");

    for zone in 1..=zones {
        out.push_str("Origin");
        out.push_str(&spaces(10, zone.to_string().len()));
        out.push_str(&format!("{zone}\n"));

        let entries = by_origin.get(&zone).map(Vec::as_slice).unwrap_or_default();
        for (k, r) in entries.iter().enumerate() {
            out.push_str(&format!("{:>5} :", r.destination.0));
            // At least one space, or a wide demand fuses with the `:` token.
            out.push_str(&spaces(8, digits(r.demand).min(7)));
            out.push_str(&format!("{:.2}; ", r.demand));
            if (k + 1) % ENTRIES_PER_LINE == 0 {
                out.push('\n');
            }
        }
        out.push('\n');
    }

    debug!("rendered {} demand rows across {zones} zones", rows.len());
    Ok(out)
}

pub fn write_trips(path: &Path, rows: &[DemandRow]) -> OutputResult<()> {
    write_artifact(path, render_trips(rows)?)
}
