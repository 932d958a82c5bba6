//! Canonical CSV writers.
//!
//! | Artifact        | Header                      | Row                               |
//! |-----------------|-----------------------------|-----------------------------------|
//! | link table      | `LINK,A,B,a0,a1,a2,a3,a4`   | `id,tail,head,a0,0,0,0,a4`        |
//! | OD table        | `O,D,Ton`                   | `origin,destination,demand`       |
//! | node table      | `node,lat,lon`              | `id,lat,lon`                      |
//! | numeric table   | none                        | one row per input row             |
//!
//! Ids are written as integers, everything else through [`format::float`].

use std::path::Path;

use csv::Writer;
use log::debug;

use tn_core::{DemandMap, GeoNode, LinkRecord};

use crate::format::float;
use crate::{write_artifact, OutputResult};

pub const LINK_HEADER: [&str; 8] = ["LINK", "A", "B", "a0", "a1", "a2", "a3", "a4"];
pub const OD_HEADER: [&str; 3] = ["O", "D", "Ton"];
pub const NODE_HEADER: [&str; 3] = ["node", "lat", "lon"];

/// `a1..a3` are always zero and written as a bare integer.
const UNUSED_TERM: &str = "0";

// ── Rendering ─────────────────────────────────────────────────────────────────

pub fn render_links_csv(links: &[LinkRecord]) -> OutputResult<Vec<u8>> {
    let mut w = Writer::from_writer(Vec::new());
    w.write_record(LINK_HEADER)?;
    for link in links {
        let [a0, _, _, _, a4] = link.coefficients();
        w.write_record(&[
            link.id.0.to_string(),
            link.tail.0.to_string(),
            link.head.0.to_string(),
            float(a0),
            UNUSED_TERM.to_owned(),
            UNUSED_TERM.to_owned(),
            UNUSED_TERM.to_owned(),
            float(a4),
        ])?;
    }
    debug!("rendered {} link rows", links.len());
    finish(w)
}

pub fn render_od_csv(demand: &DemandMap) -> OutputResult<Vec<u8>> {
    let mut w = Writer::from_writer(Vec::new());
    w.write_record(OD_HEADER)?;
    for e in demand.entries() {
        w.write_record(&[e.origin.0.to_string(), e.destination.0.to_string(), float(e.demand)])?;
    }
    debug!("rendered {} OD rows", demand.pair_count());
    finish(w)
}

pub fn render_geo_nodes_csv(nodes: &[GeoNode]) -> OutputResult<Vec<u8>> {
    let mut w = Writer::from_writer(Vec::new());
    w.write_record(NODE_HEADER)?;
    for n in nodes {
        w.write_record(&[n.id.0.to_string(), float(n.pos.lat), float(n.pos.lon)])?;
    }
    finish(w)
}

/// Headerless table; every row must have the same width.
pub fn render_matrix_csv<R: AsRef<[f64]>>(rows: &[R]) -> OutputResult<Vec<u8>> {
    let mut w = Writer::from_writer(Vec::new());
    for row in rows {
        w.write_record(row.as_ref().iter().map(|&v| float(v)))?;
    }
    finish(w)
}

fn finish(w: Writer<Vec<u8>>) -> OutputResult<Vec<u8>> {
    Ok(w.into_inner().map_err(|e| e.into_error())?)
}

// ── File writers ──────────────────────────────────────────────────────────────

pub fn write_links_csv(path: &Path, links: &[LinkRecord]) -> OutputResult<()> {
    write_artifact(path, render_links_csv(links)?)
}

pub fn write_od_csv(path: &Path, demand: &DemandMap) -> OutputResult<()> {
    write_artifact(path, render_od_csv(demand)?)
}

pub fn write_geo_nodes_csv(path: &Path, nodes: &[GeoNode]) -> OutputResult<()> {
    write_artifact(path, render_geo_nodes_csv(nodes)?)
}

pub fn write_matrix_csv<R: AsRef<[f64]>>(path: &Path, rows: &[R]) -> OutputResult<()> {
    write_artifact(path, render_matrix_csv(rows)?)
}
