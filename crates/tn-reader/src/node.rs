//! Node table reader.
//!
//! Two layouts are accepted, told apart by the header row:
//!
//! ```text
//! Node,X,Y                 node   X        Y       ;
//! 1,-96.77,43.61           1      -96.77   43.61   ;
//! ```
//!
//! The comma form is what the projected-node writer emits (`node,lat,lon`);
//! the whitespace form is the raw benchmark file, whose rows may end in a
//! `;` terminator.  In both, the first three columns are `id, a, b`.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{debug, info};

use tn_core::{parse_id, GeoNode, NodeId, NodeRecord};

use crate::{ReadError, ReadResult};

/// A decoded `[id, a, b]` row.
type NodeRow = (NodeId, f64, f64);

/// Read a planar `[id, x, y]` node table.
pub fn read_nodes(path: &Path) -> ReadResult<Vec<NodeRecord>> {
    let nodes = read_nodes_reader(File::open(path)?)?;
    info!("read {} nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Like [`read_nodes`] but accepts any `Read` source.
pub fn read_nodes_reader<R: Read>(reader: R) -> ReadResult<Vec<NodeRecord>> {
    Ok(read_rows(reader)?
        .into_iter()
        .map(|(id, x, y)| NodeRecord::new(id, x, y))
        .collect())
}

/// Read a projected `[id, lat, lon]` node table.
pub fn read_geo_nodes(path: &Path) -> ReadResult<Vec<GeoNode>> {
    let nodes = read_geo_nodes_reader(File::open(path)?)?;
    info!("read {} geo nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Like [`read_geo_nodes`] but accepts any `Read` source.
pub fn read_geo_nodes_reader<R: Read>(reader: R) -> ReadResult<Vec<GeoNode>> {
    Ok(read_rows(reader)?
        .into_iter()
        .map(|(id, lat, lon)| GeoNode::new(id, lat, lon))
        .collect())
}

// ── Shared row decoding ───────────────────────────────────────────────────────

fn read_rows<R: Read>(mut reader: R) -> ReadResult<Vec<NodeRow>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let Some(header) = text.lines().find(|l| !l.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let rows = if header.contains(',') {
        debug!("node table is comma-delimited");
        comma_rows(&text)?
    } else {
        debug!("node table is whitespace-delimited");
        whitespace_rows(&text)?
    };

    let mut seen = HashSet::with_capacity(rows.len());
    for &(line, (id, _, _)) in &rows {
        if !seen.insert(id) {
            return Err(ReadError::format(line, format!("duplicate node id {}", id.0)));
        }
    }

    Ok(rows.into_iter().map(|(_, row)| row).collect())
}

fn comma_rows(text: &str) -> ReadResult<Vec<(usize, NodeRow)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        rows.push((line, parse_row(&fields, line)?));
    }
    Ok(rows)
}

fn whitespace_rows(text: &str) -> ReadResult<Vec<(usize, NodeRow)>> {
    let mut rows = Vec::new();
    // First non-blank line is the header.
    let mut header_seen = false;
    for (i, raw) in text.lines().enumerate() {
        let fields: Vec<&str> = raw.split_whitespace().filter(|f| *f != ";").collect();
        if fields.is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }
        let line = i + 1;
        rows.push((line, parse_row(&fields, line)?));
    }
    Ok(rows)
}

fn parse_row(fields: &[&str], line: usize) -> ReadResult<NodeRow> {
    if fields.len() < 3 {
        return Err(ReadError::format(
            line,
            format!("expected 3 node columns, found {}", fields.len()),
        ));
    }
    let id = parse_id(fields[0])
        .map_err(|_| ReadError::format(line, format!("node id {:?} is not an integer", fields[0])))?;
    let coord = |i: usize| -> ReadResult<f64> {
        fields[i]
            .trim_end_matches(';')
            .parse::<f64>()
            .map_err(|_| ReadError::format(line, format!("coordinate {:?} is not a number", fields[i])))
    };
    Ok((NodeId(id), coord(1)?, coord(2)?))
}
