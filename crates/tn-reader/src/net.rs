//! Net (link) dialect reader.
//!
//! # Format
//!
//! ```text
//! <NUMBER OF ZONES> 24
//! <NUMBER OF NODES> 24
//! <FIRST THRU NODE> 1
//! <NUMBER OF LINKS> 76
//! <END OF METADATA>
//!
//! ~  Init node  Term node  Capacity  Length  Free Flow Time  B     Power  Speed limit  Toll  Type  ;
//!     1          2          25900.2   6       6               0.15  4      0            0     1     ;
//! ```
//!
//! Everything above the `~` sentinel is header.  Each data row ends with a
//! terminator token that is dropped; the remaining columns are positional.
//! Only the first six are required.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use tn_core::{parse_id, LinkId, LinkRecord, Metadata, NodeId};

use crate::{ReadError, ReadResult};

/// First token of the line separating the header from the link rows.
pub const SENTINEL: &str = "~";

const TAIL:           usize = 0;
const HEAD:           usize = 1;
const CAPACITY:       usize = 2;
const LENGTH:         usize = 3;
const FREE_FLOW_TIME: usize = 4;
const B:              usize = 5;
const REQUIRED:       usize = 6;

/// A decoded net file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetFile {
    pub metadata: Metadata,
    /// Links in file order; `links[i].id == LinkId(i)`.
    pub links:    Vec<LinkRecord>,
}

impl NetFile {
    /// One `[capacity, length, free_flow_time]` row per link, in link order.
    pub fn feature_table(&self) -> Vec<Vec<f64>> {
        self.links.iter().map(|l| l.attributes().to_vec()).collect()
    }
}

/// Read a net file from disk.
pub fn read_net(path: &Path) -> ReadResult<NetFile> {
    let file = File::open(path)?;
    let net = read_net_reader(file)?;
    info!("read {} links from {}", net.links.len(), path.display());
    Ok(net)
}

/// Like [`read_net`] but accepts any `Read` source.
pub fn read_net_reader<R: Read>(reader: R) -> ReadResult<NetFile> {
    let mut metadata = Metadata::new();
    let mut links: Vec<LinkRecord> = Vec::new();
    let mut in_links = false;

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if !in_links {
            if tokens[0] == SENTINEL {
                debug!("link section starts after line {line_no}");
                in_links = true;
            } else {
                metadata.absorb_line(&line);
            }
            continue;
        }

        // Trailing terminator (usually `;`).
        tokens.pop();

        let id = LinkId::try_from(links.len())
            .map_err(|_| ReadError::format(line_no, "link count exceeds u32 range"))?;
        links.push(parse_link(id, &tokens, line_no)?);
    }

    if !in_links {
        return Err(ReadError::MissingSentinel);
    }

    if let Some(expected) = metadata.number_of_links() {
        if expected as usize != links.len() {
            debug!("header declares {expected} links, file holds {}", links.len());
        }
    }

    Ok(NetFile { metadata, links })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_link(id: LinkId, tokens: &[&str], line: usize) -> ReadResult<LinkRecord> {
    if tokens.len() < REQUIRED {
        return Err(ReadError::format(
            line,
            format!(
                "expected at least {REQUIRED} link fields before the terminator, found {}",
                tokens.len()
            ),
        ));
    }

    Ok(LinkRecord {
        id,
        tail:           node_field(tokens, TAIL, "init node", line)?,
        head:           node_field(tokens, HEAD, "term node", line)?,
        capacity:       float_field(tokens, CAPACITY, "capacity", line)?,
        length:         float_field(tokens, LENGTH, "length", line)?,
        free_flow_time: float_field(tokens, FREE_FLOW_TIME, "free flow time", line)?,
        b:              float_field(tokens, B, "B", line)?,
    })
}

fn node_field(tokens: &[&str], idx: usize, name: &str, line: usize) -> ReadResult<NodeId> {
    parse_id(tokens[idx])
        .map(NodeId)
        .map_err(|_| ReadError::format(line, format!("{name} {:?} is not a node id", tokens[idx])))
}

fn float_field(tokens: &[&str], idx: usize, name: &str, line: usize) -> ReadResult<f64> {
    tokens[idx]
        .parse::<f64>()
        .map_err(|_| ReadError::format(line, format!("{name} {:?} is not a number", tokens[idx])))
}
