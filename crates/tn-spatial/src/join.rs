//! Joins of link and demand tables against a projected node table.
//!
//! # Strategies
//!
//! - **Ordered**: endpoint `n` resolves to row `n - 1`, O(1) per link.  The
//!   node table must be dense (`1..=N` in row order); this is checked once
//!   before the join and reported as [`SpatialError::NotDense`].
//! - **Scanning**: endpoint resolves by linear scan, O(links × nodes).
//!   Correct for any node order; fine for benchmark-sized networks.
//! - **Auto**: ordered when the table is dense, scanning otherwise.
//!
//! On a dense table both strategies produce identical coordinates.

use log::debug;

use tn_core::{DemandRow, GeoPoint, LinkRecord, NodeId};

use crate::{NodeTable, SpatialError, SpatialResult};

/// How link endpoints are resolved against the node table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum JoinStrategy {
    Ordered,
    Scanning,
    #[default]
    Auto,
}

/// A link's endpoint coordinates plus its per-link attribute row.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinedLinkFeature {
    pub from:       GeoPoint,
    pub to:         GeoPoint,
    pub attributes: Vec<f64>,
}

/// An OD pair's endpoint coordinates and demand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JoinedDemand {
    pub from:   GeoPoint,
    pub to:     GeoPoint,
    pub demand: f64,
}

impl From<JoinedDemand> for JoinedLinkFeature {
    /// A desire line: the demand becomes the single attribute.
    fn from(d: JoinedDemand) -> Self {
        Self { from: d.from, to: d.to, attributes: vec![d.demand] }
    }
}

/// Join `links` with `nodes`, attaching `attributes[i]` to link `i`.
///
/// `attributes` must have one row per link, in link order.
pub fn join_links<A: AsRef<[f64]>>(
    links:      &[LinkRecord],
    nodes:      &NodeTable,
    attributes: &[A],
    strategy:   JoinStrategy,
) -> SpatialResult<Vec<JoinedLinkFeature>> {
    if attributes.len() != links.len() {
        return Err(SpatialError::AttributeMismatch {
            expected: links.len(),
            got:      attributes.len(),
        });
    }

    let ordered = match strategy {
        JoinStrategy::Ordered => {
            nodes.check_dense()?;
            true
        }
        JoinStrategy::Scanning => false,
        JoinStrategy::Auto => nodes.is_dense(),
    };
    debug!(
        "joining {} links against {} nodes ({})",
        links.len(),
        nodes.len(),
        if ordered { "ordered" } else { "scanning" }
    );

    links
        .iter()
        .zip(attributes)
        .enumerate()
        .map(|(row, (link, attrs))| {
            Ok(JoinedLinkFeature {
                from:       resolve(nodes, link.tail, row, ordered)?,
                to:         resolve(nodes, link.head, row, ordered)?,
                attributes: attrs.as_ref().to_vec(),
            })
        })
        .collect()
}

/// Join dense demand rows with `nodes` using the ordered strategy.
pub fn join_demand(nodes: &NodeTable, rows: &[DemandRow]) -> SpatialResult<Vec<JoinedDemand>> {
    nodes.check_dense()?;
    rows.iter()
        .enumerate()
        .map(|(row, r)| {
            Ok(JoinedDemand {
                from:   resolve(nodes, r.origin.into(), row, true)?,
                to:     resolve(nodes, r.destination.into(), row, true)?,
                demand: r.demand,
            })
        })
        .collect()
}

fn resolve(nodes: &NodeTable, id: NodeId, row: usize, ordered: bool) -> SpatialResult<GeoPoint> {
    let found = if ordered { nodes.by_ordinal(id) } else { nodes.find(id) };
    found.ok_or(SpatialError::Join { row, node: id })
}
