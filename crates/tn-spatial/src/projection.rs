//! Planar → latitude/longitude interpolation.
//!
//! This is a linear min-max normalization, not a geodetic projection: the
//! planar extent of the node table is stretched onto a caller-supplied
//! lat/lon box.
//!
//! ```text
//! alpha = (x - min_x) / (max_x - min_x)      lon = min_lon + alpha * (max_lon - min_lon)
//! beta  = (y - min_y) / (max_y - min_y)      lat = min_lat + beta  * (max_lat - min_lat)
//! ```
//!
//! The four extrema are found independently, so the node at `min_x` and the
//! node at `min_y` need not be the same node.  The corner values are usually
//! obtained by converting the extreme state-plane points by hand.

use std::fmt;

use log::debug;

use tn_core::{GeoNode, GeoPoint, NodeRecord, PlanarPoint};

use crate::{SpatialError, SpatialResult};

/// Planar axis, named in [`SpatialError::DegenerateProjection`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Destination lat/lon box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Extrema of a planar node table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlanarExtent {
    /// Scan `nodes` for the four coordinate extrema.
    pub fn scan(nodes: &[NodeRecord]) -> SpatialResult<Self> {
        let first = nodes.first().ok_or(SpatialError::EmptyNodeTable)?.pos;
        let mut e = PlanarExtent {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for n in &nodes[1..] {
            e.min_x = e.min_x.min(n.pos.x);
            e.max_x = e.max_x.max(n.pos.x);
            e.min_y = e.min_y.min(n.pos.y);
            e.max_y = e.max_y.max(n.pos.y);
        }
        Ok(e)
    }
}

/// Affine map from a planar extent onto a [`GeoBounds`] box.
#[derive(Copy, Clone, Debug)]
pub struct Projector {
    extent: PlanarExtent,
    bounds: GeoBounds,
}

impl Projector {
    /// Fails with [`SpatialError::DegenerateProjection`] if either axis has
    /// zero width.
    pub fn new(extent: PlanarExtent, bounds: GeoBounds) -> SpatialResult<Self> {
        if extent.max_x == extent.min_x {
            return Err(SpatialError::DegenerateProjection { axis: Axis::X, value: extent.min_x });
        }
        if extent.max_y == extent.min_y {
            return Err(SpatialError::DegenerateProjection { axis: Axis::Y, value: extent.min_y });
        }
        Ok(Self { extent, bounds })
    }

    pub fn project(&self, p: PlanarPoint) -> GeoPoint {
        let e = &self.extent;
        let b = &self.bounds;
        let alpha = (p.x - e.min_x) / (e.max_x - e.min_x);
        let beta = (p.y - e.min_y) / (e.max_y - e.min_y);
        GeoPoint {
            lat: b.min_lat + beta * (b.max_lat - b.min_lat),
            lon: b.min_lon + alpha * (b.max_lon - b.min_lon),
        }
    }
}

/// Project a whole planar node table, preserving row order and ids.
pub fn project_nodes(nodes: &[NodeRecord], bounds: GeoBounds) -> SpatialResult<Vec<GeoNode>> {
    let extent = PlanarExtent::scan(nodes)?;
    debug!("planar extent {extent:?}");
    let projector = Projector::new(extent, bounds)?;
    Ok(nodes
        .iter()
        .map(|n| GeoNode { id: n.id, pos: projector.project(n.pos) })
        .collect())
}
