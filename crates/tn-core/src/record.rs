//! Typed rows produced by the dialect readers.

use crate::{id_from_f64, GeoPoint, LinkId, NodeId, PlanarPoint, TnResult, ZoneId};

/// Link capacities are expressed relative to this flow when building the
/// quartic congestion term.
pub const CAPACITY_SCALE: f64 = 4000.0;

// ── Links ─────────────────────────────────────────────────────────────────────

/// One directed link of a net file.
///
/// Only the columns the cost polynomial and the feature table need are kept.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkRecord {
    /// 0-based position among the file's data rows.
    pub id:             LinkId,
    pub tail:           NodeId,
    pub head:           NodeId,
    pub capacity:       f64,
    pub length:         f64,
    pub free_flow_time: f64,
    /// BPR `B` parameter.
    pub b:              f64,
}

impl LinkRecord {
    /// Quartic congestion coefficient `free_flow_time * B / (capacity/4000)^4`.
    ///
    /// A zero capacity yields `inf`, matching what the solver would compute.
    pub fn bpr_coefficient(&self) -> f64 {
        self.free_flow_time * self.b / (self.capacity / CAPACITY_SCALE).powi(4)
    }

    /// Cost polynomial `[a0, a1, a2, a3, a4]`: `a0` is the free-flow time,
    /// `a4` the BPR coefficient, the middle terms are unused.
    pub fn coefficients(&self) -> [f64; 5] {
        [self.free_flow_time, 0.0, 0.0, 0.0, self.bpr_coefficient()]
    }

    /// `[capacity, length, free_flow_time]` feature row.
    pub fn attributes(&self) -> [f64; 3] {
        [self.capacity, self.length, self.free_flow_time]
    }
}

// ── Nodes ─────────────────────────────────────────────────────────────────────

/// A node in source planar coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    pub id:  NodeId,
    pub pos: PlanarPoint,
}

impl NodeRecord {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, pos: PlanarPoint::new(x, y) }
    }
}

/// A node in latitude/longitude.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoNode {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

impl GeoNode {
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self { id, pos: GeoPoint::new(lat, lon) }
    }
}

// ── Demand ────────────────────────────────────────────────────────────────────

/// One `destination : demand;` triplet of a trips file, tagged with the
/// origin block it appeared in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripEntry {
    pub origin:      ZoneId,
    pub destination: ZoneId,
    pub demand:      f64,
}

/// One row of a dense `[origin, destination, demand]` array.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandRow {
    pub origin:      ZoneId,
    pub destination: ZoneId,
    pub demand:      f64,
}

impl DemandRow {
    pub fn new(origin: u32, destination: u32, demand: f64) -> Self {
        Self { origin: ZoneId(origin), destination: ZoneId(destination), demand }
    }

    /// Build from a numeric array row, validating that both ids are integral.
    pub fn from_array(row: [f64; 3]) -> TnResult<Self> {
        Ok(Self {
            origin:      ZoneId(id_from_f64(row[0])?),
            destination: ZoneId(id_from_f64(row[1])?),
            demand:      row[2],
        })
    }
}

impl From<TripEntry> for DemandRow {
    fn from(e: TripEntry) -> Self {
        Self { origin: e.origin, destination: e.destination, demand: e.demand }
    }
}
