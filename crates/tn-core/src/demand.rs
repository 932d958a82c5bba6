//! Sparse origin-destination demand table.
//!
//! # Layout
//!
//! ```text
//! origin ─► [(destination, demand), (destination, demand), …]
//! ```
//!
//! Origins iterate in ascending order (`BTreeMap`); destinations keep the
//! order they were pushed in.  Each origin row is a single sequence of
//! pairs, so a destination can never be recorded without its demand.

use std::collections::BTreeMap;

use crate::{DemandRow, TripEntry, ZoneId};

/// Origin-keyed sparse demand matrix.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandMap {
    rows: BTreeMap<ZoneId, Vec<(ZoneId, f64)>>,
}

impl DemandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stream of trips-file entries.
    pub fn from_entries<I: IntoIterator<Item = TripEntry>>(entries: I) -> Self {
        let mut map = Self::new();
        for e in entries {
            map.push(e.origin, e.destination, e.demand);
        }
        map
    }

    /// Build from the rows of a dense `[origin, destination, demand]` array.
    pub fn from_rows(rows: &[DemandRow]) -> Self {
        let mut map = Self::new();
        for r in rows {
            map.push(r.origin, r.destination, r.demand);
        }
        map
    }

    /// Register `origin` with an empty row if it is not present yet.
    ///
    /// Returns `true` if the origin was newly added.
    pub fn ensure_origin(&mut self, origin: ZoneId) -> bool {
        let mut added = false;
        self.rows.entry(origin).or_insert_with(|| {
            added = true;
            Vec::new()
        });
        added
    }

    /// Append one `(destination, demand)` pair to `origin`'s row.
    pub fn push(&mut self, origin: ZoneId, destination: ZoneId, demand: f64) {
        self.rows.entry(origin).or_default().push((destination, demand));
    }

    /// Destinations and demands of `origin`, in insertion order.
    pub fn destinations(&self, origin: ZoneId) -> &[(ZoneId, f64)] {
        self.rows.get(&origin).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_origin(&self, origin: ZoneId) -> bool {
        self.rows.contains_key(&origin)
    }

    /// Origins in ascending order, including those with no destinations.
    pub fn origins(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.rows.keys().copied()
    }

    pub fn origin_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of `(origin, destination)` pairs across all origins.
    pub fn pair_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the demand leaving `origin`.
    pub fn origin_total(&self, origin: ZoneId) -> f64 {
        self.destinations(origin).iter().map(|&(_, d)| d).sum()
    }

    /// Sum of all demand in the table.
    pub fn total(&self) -> f64 {
        self.rows.values().flatten().map(|&(_, d)| d).sum()
    }

    /// Flattened entries: origins ascending, destinations in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = TripEntry> + '_ {
        self.rows.iter().flat_map(|(&origin, dests)| {
            dests.iter().map(move |&(destination, demand)| TripEntry {
                origin,
                destination,
                demand,
            })
        })
    }

    /// Dense-array form of [`entries`](Self::entries).
    pub fn to_rows(&self) -> Vec<DemandRow> {
        self.entries().map(DemandRow::from).collect()
    }
}
