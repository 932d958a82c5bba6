//! Node table with the two lookup paths the joins use.
//!
//! | Lookup        | Cost  | Requirement                                  |
//! |---------------|-------|----------------------------------------------|
//! | [`find`]      | O(N)  | none (first row with a matching id wins)     |
//! | [`by_ordinal`]| O(1)  | table is dense: row `i` holds `NodeId(i+1)`  |
//!
//! [`find`]: NodeTable::find
//! [`by_ordinal`]: NodeTable::by_ordinal

use tn_core::{GeoNode, GeoPoint, NodeId};

use crate::{SpatialError, SpatialResult};

/// Projected nodes in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeTable {
    rows: Vec<GeoNode>,
}

impl NodeTable {
    pub fn new(rows: Vec<GeoNode>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[GeoNode] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Linear scan for `id`.
    pub fn find(&self, id: NodeId) -> Option<GeoPoint> {
        self.rows.iter().find(|n| n.id == id).map(|n| n.pos)
    }

    /// Direct index `rows[id - 1]`.  Only meaningful on a dense table; see
    /// [`check_dense`](Self::check_dense).
    #[inline]
    pub fn by_ordinal(&self, id: NodeId) -> Option<GeoPoint> {
        id.ordinal().and_then(|i| self.rows.get(i)).map(|n| n.pos)
    }

    /// Verify that row `i` holds `NodeId(i + 1)` for every row.
    pub fn check_dense(&self) -> SpatialResult<()> {
        for (row, n) in self.rows.iter().enumerate() {
            let expected = row as u32 + 1;
            if n.id.0 != expected {
                return Err(SpatialError::NotDense { row, expected, found: n.id });
            }
        }
        Ok(())
    }

    pub fn is_dense(&self) -> bool {
        self.check_dense().is_ok()
    }
}

impl From<Vec<GeoNode>> for NodeTable {
    fn from(rows: Vec<GeoNode>) -> Self {
        Self::new(rows)
    }
}
