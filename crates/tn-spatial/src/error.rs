//! Spatial-subsystem error type.

use thiserror::Error;

use tn_core::NodeId;

use crate::projection::Axis;

/// Errors produced by `tn-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// A link or demand row references a node absent from the node table.
    #[error("row {row}: node {node} not found in node table")]
    Join { row: usize, node: NodeId },

    /// All nodes share one coordinate on `axis`; interpolation would divide
    /// by zero.
    #[error("degenerate projection: every node has {axis} = {value}")]
    DegenerateProjection { axis: Axis, value: f64 },

    #[error("node table is empty")]
    EmptyNodeTable,

    /// The ordered join was requested on a table that is not `1..=N` in row
    /// order.
    #[error("node table is not dense: row {row} holds {found}, expected NodeId({expected})")]
    NotDense { row: usize, expected: u32, found: NodeId },

    #[error("attribute table has {got} rows, link table has {expected}")]
    AttributeMismatch { expected: usize, got: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
