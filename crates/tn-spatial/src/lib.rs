//! `tn-spatial` — coordinate projection and table joins.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`projection`] | `GeoBounds`, `PlanarExtent`, `Projector`, `project_nodes` |
//! | [`nodes`]      | `NodeTable` (lookup by scan or by ordinal)                |
//! | [`join`]       | `JoinStrategy`, `join_links`, `join_demand`               |
//! | [`results`]    | `remap_results` (solver output onto link order)           |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Pipeline position
//!
//! ```text
//! NodeRecord ──project_nodes──► GeoNode ──NodeTable──┐
//!                                                    ├─join_links──► JoinedLinkFeature
//! LinkRecord + attribute rows ───────────────────────┘
//! ```

pub mod error;
pub mod join;
pub mod nodes;
pub mod projection;
pub mod results;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use join::{join_demand, join_links, JoinStrategy, JoinedDemand, JoinedLinkFeature};
pub use nodes::NodeTable;
pub use projection::{project_nodes, Axis, GeoBounds, PlanarExtent, Projector};
pub use results::remap_results;
