//! `tn-core` — foundational types for the Bar-Gera conversion workspace.
//!
//! This crate is a dependency of every other `tn-*` crate.  It has no `tn-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `LinkId`, `ZoneId`, `parse_id`, `id_from_f64`    |
//! | [`geo`]      | `GeoPoint`, `PlanarPoint`                                  |
//! | [`record`]   | `LinkRecord`, `NodeRecord`, `GeoNode`, `TripEntry`, `DemandRow` |
//! | [`demand`]   | `DemandMap` (sparse OD matrix keyed by origin)             |
//! | [`metadata`] | `Metadata` (`<KEY> value` header blocks)                   |
//! | [`error`]    | `TnError`, `TnResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod demand;
pub mod error;
pub mod geo;
pub mod ids;
pub mod metadata;
pub mod record;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use demand::DemandMap;
pub use error::{TnError, TnResult};
pub use geo::{GeoPoint, PlanarPoint};
pub use ids::{id_from_f64, parse_id, LinkId, NodeId, ZoneId};
pub use metadata::Metadata;
pub use record::{DemandRow, GeoNode, LinkRecord, NodeRecord, TripEntry};
