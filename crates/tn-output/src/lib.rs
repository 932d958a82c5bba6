//! `tn-output` — writers for the solver and viewer artifacts.
//!
//! | Module       | Artifact                                   | Schema / shape                  |
//! |--------------|--------------------------------------------|---------------------------------|
//! | [`csv`]      | canonical link table                       | `LINK,A,B,a0,a1,a2,a3,a4`       |
//! | [`csv`]      | canonical OD table                         | `O,D,Ton`                       |
//! | [`csv`]      | projected node table                       | `node,lat,lon`                  |
//! | [`csv`]      | headerless numeric table                   | solver result passthrough       |
//! | [`trips`]    | trips-dialect text                         | metadata + `Origin` blocks      |
//! | [`features`] | map viewer script                          | `var geojson_features = […];`   |
//!
//! Every writer renders the complete artifact in memory and hands it to
//! [`writer::write_artifact`], which truncates the destination and writes it
//! in one call.  A crash mid-write can still leave a truncated file; callers
//! needing atomic replacement should write to a temporary path and rename.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tn_output::{write_links_csv, write_od_csv};
//!
//! let net = tn_reader::read_net(Path::new("SiouxFalls_net.txt"))?;
//! write_links_csv(Path::new("SiouxFalls_net.csv"), &net.links)?;
//! ```

pub mod csv;
pub mod error;
pub mod features;
pub mod format;
pub mod trips;
pub mod writer;


pub use crate::csv::{
    render_geo_nodes_csv, render_links_csv, render_matrix_csv, render_od_csv, write_geo_nodes_csv,
    write_links_csv, write_matrix_csv, write_od_csv,
};
pub use error::{OutputError, OutputResult};
pub use features::{
    render_demand_features, render_link_features, render_point_features, write_demand_features,
    write_link_features, write_point_features, ColorClass, FeatureStyle, DEFAULT_WEIGHT,
};
pub use trips::{render_trips, write_trips};
pub use writer::write_artifact;
