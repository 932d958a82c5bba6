//! `tn-reader` — decoders for the Bar-Gera text dialects.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`net`]    | `read_net`, `read_net_reader`, `NetFile`                    |
//! | [`trips`]  | `read_trips`, `read_trips_reader`, `TripsParser`, `TripsFile` |
//! | [`node`]   | `read_nodes`, `read_geo_nodes` (+ `Read` forms)             |
//! | [`table`]  | `read_od_csv`, `read_matrix` (canonical CSV re-reading)     |
//! | [`error`]  | `ReadError`, `ReadResult<T>`                                |
//!
//! Every reader comes in a path form and a `Read` form.  The `Read` form is
//! what tests drive with a `std::io::Cursor`.
//!
//! # Dialect selection
//!
//! [`Dialect`] names the three raw formats for callers that pick a reader at
//! run time; [`read_dialect`] dispatches on it.

pub mod error;
pub mod net;
pub mod node;
pub mod table;
pub mod trips;


use std::path::Path;

use tn_core::{DemandMap, LinkRecord, NodeRecord};

pub use error::{ReadError, ReadResult};
pub use net::{read_net, read_net_reader, NetFile};
pub use node::{read_geo_nodes, read_geo_nodes_reader, read_nodes, read_nodes_reader};
pub use table::{read_matrix, read_matrix_reader, read_od_csv, read_od_csv_reader};
pub use trips::{read_trips, read_trips_reader, Mode, ParserState, TripsFile, TripsParser};

/// The raw Bar-Gera file kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dialect {
    Net,
    Trips,
    Node,
}

/// A decoded raw file, tagged by dialect.
#[derive(Clone, Debug, PartialEq)]
pub enum Table {
    Links(Vec<LinkRecord>),
    Demand(DemandMap),
    Nodes(Vec<NodeRecord>),
}

/// Decode `path` with the reader for `dialect`.
pub fn read_dialect(path: &Path, dialect: Dialect) -> ReadResult<Table> {
    Ok(match dialect {
        Dialect::Net => Table::Links(read_net(path)?.links),
        Dialect::Trips => Table::Demand(read_trips(path)?.demand),
        Dialect::Node => Table::Nodes(read_nodes(path)?),
    })
}
