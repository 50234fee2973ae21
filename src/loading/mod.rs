//! Ingestion of the injected station table and edge specification, and
//! construction of the network graph.

mod builder;
mod edge_spec;
mod parser;
mod raw_types;

pub use builder::create_metro_network;
pub use edge_spec::EdgeSpec;
pub use parser::{stations_from_csv, stations_from_csv_file, stations_from_json};
pub use raw_types::StationRecord;
