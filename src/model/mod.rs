//! Data model for the metro network.

pub mod network;
pub mod types;

pub use network::MetroNetwork;
pub use types::{Connection, LineId, Minutes, Station, StationId};
