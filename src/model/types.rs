//! Core identifier and record types for the network model.

use geo::Point;

/// Index of a station in the network's station arena.
pub type StationId = usize;

/// Index of an interned line name.
pub type LineId = usize;

/// Travel-time quantity in fractional minutes.
pub type Minutes = f64;

/// A named station with its WGS84 location.
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique display name, also the lookup key.
    pub name: String,
    /// x = longitude, y = latitude, degrees.
    pub geometry: Point<f64>,
}

/// One directed half of an undirected edge, stored in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub station: StationId,
    pub line: LineId,
}
