//! Undirected station graph with line-tagged adjacency lists.

use geo::{Distance, HaversineMeasure, Point};
use hashbrown::HashMap;

use super::types::{Connection, LineId, Station, StationId};
use crate::Error;

/// Earth radius used for great-circle distances, meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// The metro graph: a station arena plus one adjacency list per station.
///
/// Adjacency lists keep insertion order. An undirected edge always
/// contributes two reciprocal entries, one in each endpoint's list.
#[derive(Debug, Clone, Default)]
pub struct MetroNetwork {
    stations: Vec<Station>,
    station_index: HashMap<String, StationId>,
    adjacency: Vec<Vec<Connection>>,
    lines: Vec<String>,
    line_index: HashMap<String, LineId>,
}

impl MetroNetwork {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Resolve a station name to its arena index.
    ///
    /// # Errors
    ///
    /// `UnknownStation` if the name is not in the station table.
    pub fn station_id(&self, name: &str) -> Result<StationId, Error> {
        self.station_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownStation(name.to_string()))
    }

    /// Check that an arena index refers to a declared station.
    pub(crate) fn validate_station(&self, station: StationId) -> Result<(), Error> {
        if station < self.stations.len() {
            Ok(())
        } else {
            Err(Error::UnknownStation(format!("station index {station}")))
        }
    }

    pub fn station_name(&self, station: StationId) -> &str {
        &self.stations[station].name
    }

    pub fn station_location(&self, station: StationId) -> Point<f64> {
        self.stations[station].geometry
    }

    /// Adjacency entries of a station, in insertion order.
    pub fn neighbors(&self, station: StationId) -> &[Connection] {
        &self.adjacency[station]
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_name(&self, line: LineId) -> &str {
        &self.lines[line]
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Great-circle distance between two stations, km.
    pub fn distance_km(&self, a: StationId, b: StationId) -> f64 {
        let measure = HaversineMeasure::new(EARTH_RADIUS_M);
        measure.distance(self.stations[a].geometry, self.stations[b].geometry) / 1000.0
    }

    /// Append a station to the arena.
    ///
    /// # Errors
    ///
    /// `InvalidData` if the name is already taken.
    pub(crate) fn add_station(&mut self, name: &str, lat: f64, lon: f64) -> Result<StationId, Error> {
        let id = self.stations.len();
        if self.station_index.insert(name.to_string(), id).is_some() {
            return Err(Error::InvalidData(format!("duplicate station name: {name}")));
        }
        self.stations.push(Station {
            name: name.to_string(),
            geometry: Point::new(lon, lat),
        });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Intern a line name, returning its id.
    pub(crate) fn intern_line(&mut self, name: &str) -> LineId {
        if let Some(&line) = self.line_index.get(name) {
            return line;
        }
        let line = self.lines.len();
        self.lines.push(name.to_string());
        self.line_index.insert(name.to_string(), line);
        line
    }

    /// Record an undirected edge as two reciprocal adjacency entries.
    pub(crate) fn add_edge(&mut self, a: StationId, b: StationId, line: LineId) {
        self.adjacency[a].push(Connection { station: b, line });
        self.adjacency[b].push(Connection { station: a, line });
    }
}
