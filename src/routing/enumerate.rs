//! Exhaustive enumeration of simple paths with memoized suffix sets.

use chrono::NaiveTime;
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use super::cost::{WaitBand, advance, edge_time, is_transfer};
use super::journey::Journey;
use crate::{Error, LineId, MetroNetwork, Minutes, StationId};

/// Memoization key: everything a cached suffix set depends on.
///
/// Beyond the (station, visited) pair, the key carries the destination,
/// the wait band of the simulated clock, and the incoming line, so a
/// suffix priced under one line transition or hour band is never reused
/// under another. Suffix costs can still drift where an edge crosses a
/// band boundary at a different minute than when the entry was cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchKey {
    station: StationId,
    visited: FixedBitSet,
    destination: StationId,
    band: WaitBand,
    incoming: Option<LineId>,
}

/// A path suffix from some station to the destination.
#[derive(Debug, Clone)]
struct PathTail {
    stations: Vec<StationId>,
    lines: Vec<LineId>,
    time: Minutes,
    transfers: usize,
}

impl PathTail {
    /// The zero-cost tail that starts and ends at the destination.
    fn terminal(destination: StationId) -> Self {
        Self {
            stations: vec![destination],
            lines: Vec::new(),
            time: 0.0,
            transfers: 0,
        }
    }
}

/// Enumerates every simple path between two stations.
///
/// The suffix cache grows with the number of explored states and is
/// never evicted; discard the enumerator to free it. One enumerator
/// serves one search at a time (no internal synchronization) — run
/// concurrent queries on separate instances.
pub struct PathEnumerator<'a> {
    network: &'a MetroNetwork,
    memo: HashMap<SearchKey, Vec<PathTail>>,
}

impl<'a> PathEnumerator<'a> {
    pub fn new(network: &'a MetroNetwork) -> Self {
        Self {
            network,
            memo: HashMap::new(),
        }
    }

    /// All simple paths from `origin` to `destination` leaving at
    /// `departure`, in adjacency discovery order.
    ///
    /// An origin equal to the destination yields exactly one zero-length,
    /// zero-cost journey. An unreachable destination yields an empty
    /// collection, not an error.
    ///
    /// # Errors
    ///
    /// `UnknownStation` if either endpoint is not a declared station.
    pub fn find_paths(
        &mut self,
        origin: StationId,
        destination: StationId,
        departure: NaiveTime,
    ) -> Result<Vec<Journey>, Error> {
        self.network.validate_station(origin)?;
        self.network.validate_station(destination)?;

        let visited = FixedBitSet::with_capacity(self.network.station_count());
        let tails = self.explore(origin, destination, &visited, departure, None);

        Ok(tails
            .into_iter()
            .map(|tail| Journey {
                stations: tail.stations,
                lines: tail.lines,
                total_time: tail.time,
                transfers: tail.transfers,
            })
            .collect())
    }

    /// Depth-first expansion of one search state.
    ///
    /// Each recursive branch receives its own visited value, which grows
    /// strictly on every call; together with the finite station arena
    /// that guarantees termination.
    fn explore(
        &mut self,
        current: StationId,
        destination: StationId,
        visited: &FixedBitSet,
        clock: NaiveTime,
        incoming: Option<LineId>,
    ) -> Vec<PathTail> {
        if current == destination {
            return vec![PathTail::terminal(destination)];
        }

        let key = SearchKey {
            station: current,
            visited: visited.clone(),
            destination,
            band: WaitBand::of(clock),
            incoming,
        };
        if let Some(cached) = self.memo.get(&key) {
            return cached.clone();
        }

        let network = self.network;
        let mut next_visited = visited.clone();
        next_visited.insert(current);

        let mut found = Vec::new();
        for connection in network.neighbors(current) {
            if visited.contains(connection.station) {
                continue;
            }

            let hop_time = edge_time(
                network.distance_km(current, connection.station),
                clock,
                incoming,
                connection.line,
            );
            let transfer = is_transfer(incoming, connection.line);
            let next_clock = advance(clock, hop_time);

            let tails = self.explore(
                connection.station,
                destination,
                &next_visited,
                next_clock,
                Some(connection.line),
            );

            for tail in tails {
                let mut stations = Vec::with_capacity(tail.stations.len() + 1);
                stations.push(current);
                stations.extend_from_slice(&tail.stations);

                let mut lines = Vec::with_capacity(tail.lines.len() + 1);
                lines.push(connection.line);
                lines.extend_from_slice(&tail.lines);

                found.push(PathTail {
                    stations,
                    lines,
                    time: hop_time + tail.time,
                    transfers: tail.transfers + usize::from(transfer),
                });
            }
        }

        self.memo.insert(key, found.clone());
        found
    }
}
