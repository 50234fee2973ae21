//! Reducing the enumerated candidate set to a single journey.

use std::cmp::Ordering;
use std::str::FromStr;

use super::journey::Journey;
use crate::{Error, MetroNetwork};

/// Ranking mode for choosing among enumerated journeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMode {
    /// Minimum total time.
    Fastest,
    /// Maximum total time.
    Slowest,
    /// Lower median of the ascending total-time order: index
    /// `(n - 1) / 2`, never an interpolated average.
    Median,
}

impl FromStr for RouteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fastest" => Ok(RouteMode::Fastest),
            "slowest" => Ok(RouteMode::Slowest),
            "median" => Ok(RouteMode::Median),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Pick one journey from the candidate set.
///
/// Ties on total time are broken by path length, then by the lexical
/// order of the station-name sequence, so the selection is deterministic
/// regardless of enumeration order.
///
/// # Errors
///
/// `NoPathFound` if the candidate set is empty.
pub fn select_route<'a>(
    network: &MetroNetwork,
    journeys: &'a [Journey],
    mode: RouteMode,
) -> Result<&'a Journey, Error> {
    let selected = match mode {
        RouteMode::Fastest => journeys.iter().min_by(|a, b| rank(network, a, b)),
        RouteMode::Slowest => journeys.iter().min_by(|a, b| {
            b.total_time
                .total_cmp(&a.total_time)
                .then_with(|| tiebreak(network, a, b))
        }),
        RouteMode::Median => {
            let mut ordered: Vec<&Journey> = journeys.iter().collect();
            ordered.sort_by(|a, b| rank(network, a, b));
            ordered.get((ordered.len().saturating_sub(1)) / 2).copied()
        }
    };
    selected.ok_or(Error::NoPathFound)
}

/// Ascending order by total time, then the deterministic tie-break.
fn rank(network: &MetroNetwork, a: &Journey, b: &Journey) -> Ordering {
    a.total_time
        .total_cmp(&b.total_time)
        .then_with(|| tiebreak(network, a, b))
}

fn tiebreak(network: &MetroNetwork, a: &Journey, b: &Journey) -> Ordering {
    a.stations.len().cmp(&b.stations.len()).then_with(|| {
        let names_a = a.stations.iter().map(|&s| network.station_name(s));
        let names_b = b.stations.iter().map(|&s| network.station_name(s));
        names_a.cmp(names_b)
    })
}
