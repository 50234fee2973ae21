//! Batch journey times over many station pairs.

use chrono::NaiveTime;
use rayon::prelude::*;

use super::enumerate::PathEnumerator;
use super::select::{RouteMode, select_route};
use crate::{Error, MetroNetwork, Minutes, StationId};

/// Selected journey time for every ordered pair of the given stations,
/// in minutes. `result[i][j]` is the time from `stations[i]` to
/// `stations[j]`; unreachable pairs are `None`, the diagonal is
/// `Some(0.0)`.
///
/// Rows run in parallel, each with its own enumerator, so no cache is
/// ever shared between concurrent searches.
///
/// # Errors
///
/// `UnknownStation` if any index is not a declared station.
pub fn journey_time_matrix(
    network: &MetroNetwork,
    stations: &[StationId],
    departure: NaiveTime,
    mode: RouteMode,
) -> Result<Vec<Vec<Option<Minutes>>>, Error> {
    for &station in stations {
        network.validate_station(station)?;
    }

    let matrix = stations
        .par_iter()
        .map(|&origin| {
            let mut enumerator = PathEnumerator::new(network);
            stations
                .iter()
                .map(|&destination| {
                    // Endpoints were validated above, so only an empty
                    // candidate set can make a cell fail.
                    enumerator
                        .find_paths(origin, destination, departure)
                        .ok()
                        .and_then(|journeys| {
                            select_route(network, &journeys, mode)
                                .ok()
                                .map(|journey| journey.total_time)
                        })
                })
                .collect()
        })
        .collect();

    Ok(matrix)
}
