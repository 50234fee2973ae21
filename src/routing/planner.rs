//! Query boundary: resolve the query, enumerate, select, report.

use chrono::NaiveTime;
use log::{info, warn};

use super::enumerate::PathEnumerator;
use super::journey::Journey;
use super::select::{RouteMode, select_route};
use crate::{Error, MetroNetwork, StationId};

/// Plan a single journey from string-typed query inputs.
///
/// # Errors
///
/// `UnknownStation` if either endpoint is missing from the station
/// table, `InvalidTime` for a departure not in `HH:MM` form,
/// `InvalidMode` for an unrecognized mode, and `NoPathFound` when the
/// endpoints are not connected. All are reported to the caller; none
/// abort the process.
pub fn plan_journey(
    network: &MetroNetwork,
    origin: &str,
    destination: &str,
    departure: &str,
    mode: &str,
) -> Result<Journey, Error> {
    let origin_id = network.station_id(origin)?;
    let destination_id = network.station_id(destination)?;
    let departure_time = NaiveTime::parse_from_str(departure, "%H:%M")
        .map_err(|_| Error::InvalidTime(departure.to_string()))?;
    let mode = mode.parse::<RouteMode>()?;

    plan_journey_at(network, origin_id, destination_id, departure_time, mode)
}

/// Typed variant of [`plan_journey`].
///
/// Runs one enumerator to completion, then selects. Each call uses a
/// fresh enumerator; callers that issue many queries against the same
/// network can hold a [`PathEnumerator`] themselves to reuse its cache.
pub fn plan_journey_at(
    network: &MetroNetwork,
    origin: StationId,
    destination: StationId,
    departure: NaiveTime,
    mode: RouteMode,
) -> Result<Journey, Error> {
    let mut enumerator = PathEnumerator::new(network);
    let journeys = enumerator.find_paths(origin, destination, departure)?;

    if journeys.is_empty() {
        warn!(
            "No path from {} to {}",
            network.station_name(origin),
            network.station_name(destination)
        );
        return Err(Error::NoPathFound);
    }

    let selected = select_route(network, &journeys, mode)?;
    info!(
        "Selected one of {} candidate paths from {} to {}: {:.2} min, {} transfers",
        journeys.len(),
        network.station_name(origin),
        network.station_name(destination),
        selected.total_time,
        selected.transfers
    );
    Ok(selected.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{EdgeSpec, StationRecord, create_metro_network};

    fn network() -> MetroNetwork {
        let stations = vec![
            StationRecord::new("X", 51.50, -0.10),
            StationRecord::new("Y", 51.51, -0.12),
            StationRecord::new("Z", 51.52, -0.14),
            StationRecord::new("W", 53.48, -2.24),
        ];
        let spec = EdgeSpec::flat_text("X - Y - A\nY - Z - A");
        create_metro_network(&stations, &spec).unwrap()
    }

    #[test]
    fn plans_end_to_end() {
        let network = network();
        let journey = plan_journey(&network, "X", "Z", "09:00", "fastest").unwrap();
        assert_eq!(journey.station_names(&network), ["X", "Y", "Z"]);
        assert_eq!(journey.transfers, 0);
    }

    #[test]
    fn unknown_station_is_reported() {
        let network = network();
        assert!(matches!(
            plan_journey(&network, "X", "Atlantis", "09:00", "fastest"),
            Err(Error::UnknownStation(name)) if name == "Atlantis"
        ));
    }

    #[test]
    fn invalid_mode_is_reported() {
        let network = network();
        assert!(matches!(
            plan_journey(&network, "X", "Z", "09:00", "invalid"),
            Err(Error::InvalidMode(_))
        ));
    }

    #[test]
    fn invalid_time_is_reported() {
        let network = network();
        for bad in ["9am", "25:00", "09:60", ""] {
            assert!(
                matches!(
                    plan_journey(&network, "X", "Z", bad, "fastest"),
                    Err(Error::InvalidTime(_))
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn disconnected_stations_yield_no_path() {
        let network = network();
        assert!(matches!(
            plan_journey(&network, "X", "W", "09:00", "fastest"),
            Err(Error::NoPathFound)
        ));
    }
}
