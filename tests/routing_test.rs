//! End-to-end queries against the London fixture.

mod common;

use chrono::NaiveTime;
use common::{london, london_flat_text, london_stations};
use metroplan::prelude::*;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn enumerate(network: &MetroNetwork, origin: &str, destination: &str, time: NaiveTime) -> Vec<Journey> {
    let mut enumerator = PathEnumerator::new(network);
    enumerator
        .find_paths(
            network.station_id(origin).unwrap(),
            network.station_id(destination).unwrap(),
            time,
        )
        .unwrap()
}

#[test]
fn both_edge_forms_build_the_same_network() {
    let from_map = london();
    let from_flat = create_metro_network(&london_stations(), &london_flat_text()).unwrap();

    assert_eq!(from_map.station_count(), from_flat.station_count());
    assert_eq!(from_map.line_count(), from_flat.line_count());
    for station in 0..from_map.station_count() {
        assert_eq!(from_map.neighbors(station), from_flat.neighbors(station));
    }
}

#[test]
fn adjacency_is_symmetric() {
    let network = london();
    for station in 0..network.station_count() {
        for connection in network.neighbors(station) {
            assert!(
                network
                    .neighbors(connection.station)
                    .iter()
                    .any(|back| back.station == station && back.line == connection.line),
                "missing reciprocal entry for {} -> {}",
                network.station_name(station),
                network.station_name(connection.station),
            );
        }
    }
}

#[test]
fn fastest_kings_cross_to_victoria() {
    let network = london();
    let journey =
        plan_journey(&network, "King's Cross", "Victoria Station", "10:00", "fastest").unwrap();

    let all = enumerate(&network, "King's Cross", "Victoria Station", at(10, 0));
    assert!(all.len() > 1);
    for candidate in &all {
        assert!(journey.total_time <= candidate.total_time + 1e-9);
    }

    assert_eq!(journey.station_names(&network).first(), Some(&"King's Cross"));
    assert_eq!(
        journey.station_names(&network).last(),
        Some(&"Victoria Station")
    );
    assert_eq!(journey.stations.len(), journey.lines.len() + 1);
    assert_eq!(journey.transfers, journey.line_changes());
}

#[test]
fn median_kings_cross_to_victoria() {
    let network = london();
    let journey =
        plan_journey(&network, "King's Cross", "Victoria Station", "12:00", "median").unwrap();

    let mut all = enumerate(&network, "King's Cross", "Victoria Station", at(12, 0));
    all.sort_by(|a, b| a.total_time.total_cmp(&b.total_time));
    let expected = &all[(all.len() - 1) / 2];
    assert!((journey.total_time - expected.total_time).abs() < 1e-9);
}

#[test]
fn slowest_paddington_to_euston() {
    let network = london();
    let journey = plan_journey(&network, "Paddington", "Euston", "14:00", "slowest").unwrap();

    let all = enumerate(&network, "Paddington", "Euston", at(14, 0));
    for candidate in &all {
        assert!(journey.total_time >= candidate.total_time - 1e-9);
    }

    // The scenic route necessarily changes lines at least once:
    // Paddington only has Bakerloo and Circle edges, Euston only Northern.
    assert!(journey.transfers >= 1);
}

#[test]
fn same_origin_and_destination() {
    let network = london();
    let journey = plan_journey(&network, "Euston", "Euston", "10:00", "fastest").unwrap();
    assert_eq!(journey.station_names(&network), ["Euston"]);
    assert_eq!(journey.total_time, 0.0);
    assert_eq!(journey.transfers, 0);
}

#[test]
fn selected_journey_renders_to_geojson() {
    let network = london();
    let journey =
        plan_journey(&network, "King's Cross", "Victoria Station", "10:00", "fastest").unwrap();
    let collection = journey.to_geojson(&network).unwrap();
    assert_eq!(
        collection.features.len(),
        journey.stations.len() + journey.lines.len()
    );

    let serialized = journey.to_geojson_string(&network).unwrap();
    assert!(serialized.contains("King's Cross"));
}

#[test]
fn station_table_loads_from_csv() {
    let csv = "name,lat,lon\n\
               King's Cross,51.5308,-0.1238\n\
               Euston,51.5281,-0.1337\n";
    let records = stations_from_csv(csv.as_bytes()).unwrap();
    let network = create_metro_network(
        &records,
        &EdgeSpec::flat_text("King's Cross - Euston - Northern"),
    )
    .unwrap();

    let journey = plan_journey(&network, "King's Cross", "Euston", "09:00", "fastest").unwrap();
    assert_eq!(journey.station_names(&network), ["King's Cross", "Euston"]);
}

#[test]
fn journey_matrix_over_the_fixture() {
    let network = london();
    let stations: Vec<StationId> = (0..network.station_count()).collect();
    let matrix =
        journey_time_matrix(&network, &stations, at(10, 0), RouteMode::Fastest).unwrap();

    // The fixture is fully connected, so every cell is reachable and
    // the diagonal is free.
    for (i, row) in matrix.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let time = cell.expect("fixture is connected");
            if i == j {
                assert_eq!(time, 0.0);
            } else {
                assert!(time > 0.0);
            }
        }
    }
}
