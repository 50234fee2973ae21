use log::{info, warn};

use super::edge_spec::EdgeSpec;
use super::raw_types::StationRecord;
use crate::{Error, MetroNetwork};

/// Builds a metro network from the injected station table and edge spec.
///
/// # Errors
///
/// `InvalidData` on duplicate station names. For the flat edge form,
/// `MalformedEdgeSpec` on a line that does not split into three fields
/// and `UnknownStation` on an undeclared endpoint. The line-map form
/// instead skips pairs with undeclared endpoints.
pub fn create_metro_network(
    stations: &[StationRecord],
    edges: &EdgeSpec,
) -> Result<MetroNetwork, Error> {
    let mut network = MetroNetwork::default();
    for record in stations {
        network.add_station(&record.name, record.lat, record.lon)?;
    }

    match edges {
        EdgeSpec::LineMap(groups) => apply_line_map(&mut network, groups),
        EdgeSpec::FlatText(text) => apply_flat_text(&mut network, text)?,
    }

    info!(
        "Metro network built: {} stations, {} edges, {} lines",
        network.station_count(),
        network.edge_count(),
        network.line_count()
    );
    Ok(network)
}

/// Line-map form: pairs naming an undeclared station are dropped.
fn apply_line_map(network: &mut MetroNetwork, groups: &[(String, Vec<(String, String)>)]) {
    for (line_name, pairs) in groups {
        let line = network.intern_line(line_name);
        for (origin, destination) in pairs {
            match (
                network.station_id(origin.trim()),
                network.station_id(destination.trim()),
            ) {
                (Ok(a), Ok(b)) => network.add_edge(a, b, line),
                _ => warn!(
                    "Skipping edge {origin} - {destination} on line {line_name}: undeclared station"
                ),
            }
        }
    }
}

/// Flat form: every line must split into exactly three ` - ` fields and
/// both endpoints must be declared.
fn apply_flat_text(network: &mut MetroNetwork, text: &str) -> Result<(), Error> {
    for raw in text.trim().lines() {
        let fields: Vec<&str> = raw.split(" - ").map(str::trim).collect();
        let &[origin, destination, line_name] = fields.as_slice() else {
            return Err(Error::MalformedEdgeSpec(raw.trim().to_string()));
        };
        let a = network.station_id(origin)?;
        let b = network.station_id(destination)?;
        let line = network.intern_line(line_name);
        network.add_edge(a, b, line);
    }
    Ok(())
}
