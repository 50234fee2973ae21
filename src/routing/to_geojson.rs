//! GeoJSON rendering of a journey for the map visualization collaborator.

use geo::line_string;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::journey::Journey;
use crate::{Error, MetroNetwork, StationId};

/// Display color for a line; unrecognized lines fall back to purple.
fn line_color(line_name: &str) -> &'static str {
    match line_name {
        "Victoria" => "lightblue",
        "Northern" => "black",
        "Bakerloo" => "brown",
        "Jubilee" => "gray",
        "Circle" => "yellow",
        _ => "purple",
    }
}

impl Journey {
    /// Converts the journey to a `GeoJSON` `FeatureCollection`: one point
    /// feature per station on the path and one colored line feature per
    /// hop. Rendering, persisting, and opening the result stay with the
    /// caller.
    pub fn to_geojson(&self, network: &MetroNetwork) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.stations.len() * 2);

        let last = self.stations.len().saturating_sub(1);
        for (idx, &station) in self.stations.iter().enumerate() {
            let (marker_color, icon) = if idx == 0 {
                ("green", "play")
            } else if idx == last {
                ("red", "stop")
            } else {
                ("blue", "info")
            };
            features.push(station_feature(network, station, marker_color, icon)?);
        }

        for (hop, pair) in self.stations.windows(2).enumerate() {
            let line_name = network.line_name(self.lines[hop]);
            features.push(hop_feature(network, pair[0], pair[1], line_name)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    /// The `FeatureCollection` as a JSON string.
    pub fn to_geojson_string(&self, network: &MetroNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn station_feature(
    network: &MetroNetwork,
    station: StationId,
    marker_color: &str,
    icon: &str,
) -> Result<Feature, Error> {
    let location = network.station_location(station);
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&location)),
        "properties": {
            "name": network.station_name(station),
            "marker_color": marker_color,
            "icon": icon,
        }
    });
    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn hop_feature(
    network: &MetroNetwork,
    from: StationId,
    to: StationId,
    line_name: &str,
) -> Result<Feature, Error> {
    let from_loc = network.station_location(from);
    let to_loc = network.station_location(to);
    let segment = line_string![
        (x: from_loc.x(), y: from_loc.y()),
        (x: to_loc.x(), y: to_loc.y()),
    ];

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&segment)),
        "properties": {
            "line": line_name,
            "color": line_color(line_name),
            "from_name": network.station_name(from),
            "to_name": network.station_name(to),
        }
    });
    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
