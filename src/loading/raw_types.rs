use serde::Deserialize;

/// One row of the injected station table: a unique name plus WGS84
/// coordinates in degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl StationRecord {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}
