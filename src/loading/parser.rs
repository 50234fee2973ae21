use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::raw_types::StationRecord;
use crate::Error;

/// Read station records from a CSV file with a `name,lat,lon` header.
///
/// # Errors
///
/// `IoError` if the file cannot be opened, `InvalidData` on rows that
/// fail to deserialize.
pub fn stations_from_csv_file(path: &Path) -> Result<Vec<StationRecord>, Error> {
    let file = File::open(path)?;
    stations_from_csv(file)
}

/// Read station records from CSV with a `name,lat,lon` header.
///
/// # Errors
///
/// `InvalidData` on rows that fail to deserialize.
pub fn stations_from_csv<R: Read>(reader: R) -> Result<Vec<StationRecord>, Error> {
    csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<StationRecord>, _>>()
        .map_err(|e| Error::InvalidData(format!("station CSV: {e}")))
}

/// Read station records from a JSON array of `{name, lat, lon}` objects.
///
/// # Errors
///
/// `InvalidData` if the document does not match that shape.
pub fn stations_from_json(json: &str) -> Result<Vec<StationRecord>, Error> {
    serde_json::from_str(json).map_err(|e| Error::InvalidData(format!("station JSON: {e}")))
}
