use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("Malformed edge spec line: {0:?}")]
    MalformedEdgeSpec(String),
    #[error("No path found between the requested stations")]
    NoPathFound,
    #[error("Invalid route mode {0:?}, expected one of: fastest, slowest, median")]
    InvalidMode(String),
    #[error("Invalid departure time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
