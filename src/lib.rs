//! Journey-option engine for small metro networks.
//!
//! The engine builds an undirected, line-tagged station graph once, then
//! answers queries by enumerating every simple path between two stations
//! under a time-of-day dependent cost model and selecting a single journey
//! by ranking mode (fastest, slowest, or median total time).
//!
//! Full simple-path enumeration is exponential in the worst case; the
//! design assumes small-order networks where it stays tractable.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Connection, LineId, MetroNetwork, Minutes, Station, StationId};
pub use routing::{
    Journey, PathEnumerator, RouteMode, journey_time_matrix, plan_journey, plan_journey_at,
    select_route,
};

/// Assumed cruising speed of a metro train, km/h.
pub const TRAIN_SPEED_KMH: f64 = 35.0;

/// Penalty in minutes for leaving a station on a different line than the
/// one arrived on.
pub const LINE_CHANGE_PENALTY_MIN: f64 = 3.0;
