pub use crate::{LINE_CHANGE_PENALTY_MIN, TRAIN_SPEED_KMH};

// Re-export key components
pub use crate::loading::{
    EdgeSpec, StationRecord, create_metro_network, stations_from_csv, stations_from_csv_file,
    stations_from_json,
};
pub use crate::model::{Connection, MetroNetwork, Station};
pub use crate::routing::{
    Journey, PathEnumerator, RouteMode, WaitBand, journey_time_matrix, plan_journey,
    plan_journey_at, select_route,
};

// Core identifier types
pub use crate::LineId;
pub use crate::Minutes;
pub use crate::StationId;

pub use crate::error::Error;
