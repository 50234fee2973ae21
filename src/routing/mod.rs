//! Path enumeration, edge costing, and route selection.

pub mod cost;
mod enumerate;
mod journey;
mod matrix;
mod planner;
mod select;
mod to_geojson;

pub use cost::{WaitBand, edge_time, travel_minutes};
pub use enumerate::PathEnumerator;
pub use journey::Journey;
pub use matrix::journey_time_matrix;
pub use planner::{plan_journey, plan_journey_at};
pub use select::{RouteMode, select_route};
