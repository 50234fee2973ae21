//! Time-of-day dependent cost of traversing one edge.

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::{LINE_CHANGE_PENALTY_MIN, LineId, Minutes, TRAIN_SPEED_KMH};

/// Wait-time band of the hour of day.
///
/// The comparison is on the integer hour only: 11:00 and 17:59 fall in
/// the midday band, 18:00 exactly in the evening band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitBand {
    /// Before 11:00.
    Morning,
    /// 11:00 up to but excluding 18:00.
    Midday,
    /// 18:00 onwards.
    Evening,
}

impl WaitBand {
    pub fn of(time: NaiveTime) -> Self {
        let hour = time.hour();
        if hour < 11 {
            WaitBand::Morning
        } else if hour >= 18 {
            WaitBand::Evening
        } else {
            WaitBand::Midday
        }
    }

    /// Platform wait in minutes for a departure in this band.
    pub fn wait_minutes(self) -> Minutes {
        match self {
            WaitBand::Morning => 1.5,
            WaitBand::Midday => 1.0,
            WaitBand::Evening => 2.0,
        }
    }
}

/// In-vehicle travel time for a hop of the given length, minutes.
pub fn travel_minutes(distance_km: f64) -> Minutes {
    distance_km / TRAIN_SPEED_KMH * 60.0
}

/// A hop is a transfer when it arrives on one line and departs on
/// another. The origin station has no incoming line and never transfers.
pub fn is_transfer(incoming: Option<LineId>, outgoing: LineId) -> bool {
    incoming.is_some_and(|line| line != outgoing)
}

/// Full cost of one hop: platform wait, ride, and the change penalty.
pub fn edge_time(
    distance_km: f64,
    departure: NaiveTime,
    incoming: Option<LineId>,
    outgoing: LineId,
) -> Minutes {
    let penalty = if is_transfer(incoming, outgoing) {
        LINE_CHANGE_PENALTY_MIN
    } else {
        0.0
    };
    WaitBand::of(departure).wait_minutes() + travel_minutes(distance_km) + penalty
}

/// Advance the simulated clock by a fractional number of minutes.
///
/// `NaiveTime` arithmetic wraps at midnight, which matches the
/// hour-of-day semantics of the wait bands.
#[allow(clippy::cast_possible_truncation)]
pub fn advance(clock: NaiveTime, minutes: Minutes) -> NaiveTime {
    clock + TimeDelta::milliseconds((minutes * 60_000.0).round() as i64)
}
