use chrono::Duration;
use utility::serde::duration;

use crate::stop::StopId;
use crate::trip::TripId;

/// A single visit of a trip to a stop, corresponding to one row of
/// `stop_times.txt`. Primary key `(trip_id, stop_sequence)`.
///
/// See <https://gtfs.org/schedule/reference/#stop_timestxt>.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StopTime {
    /// `trip_id`. The trip this stop time belongs to.
    pub trip_id: TripId,

    /// `stop_sequence`. Order of this stop time within the trip;
    /// increases along the trip but need not be consecutive. Must be
    /// nonzero, per GTFS convention of reserving 0 as a sentinel.
    pub stop_sequence: u32,

    /// `stop_id`. The stop visited.
    pub stop_id: StopId,

    /// `arrival_time`, as a duration since noon minus twelve hours on
    /// the trip's service date. Hours may exceed 24 for a stop time
    /// that falls after midnight but still belongs to the prior
    /// service date. Conditionally required: must be set for the
    /// first and last stop time of a trip.
    #[serde(
        serialize_with = "duration::serialize_option",
        deserialize_with = "duration::deserialize_option",
        default
    )]
    pub arrival_time: Option<Duration>,

    /// `departure_time`, with the same noon-anchored representation as
    /// `arrival_time`.
    #[serde(
        serialize_with = "duration::serialize_option",
        deserialize_with = "duration::deserialize_option",
        default
    )]
    pub departure_time: Option<Duration>,

    /// `stop_headsign`. Rider-facing text overriding the trip's
    /// headsign for this stop onward.
    pub stop_headsign: Option<String>,
}
