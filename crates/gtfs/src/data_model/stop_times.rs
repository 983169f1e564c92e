use chrono::Duration;
use model::stop_time::StopTime;
use serde::Deserialize;
use storage::error::{CoreError, Result};
use utility::id::Id;
use utility::serde::duration;

/// One row of `stop_times.txt`.
///
/// See <https://gtfs.org/schedule/reference/#stop_timestxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTimeRow {
    pub trip_id: String,

    #[serde(deserialize_with = "duration::deserialize_option", default)]
    pub arrival_time: Option<Duration>,

    #[serde(deserialize_with = "duration::deserialize_option", default)]
    pub departure_time: Option<Duration>,

    pub stop_id: String,

    pub stop_sequence: u32,

    #[serde(default)]
    pub stop_headsign: Option<String>,
}

impl StopTimeRow {
    /// Converts this row into the storage-facing [`StopTime`].
    ///
    /// `stop_sequence` must be nonzero; GTFS reserves `0` as a sentinel
    /// and the calendar/window arithmetic in the query engine assumes
    /// every stop time carries a meaningful order.
    pub fn into_model(self) -> Result<StopTime> {
        if self.trip_id.is_empty() {
            return Err(CoreError::Parse("stop_time is missing trip_id".into()));
        }
        if self.stop_id.is_empty() {
            return Err(CoreError::Parse(format!(
                "stop_time for trip {} is missing stop_id",
                self.trip_id
            )));
        }
        if self.stop_sequence == 0 {
            return Err(CoreError::Parse(format!(
                "stop_time for trip {} has stop_sequence 0",
                self.trip_id
            )));
        }
        Ok(StopTime {
            trip_id: Id::new(self.trip_id),
            stop_sequence: self.stop_sequence,
            stop_id: Id::new(self.stop_id),
            arrival_time: self.arrival_time,
            departure_time: self.departure_time,
            stop_headsign: self.stop_headsign,
        })
    }
}
