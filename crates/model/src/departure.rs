use chrono::{DateTime, Duration, FixedOffset};

use crate::route::RouteId;
use crate::stop::StopId;
use crate::trip::{DirectionId, TripId};

/// One row of a `departures` query result: a single vehicle's visit to a
/// stop, with schedule and (if available) realtime-adjusted wall-clock
/// time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Departure {
    pub stop_id: StopId,
    pub route_id: RouteId,
    pub trip_id: TripId,
    pub stop_sequence: u32,
    pub direction_id: Option<DirectionId>,

    /// Wall-clock departure time, in the timezone the caller queried
    /// with.
    pub time: DateTime<FixedOffset>,

    pub headsign: Option<String>,

    /// The delay applied to reach `time`, relative to the static
    /// schedule. Zero when no realtime update applies.
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use utility::id::Id;

    #[test]
    fn departure_round_trips_through_json() {
        let departure = Departure {
            stop_id: Id::new("s1".to_owned()),
            route_id: Id::new("R1".to_owned()),
            trip_id: Id::new("t1".to_owned()),
            stop_sequence: 1,
            direction_id: Some(DirectionId::Outbound),
            time: FixedOffset::east_opt(3600)
                .unwrap()
                .with_ymd_and_hms(2020, 1, 15, 23, 0, 0)
                .unwrap(),
            headsign: Some("Kiel Hbf".to_owned()),
            delay: Duration::zero(),
        };
        let json = serde_json::to_string(&departure).unwrap();
        let back: Departure = serde_json::from_str(&json).unwrap();
        assert_eq!(departure, back);
    }
}
