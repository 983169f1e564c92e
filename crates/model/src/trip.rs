use utility::id::{HasId, Id};

use crate::calendar::ServiceId;
use crate::route::RouteId;

/// The direction a trip travels along its route, corresponding to
/// `trips.direction_id`. Feeds use this to distinguish the two
/// directions of the same route; the values carry no fixed
/// compass meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum DirectionId {
    Outbound = 0,
    Inbound = 1,
}

pub type TripId = Id<Trip>;

/// A single scheduled journey along a [`crate::route::Route`], corresponding
/// to one row of `trips.txt`.
///
/// See <https://gtfs.org/schedule/reference/#tripstxt>.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trip {
    /// `trip_id`. Uniquely identifies the trip within the feed.
    pub id: TripId,

    /// `route_id`. The route this trip belongs to.
    pub route_id: RouteId,

    /// `service_id`. The set of dates this trip runs on, resolved
    /// through `calendar.txt`/`calendar_dates.txt`.
    pub service_id: ServiceId,

    /// `trip_headsign`. Rider-facing text describing the trip's
    /// destination, shown in place of the route's own headsign.
    pub headsign: Option<String>,

    /// `trip_short_name`. Rider-facing identifier for the trip, distinct
    /// from the route's `short_name`.
    pub short_name: Option<String>,

    /// `direction_id`. Distinguishes between the two directions of
    /// travel for a route.
    pub direction_id: Option<DirectionId>,
}

impl HasId for Trip {
    type IdType = String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_round_trips_through_json() {
        let trip = Trip {
            id: Id::new("1".to_owned()),
            route_id: Id::new("RE83".to_owned()),
            service_id: Id::new("WD".to_owned()),
            headsign: Some("Kiel Hbf".to_owned()),
            short_name: None,
            direction_id: Some(DirectionId::Outbound),
        };
        let json = serde_json::to_string(&trip).unwrap();
        let back: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(trip, back);
    }
}
