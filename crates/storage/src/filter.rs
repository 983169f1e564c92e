use chrono::Duration;
use model::calendar::ServiceId;
use model::route::RouteId;
use model::route::RouteType;
use model::stop::{Stop, StopId};
use model::trip::{DirectionId, TripId};

/// Selects a subset of `list_feeds`' results. Absent fields mean "no
/// restriction".
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub url: Option<String>,
    pub hash: Option<String>,
}

/// Conjunctive filter for [`crate::FeedReader::stop_time_events`].
/// Every field is optional; an empty/absent field applies no
/// restriction.
#[derive(Debug, Clone, Default)]
pub struct StopTimeFilter {
    /// If the referenced stop has `location_type = Station`, matches
    /// every child stop whose `parent_station` equals it; otherwise
    /// restricts to the stop itself.
    pub stop_id: Option<StopId>,

    pub service_ids: Vec<ServiceId>,
    pub route_id: Option<RouteId>,
    pub route_types: Vec<RouteType>,
    pub trip_ids: Vec<TripId>,

    /// `None` means "any direction".
    pub direction_id: Option<DirectionId>,

    pub arrival_start: Option<Duration>,
    pub arrival_end: Option<Duration>,
    pub departure_start: Option<Duration>,
    pub departure_end: Option<Duration>,
}

/// A stop-time joined with its trip, route, and stop, as returned by
/// [`crate::FeedReader::stop_time_events`].
#[derive(Debug, Clone)]
pub struct StopTimeEvent {
    pub trip_id: TripId,
    pub route_id: RouteId,
    pub stop_id: StopId,
    /// The stop's parent station, if it has one, resolved eagerly.
    pub parent_stop: Option<Stop>,
    pub stop_sequence: u32,
    pub direction_id: Option<DirectionId>,
    pub headsign: Option<String>,
    pub arrival_time: Option<Duration>,
    pub departure_time: Option<Duration>,
}

/// Inputs to [`crate::FeedReader::nearby_stops`].
#[derive(Debug, Clone)]
pub struct NearbyStopsFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub limit: usize,
    pub route_types: Vec<RouteType>,
}

/// One row of `route_directions(stop_id)`: a route/direction pair
/// observed at a stop, with every distinct headsign seen on it.
#[derive(Debug, Clone)]
pub struct RouteDirection {
    pub route_id: RouteId,
    pub direction_id: Option<DirectionId>,
    pub headsigns: Vec<String>,
}
