use std::collections::HashMap;

use chrono::NaiveDate;
use model::agency::Agency;
use utility::id::Id;
use model::calendar::{Calendar, ServiceId};
use model::calendar_date::CalendarDate;
use model::route::{Route, RouteId};
use model::stop::{Stop, StopId};
use model::stop_time::StopTime;
use model::trip::{Trip, TripId};

/// The tables backing a single feed-hash namespace. Guarded as a whole
/// by a single `RwLock` in [`crate::MemoryStorage`] — readers and the
/// writer each hold their own clone of the `Arc`, so replacing the
/// namespace entry (a fresh `get_writer` call) does not disturb a
/// reader that obtained its handle beforehand.
#[derive(Debug, Default)]
pub struct FeedTables {
    pub agencies: HashMap<Id<Agency>, Agency>,
    pub stops: HashMap<StopId, Stop>,
    pub routes: HashMap<RouteId, Route>,
    pub trips: HashMap<TripId, Trip>,
    pub stop_times: HashMap<(TripId, u32), StopTime>,
    pub calendars: HashMap<ServiceId, Calendar>,
    pub calendar_dates: HashMap<(ServiceId, NaiveDate), CalendarDate>,
}
