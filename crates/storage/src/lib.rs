pub mod error;
pub mod filter;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use model::agency::Agency;
use model::calendar::{Calendar, ServiceId};
use model::calendar_date::CalendarDate;
use model::feed_metadata::FeedMetadata;
use model::feed_request::FeedRequest;
use model::route::Route;
use model::stop::Stop;
use model::stop_time::StopTime;
use model::trip::{Trip, TripId};

pub use error::{CoreError, Result};
pub use filter::{FeedFilter, NearbyStopsFilter, RouteDirection, StopTimeEvent, StopTimeFilter};

/// Bulk-ingest contract for a single, feed-hash-scoped namespace.
///
/// Trips and stop-times are bracketed so that backends may buffer and
/// batch-insert them; `close` finalizes the writer and must be safe to
/// call exactly once. A writer obtained from [`Storage::get_writer`] is
/// idempotent: opening one for a hash clears any data previously
/// written for that hash.
#[async_trait]
pub trait FeedWriter: Send {
    async fn write_agency(&mut self, agency: Agency) -> Result<()>;
    async fn write_stop(&mut self, stop: Stop) -> Result<()>;
    async fn write_route(&mut self, route: Route) -> Result<()>;

    async fn begin_trips(&mut self) -> Result<()>;
    async fn write_trip(&mut self, trip: Trip) -> Result<()>;
    async fn end_trips(&mut self) -> Result<()>;

    async fn begin_stop_times(&mut self) -> Result<()>;
    async fn write_stop_time(&mut self, stop_time: StopTime) -> Result<()>;
    async fn end_stop_times(&mut self) -> Result<()>;

    async fn write_calendar(&mut self, calendar: Calendar) -> Result<()>;
    async fn write_calendar_date(&mut self, calendar_date: CalendarDate) -> Result<()>;

    async fn close(&mut self) -> Result<()>;
}

/// Read-side contract for a single, feed-hash-scoped namespace.
#[async_trait]
pub trait FeedReader: Send + Sync {
    async fn agencies(&self) -> Result<Vec<Agency>>;
    async fn stops(&self) -> Result<Vec<Stop>>;
    async fn routes(&self) -> Result<Vec<Route>>;
    async fn trips(&self) -> Result<Vec<Trip>>;
    async fn stop_times(&self) -> Result<Vec<StopTime>>;
    async fn calendars(&self) -> Result<Vec<Calendar>>;
    async fn calendar_dates(&self) -> Result<Vec<CalendarDate>>;

    /// Resolves the set of services active on `date` by composing the
    /// weekly `calendar.txt` pattern with `calendar_dates.txt`
    /// exceptions. See the calendar resolver: Active = (Regular −
    /// removed) ∪ added. Returns an empty set, never an error, when no
    /// service is active.
    async fn active_services(&self, date: NaiveDate) -> Result<Vec<ServiceId>>;

    /// The `(min, max)` stop_sequence observed per trip, used to
    /// identify terminal stops for exclusion from departure results.
    async fn min_max_stop_seq(&self) -> Result<HashMap<TripId, (u32, u32)>>;

    async fn stop_time_events(&self, filter: &StopTimeFilter) -> Result<Vec<StopTimeEvent>>;

    /// Route/direction pairs observed at `stop_id`, each with every
    /// distinct headsign seen (stop-time headsign if non-empty, else
    /// the trip's headsign). Trips whose terminal stop is `stop_id`
    /// are excluded.
    async fn route_directions(&self, stop_id: &model::stop::StopId) -> Result<Vec<RouteDirection>>;

    async fn nearby_stops(&self, filter: &NearbyStopsFilter) -> Result<Vec<Stop>>;
}

/// Top-level storage contract: feed/feed-request metadata plus access to
/// a per-hash [`FeedReader`]/[`FeedWriter`] pair.
#[async_trait]
pub trait Storage: Send + Sync {
    type Reader: FeedReader;
    type Writer: FeedWriter;

    async fn list_feeds(&self, filter: &FeedFilter) -> Result<Vec<FeedMetadata>>;
    /// Upserts by the `(hash, url)` key.
    async fn write_feed_metadata(&self, metadata: FeedMetadata) -> Result<()>;
    async fn delete_feed_metadata(&self, url: &str, hash: &str) -> Result<()>;

    async fn list_feed_requests(&self, url: Option<&str>) -> Result<Vec<FeedRequest>>;
    /// Upserts by `url`; consumer entries are merged by `name`, never
    /// implicitly deleted.
    async fn write_feed_request(&self, request: FeedRequest) -> Result<()>;

    async fn get_reader(&self, hash: &str) -> Result<Self::Reader>;
    /// Idempotent: clears any data previously written for `hash`.
    async fn get_writer(&self, hash: &str) -> Result<Self::Writer>;
}

/// Options accepted by [`Downloader::get`].
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Reject responses larger than this many bytes.
    pub max_size: Option<u64>,
    pub timeout: Option<std::time::Duration>,
    /// Whether a cached response may be returned instead of refetching.
    pub cache: bool,
    pub cache_ttl: Option<std::time::Duration>,
}

/// External collaborator the ingest pipeline uses to fetch feed
/// archives and realtime messages. The core consumes this as an
/// abstract interface; implementations may memoize by URL with a TTL.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>>;
}
