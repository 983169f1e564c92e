//! In-memory reference implementation of the [`storage::Storage`] contract.
//!
//! Grounded on the teacher's `crates/gtfs/src/database.rs`
//! `InMemoryPrimaryKeyTable` pattern, generalized to the full
//! `Storage`/`FeedReader`/`FeedWriter` contract and guarded by a
//! `RwLock` per feed-hash namespace (§5, §9 of the design notes).
//! Suitable as a standalone backend for small feeds and for exercising
//! the query/overlay engines in tests without a real database.

pub mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;
use model::agency::Agency;
use model::calendar::ServiceId;
use model::calendar_date::ExceptionType;
use model::feed_metadata::FeedMetadata;
use model::feed_request::FeedRequest;
use model::route::{Route, RouteId};
use model::stop::{LocationType, Stop, StopId};
use model::stop_time::StopTime;
use model::trip::{Trip, TripId};
use storage::error::{CoreError, Result};
use storage::filter::{FeedFilter, NearbyStopsFilter, RouteDirection, StopTimeEvent, StopTimeFilter};
use storage::{FeedReader, FeedWriter, Storage};
use utility::geo::haversine_distance;

use tables::FeedTables;

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// A namespace-scoped read handle. Holds its own `Arc` so it keeps
/// working against the snapshot it was handed even if a concurrent
/// `get_writer` call for the same hash replaces the namespace entry
/// afterward.
pub struct MemoryReader {
    tables: Arc<RwLock<FeedTables>>,
}

/// A namespace-scoped write handle. `begin_trips`/`begin_stop_times`
/// brackets are tracked locally so misuse (writing outside a bracket)
/// is caught without needing the lock held across the whole ingest.
pub struct MemoryWriter {
    tables: Arc<RwLock<FeedTables>>,
    trips_open: bool,
    stop_times_open: bool,
    closed: bool,
}

impl MemoryWriter {
    fn new(tables: Arc<RwLock<FeedTables>>) -> Self {
        Self {
            tables,
            trips_open: false,
            stop_times_open: false,
            closed: false,
        }
    }
}

#[async_trait]
impl FeedWriter for MemoryWriter {
    async fn write_agency(&mut self, agency: Agency) -> Result<()> {
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .agencies
            .insert(agency.id.clone(), agency);
        Ok(())
    }

    async fn write_stop(&mut self, stop: Stop) -> Result<()> {
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .stops
            .insert(stop.id.clone(), stop);
        Ok(())
    }

    async fn write_route(&mut self, route: Route) -> Result<()> {
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .routes
            .insert(route.id.clone(), route);
        Ok(())
    }

    async fn begin_trips(&mut self) -> Result<()> {
        self.trips_open = true;
        Ok(())
    }

    async fn write_trip(&mut self, trip: Trip) -> Result<()> {
        if !self.trips_open {
            return Err(CoreError::Validation(
                "write_trip called outside begin_trips/end_trips bracket".to_owned(),
            ));
        }
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .trips
            .insert(trip.id.clone(), trip);
        Ok(())
    }

    async fn end_trips(&mut self) -> Result<()> {
        self.trips_open = false;
        Ok(())
    }

    async fn begin_stop_times(&mut self) -> Result<()> {
        self.stop_times_open = true;
        Ok(())
    }

    async fn write_stop_time(&mut self, stop_time: StopTime) -> Result<()> {
        if !self.stop_times_open {
            return Err(CoreError::Validation(
                "write_stop_time called outside begin_stop_times/end_stop_times bracket".to_owned(),
            ));
        }
        let key = (stop_time.trip_id.clone(), stop_time.stop_sequence);
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .stop_times
            .insert(key, stop_time);
        Ok(())
    }

    async fn end_stop_times(&mut self) -> Result<()> {
        self.stop_times_open = false;
        Ok(())
    }

    async fn write_calendar(&mut self, calendar: model::calendar::Calendar) -> Result<()> {
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .calendars
            .insert(calendar.service_id.clone(), calendar);
        Ok(())
    }

    async fn write_calendar_date(&mut self, calendar_date: model::calendar_date::CalendarDate) -> Result<()> {
        let key = (calendar_date.service_id.clone(), calendar_date.date);
        self.tables
            .write()
            .map_err(|_| CoreError::Backend(poison_error()))?
            .calendar_dates
            .insert(key, calendar_date);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        // Safe to call more than once: close is idempotent.
        self.closed = true;
        Ok(())
    }
}

fn poison_error() -> Arc<dyn std::error::Error + Send + Sync> {
    Arc::new(std::io::Error::other("in-memory storage lock poisoned"))
}

#[async_trait]
impl FeedReader for MemoryReader {
    async fn agencies(&self) -> Result<Vec<Agency>> {
        Ok(self.lock()?.agencies.values().cloned().collect())
    }

    async fn stops(&self) -> Result<Vec<Stop>> {
        Ok(self.lock()?.stops.values().cloned().collect())
    }

    async fn routes(&self) -> Result<Vec<Route>> {
        Ok(self.lock()?.routes.values().cloned().collect())
    }

    async fn trips(&self) -> Result<Vec<Trip>> {
        Ok(self.lock()?.trips.values().cloned().collect())
    }

    async fn stop_times(&self) -> Result<Vec<StopTime>> {
        Ok(self.lock()?.stop_times.values().cloned().collect())
    }

    async fn calendars(&self) -> Result<Vec<model::calendar::Calendar>> {
        Ok(self.lock()?.calendars.values().cloned().collect())
    }

    async fn calendar_dates(&self) -> Result<Vec<model::calendar_date::CalendarDate>> {
        Ok(self.lock()?.calendar_dates.values().cloned().collect())
    }

    async fn active_services(&self, date: NaiveDate) -> Result<Vec<ServiceId>> {
        let tables = self.lock()?;

        let mut regular: HashSet<ServiceId> = tables
            .calendars
            .values()
            .filter(|calendar| calendar.runs_on(date))
            .map(|calendar| calendar.service_id.clone())
            .collect();

        let mut added = HashSet::new();
        let mut removed = HashSet::new();
        for exception in tables.calendar_dates.values().filter(|entry| entry.date == date) {
            match exception.exception_type {
                ExceptionType::Added => {
                    added.insert(exception.service_id.clone());
                }
                ExceptionType::Removed => {
                    removed.insert(exception.service_id.clone());
                }
            }
        }

        regular.retain(|service_id| !removed.contains(service_id));
        regular.extend(added);

        Ok(regular.into_iter().collect())
    }

    async fn min_max_stop_seq(&self) -> Result<HashMap<TripId, (u32, u32)>> {
        let tables = self.lock()?;
        let mut bounds: HashMap<TripId, (u32, u32)> = HashMap::new();
        for stop_time in tables.stop_times.values() {
            bounds
                .entry(stop_time.trip_id.clone())
                .and_modify(|(min, max)| {
                    *min = (*min).min(stop_time.stop_sequence);
                    *max = (*max).max(stop_time.stop_sequence);
                })
                .or_insert((stop_time.stop_sequence, stop_time.stop_sequence));
        }
        Ok(bounds)
    }

    async fn stop_time_events(&self, filter: &StopTimeFilter) -> Result<Vec<StopTimeEvent>> {
        let tables = self.lock()?;

        let allowed_stops: Option<HashSet<StopId>> = match &filter.stop_id {
            None => None,
            Some(stop_id) => match tables.stops.get(stop_id) {
                Some(stop) if stop.location_type == LocationType::Station => {
                    let mut children: HashSet<StopId> = tables
                        .stops
                        .values()
                        .filter(|candidate| candidate.parent_station.as_ref() == Some(stop_id))
                        .map(|candidate| candidate.id.clone())
                        .collect();
                    children.insert(stop_id.clone());
                    Some(children)
                }
                _ => Some(HashSet::from([stop_id.clone()])),
            },
        };

        let service_ids: HashSet<&ServiceId> = filter.service_ids.iter().collect();
        let trip_ids: HashSet<&TripId> = filter.trip_ids.iter().collect();
        let route_types: HashSet<_> = filter.route_types.iter().collect();

        let mut events = Vec::new();
        for stop_time in tables.stop_times.values() {
            if let Some(allowed) = &allowed_stops {
                if !allowed.contains(&stop_time.stop_id) {
                    continue;
                }
            }
            if !trip_ids.is_empty() && !trip_ids.contains(&stop_time.trip_id) {
                continue;
            }

            let Some(trip) = tables.trips.get(&stop_time.trip_id) else {
                continue;
            };

            if !service_ids.is_empty() && !service_ids.contains(&trip.service_id) {
                continue;
            }
            if let Some(route_id) = &filter.route_id {
                if &trip.route_id != route_id {
                    continue;
                }
            }
            if let Some(direction_id) = filter.direction_id {
                if trip.direction_id != Some(direction_id) {
                    continue;
                }
            }

            let Some(route) = tables.routes.get(&trip.route_id) else {
                continue;
            };
            if !route_types.is_empty() && !route_types.contains(&route.route_type) {
                continue;
            }

            if !within_bounds(stop_time.arrival_time, filter.arrival_start, filter.arrival_end) {
                continue;
            }
            if !within_bounds(stop_time.departure_time, filter.departure_start, filter.departure_end) {
                continue;
            }

            let stop = tables.stops.get(&stop_time.stop_id);
            let parent_stop = stop
                .and_then(|stop| stop.parent_station.as_ref())
                .and_then(|parent_id| tables.stops.get(parent_id))
                .cloned();

            let headsign = non_empty(&stop_time.stop_headsign)
                .or_else(|| non_empty(&trip.headsign))
                .map(str::to_owned);

            events.push(StopTimeEvent {
                trip_id: stop_time.trip_id.clone(),
                route_id: trip.route_id.clone(),
                stop_id: stop_time.stop_id.clone(),
                parent_stop,
                stop_sequence: stop_time.stop_sequence,
                direction_id: trip.direction_id,
                headsign,
                arrival_time: stop_time.arrival_time,
                departure_time: stop_time.departure_time,
            });
        }

        // Primarily by arrival time ascending; departure time as tiebreak.
        // `sort_by` is stable, preserving insertion order for remaining ties.
        events.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then(a.departure_time.cmp(&b.departure_time))
        });

        Ok(events)
    }

    async fn route_directions(&self, stop_id: &StopId) -> Result<Vec<RouteDirection>> {
        let tables = self.lock()?;

        let mut terminal_stop_sequence: HashMap<TripId, u32> = HashMap::new();
        for stop_time in tables.stop_times.values() {
            terminal_stop_sequence
                .entry(stop_time.trip_id.clone())
                .and_modify(|max| *max = (*max).max(stop_time.stop_sequence))
                .or_insert(stop_time.stop_sequence);
        }

        let mut entries: HashMap<(RouteId, Option<model::trip::DirectionId>), Vec<String>> = HashMap::new();
        for stop_time in tables.stop_times.values().filter(|stop_time| &stop_time.stop_id == stop_id) {
            let Some(trip) = tables.trips.get(&stop_time.trip_id) else {
                continue;
            };
            let is_terminal = terminal_stop_sequence.get(&stop_time.trip_id) == Some(&stop_time.stop_sequence);
            if is_terminal {
                continue;
            }

            let headsign = non_empty(&stop_time.stop_headsign).or_else(|| non_empty(&trip.headsign));
            let Some(headsign) = headsign else {
                continue;
            };

            let key = (trip.route_id.clone(), trip.direction_id);
            let headsigns = entries.entry(key).or_default();
            if !headsigns.iter().any(|existing| existing == headsign) {
                headsigns.push(headsign.to_owned());
            }
        }

        Ok(entries
            .into_iter()
            .map(|((route_id, direction_id), headsigns)| RouteDirection {
                route_id,
                direction_id,
                headsigns,
            })
            .collect())
    }

    async fn nearby_stops(&self, filter: &NearbyStopsFilter) -> Result<Vec<Stop>> {
        let tables = self.lock()?;

        let mut candidates: Vec<Stop> = if filter.route_types.is_empty() {
            tables
                .stops
                .values()
                .filter(|stop| {
                    stop.location_type == LocationType::Station
                        || (stop.location_type == LocationType::StopOrPlatform && stop.parent_station.is_none())
                })
                .cloned()
                .collect()
        } else {
            let route_types: HashSet<_> = filter.route_types.iter().collect();

            let mut trip_route_type: HashMap<&TripId, model::route::RouteType> = HashMap::new();
            for trip in tables.trips.values() {
                if let Some(route) = tables.routes.get(&trip.route_id) {
                    trip_route_type.insert(&trip.id, route.route_type);
                }
            }

            let mut matching_stop_ids: HashSet<StopId> = HashSet::new();
            for stop_time in tables.stop_times.values() {
                if let Some(route_type) = trip_route_type.get(&stop_time.trip_id) {
                    if route_types.contains(route_type) {
                        matching_stop_ids.insert(stop_time.stop_id.clone());
                    }
                }
            }

            let mut seen = HashSet::new();
            let mut result = Vec::new();
            for stop_id in matching_stop_ids {
                let Some(stop) = tables.stops.get(&stop_id) else {
                    continue;
                };
                if stop.location_type != LocationType::StopOrPlatform {
                    continue;
                }
                let resolved = match &stop.parent_station {
                    Some(parent_id) => tables.stops.get(parent_id).unwrap_or(stop),
                    None => stop,
                };
                if seen.insert(resolved.id.clone()) {
                    result.push(resolved.clone());
                }
            }
            result
        };

        candidates.retain(|stop| stop.lat.is_some() && stop.lon.is_some());

        candidates.sort_by(|a, b| {
            let distance_a = haversine_distance(filter.latitude, filter.longitude, a.lat.unwrap(), a.lon.unwrap());
            let distance_b = haversine_distance(filter.latitude, filter.longitude, b.lat.unwrap(), b.lon.unwrap());
            distance_a.total_cmp(&distance_b)
        });

        if filter.limit > 0 {
            candidates.truncate(filter.limit);
        }

        Ok(candidates)
    }
}

impl MemoryReader {
    fn lock(&self) -> Result<std::sync::RwLockReadGuard<'_, FeedTables>> {
        self.tables.read().map_err(|_| CoreError::Backend(poison_error()))
    }
}

fn within_bounds(value: Option<chrono::Duration>, start: Option<chrono::Duration>, end: Option<chrono::Duration>) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    if let Some(start) = start {
        if value < start {
            return false;
        }
    }
    if let Some(end) = end {
        if value > end {
            return false;
        }
    }
    true
}

/// In-memory [`Storage`] implementation. Each feed hash owns its own
/// `FeedTables` namespace behind an `Arc<RwLock<_>>`; feed/feed-request
/// metadata live in their own locks so listing feeds never contends
/// with a concurrent ingest.
#[derive(Default)]
pub struct MemoryStorage {
    namespaces: RwLock<HashMap<String, Arc<RwLock<FeedTables>>>>,
    feeds: RwLock<HashMap<(String, String), FeedMetadata>>,
    feed_requests: RwLock<HashMap<String, FeedRequest>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    type Reader = MemoryReader;
    type Writer = MemoryWriter;

    async fn list_feeds(&self, filter: &FeedFilter) -> Result<Vec<FeedMetadata>> {
        let feeds = self.feeds.read().map_err(|_| CoreError::Backend(poison_error()))?;
        Ok(feeds
            .values()
            .filter(|feed| filter.url.as_deref().map_or(true, |url| url == feed.url))
            .filter(|feed| filter.hash.as_deref().map_or(true, |hash| hash == feed.hash))
            .cloned()
            .collect())
    }

    async fn write_feed_metadata(&self, metadata: FeedMetadata) -> Result<()> {
        let mut feeds = self.feeds.write().map_err(|_| CoreError::Backend(poison_error()))?;
        feeds.insert((metadata.hash.clone(), metadata.url.clone()), metadata);
        Ok(())
    }

    async fn delete_feed_metadata(&self, url: &str, hash: &str) -> Result<()> {
        let mut feeds = self.feeds.write().map_err(|_| CoreError::Backend(poison_error()))?;
        feeds.remove(&(hash.to_owned(), url.to_owned()));
        Ok(())
    }

    async fn list_feed_requests(&self, url: Option<&str>) -> Result<Vec<FeedRequest>> {
        let requests = self.feed_requests.read().map_err(|_| CoreError::Backend(poison_error()))?;
        Ok(requests
            .values()
            .filter(|request| url.map_or(true, |url| url == request.url))
            .cloned()
            .collect())
    }

    async fn write_feed_request(&self, request: FeedRequest) -> Result<()> {
        let mut requests = self.feed_requests.write().map_err(|_| CoreError::Backend(poison_error()))?;
        match requests.get_mut(&request.url) {
            Some(existing) => {
                existing.refreshed_at = request.refreshed_at;
                for consumer in request.consumers {
                    match existing.consumers.iter_mut().find(|candidate| candidate.name == consumer.name) {
                        Some(slot) => *slot = consumer,
                        None => existing.consumers.push(consumer),
                    }
                }
            }
            None => {
                requests.insert(request.url.clone(), request);
            }
        }
        Ok(())
    }

    async fn get_reader(&self, hash: &str) -> Result<Self::Reader> {
        let namespaces = self.namespaces.read().map_err(|_| CoreError::Backend(poison_error()))?;
        let tables = namespaces
            .get(hash)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("no feed with hash {hash}")))?;
        Ok(MemoryReader { tables })
    }

    async fn get_writer(&self, hash: &str) -> Result<Self::Writer> {
        let mut namespaces = self.namespaces.write().map_err(|_| CoreError::Backend(poison_error()))?;
        let tables = Arc::new(RwLock::new(FeedTables::default()));
        namespaces.insert(hash.to_owned(), tables.clone());
        Ok(MemoryWriter::new(tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::calendar::Calendar;
    use model::route::RouteType;
    use model::trip::DirectionId;
    use utility::id::Id;

    async fn ingest_basic_feed(storage: &MemoryStorage) {
        let mut writer = storage.get_writer("hash1").await.unwrap();
        writer
            .write_route(Route {
                id: Id::new("R1".to_owned()),
                agency_id: None,
                short_name: Some("R1".to_owned()),
                long_name: None,
                desc: None,
                route_type: RouteType::Bus,
                url: None,
                color: None,
                text_color: None,
            })
            .await
            .unwrap();
        writer
            .write_stop(Stop {
                id: Id::new("s1".to_owned()),
                code: None,
                name: Some("Stop 1".to_owned()),
                desc: None,
                lat: Some(54.0),
                lon: Some(10.0),
                url: None,
                location_type: LocationType::StopOrPlatform,
                parent_station: None,
                platform_code: None,
            })
            .await
            .unwrap();
        writer
            .write_stop(Stop {
                id: Id::new("s2".to_owned()),
                code: None,
                name: Some("Stop 2".to_owned()),
                desc: None,
                lat: Some(54.1),
                lon: Some(10.1),
                url: None,
                location_type: LocationType::StopOrPlatform,
                parent_station: None,
                platform_code: None,
            })
            .await
            .unwrap();
        writer
            .write_calendar(Calendar {
                service_id: Id::new("WD".to_owned()),
                monday: true,
                tuesday: true,
                wednesday: true,
                thursday: true,
                friday: true,
                saturday: false,
                sunday: false,
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            })
            .await
            .unwrap();

        writer.begin_trips().await.unwrap();
        writer
            .write_trip(Trip {
                id: Id::new("t1".to_owned()),
                route_id: Id::new("R1".to_owned()),
                service_id: Id::new("WD".to_owned()),
                headsign: Some("Downtown".to_owned()),
                short_name: None,
                direction_id: Some(DirectionId::Outbound),
            })
            .await
            .unwrap();
        writer.end_trips().await.unwrap();

        writer.begin_stop_times().await.unwrap();
        writer
            .write_stop_time(StopTime {
                trip_id: Id::new("t1".to_owned()),
                stop_sequence: 1,
                stop_id: Id::new("s1".to_owned()),
                arrival_time: Some(chrono::Duration::hours(23)),
                departure_time: Some(chrono::Duration::hours(23)),
                stop_headsign: None,
            })
            .await
            .unwrap();
        writer
            .write_stop_time(StopTime {
                trip_id: Id::new("t1".to_owned()),
                stop_sequence: 2,
                stop_id: Id::new("s2".to_owned()),
                arrival_time: Some(chrono::Duration::hours(23) + chrono::Duration::minutes(1)),
                departure_time: Some(chrono::Duration::hours(23) + chrono::Duration::minutes(1)),
                stop_headsign: None,
            })
            .await
            .unwrap();
        writer.end_stop_times().await.unwrap();
        writer.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_reader_fails_for_unknown_hash() {
        let storage = MemoryStorage::new();
        let result = storage.get_reader("missing").await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_writer_is_idempotent_per_hash() {
        let storage = MemoryStorage::new();
        ingest_basic_feed(&storage).await;
        // Re-opening the writer for the same hash clears prior data.
        let mut writer = storage.get_writer("hash1").await.unwrap();
        writer.close().await.unwrap();

        let reader = storage.get_reader("hash1").await.unwrap();
        assert!(reader.stops().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn active_services_composes_weekday_and_exceptions() {
        let storage = MemoryStorage::new();
        ingest_basic_feed(&storage).await;
        let reader = storage.get_reader("hash1").await.unwrap();

        let monday = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        let active = reader.active_services(monday).await.unwrap();
        assert_eq!(active, vec![Id::new("WD".to_owned())]);

        let saturday = NaiveDate::from_ymd_opt(2020, 1, 4).unwrap();
        let active = reader.active_services(saturday).await.unwrap();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn stop_time_events_orders_by_arrival_then_departure() {
        let storage = MemoryStorage::new();
        ingest_basic_feed(&storage).await;
        let reader = storage.get_reader("hash1").await.unwrap();

        let events = reader
            .stop_time_events(&StopTimeFilter::default())
            .await
            .unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].arrival_time <= events[1].arrival_time);
    }

    #[tokio::test]
    async fn nearby_stops_orders_by_distance() {
        let storage = MemoryStorage::new();
        ingest_basic_feed(&storage).await;
        let reader = storage.get_reader("hash1").await.unwrap();

        let stops = reader
            .nearby_stops(&NearbyStopsFilter {
                latitude: 54.0,
                longitude: 10.0,
                limit: 1,
                route_types: vec![],
            })
            .await
            .unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].id, Id::new("s1".to_owned()));
    }

    #[tokio::test]
    async fn route_directions_excludes_terminal_stop() {
        let storage = MemoryStorage::new();
        ingest_basic_feed(&storage).await;
        let reader = storage.get_reader("hash1").await.unwrap();

        let directions = reader.route_directions(&Id::new("s2".to_owned())).await.unwrap();
        assert!(directions.is_empty(), "s2 is the terminal stop of t1");

        let directions = reader.route_directions(&Id::new("s1".to_owned())).await.unwrap();
        assert_eq!(directions.len(), 1);
        assert_eq!(directions[0].headsigns, vec!["Downtown".to_owned()]);
    }
}
