//! Feed ingest pipeline: extracts a GTFS zip archive held entirely in
//! memory, validates every row before any write reaches storage, and
//! derives the [`FeedMetadata`] summary persisted alongside the tables.
//!
//! The table walk and progress logging follow `collector.rs`'s
//! `insert_tables`/`Progress`/`GtfsReport` shape, but unlike that
//! source this pipeline does not tolerate per-row failures: a malformed
//! or referentially broken row aborts the whole ingest rather than
//! being counted and skipped, since storage only exposes a destructive,
//! idempotent writer per hash and a partially written feed would be
//! indistinguishable from a complete one.

use std::collections::HashSet;
use std::io::Cursor;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use model::feed_metadata::FeedMetadata;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use storage::error::{CoreError, Result};
use storage::{FeedWriter, Storage};

use crate::data_model::agency::AgencyRow;
use crate::data_model::calendar::CalendarRow;
use crate::data_model::calendar_dates::CalendarDateRow;
use crate::data_model::routes::RouteRow;
use crate::data_model::stop_times::StopTimeRow;
use crate::data_model::stops::StopRow;
use crate::data_model::trips::TripRow;

/// Per-table row counts, logged once ingest completes successfully.
#[derive(Debug, Clone, Default, serde::Serialize)]
struct GtfsReport {
    agencies: usize,
    routes: usize,
    stops: usize,
    calendar_rows: usize,
    calendar_dates: usize,
    trips: usize,
    stop_times: usize,
}

impl GtfsReport {
    fn log(&self) {
        log::info!(
            "gtfs ingest report: {}",
            serde_json::to_string(self).unwrap_or_default()
        );
    }
}

struct Progress {
    counter: usize,
    step: usize,
}

impl Progress {
    fn new(step: usize) -> Self {
        Self { counter: 0, step }
    }

    fn inc(&mut self) {
        self.counter += 1;
        if self.counter % self.step == 0 {
            log::info!("ingest progress: {}", self.counter);
        }
    }
}

/// Reads `name` out of `archive`, returning `Ok(None)` if the entry is
/// absent rather than erroring, since several GTFS tables are optional.
///
/// Tables are matched by basename: a publisher that nests its tables
/// under a folder (e.g. `feed/agency.txt`) is tolerated the same as one
/// that stores them at the archive root.
fn read_table(archive: &mut zip::ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<Option<String>> {
    let index = archive
        .file_names()
        .find(|entry| std::path::Path::new(entry).file_name().and_then(|f| f.to_str()) == Some(name))
        .map(str::to_owned);
    let Some(index) = index else {
        return Ok(None);
    };
    let mut file = archive
        .by_name(&index)
        .map_err(|error| CoreError::Parse(format!("reading {name} from archive: {error}")))?;
    let mut content = String::new();
    std::io::Read::read_to_string(&mut file, &mut content)
        .map_err(|error| CoreError::Parse(format!("{name} is not valid UTF-8: {error}")))?;
    // Strip a leading byte-order mark; some GTFS publishers prepend one.
    if let Some(stripped) = content.strip_prefix('\u{feff}') {
        return Ok(Some(stripped.to_owned()));
    }
    Ok(Some(content))
}

/// Returns the first value that repeats in `items`, if any.
fn find_duplicate<T: Eq + std::hash::Hash + Clone>(items: impl Iterator<Item = T>) -> Option<T> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.clone()) {
            return Some(item);
        }
    }
    None
}

fn parse_rows<T: for<'de> Deserialize<'de>>(table: &str, content: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    reader
        .deserialize()
        .map(|row| row.map_err(|error| CoreError::Parse(format!("{table}: {error}"))))
        .collect()
}

/// One row of the optional `feed_info.txt`, used only for
/// `FeedMetadata::feed_start_date`/`feed_end_date`.
#[derive(Debug, Clone, Deserialize)]
struct FeedInfoRow {
    #[serde(default, deserialize_with = "crate::data_model::calendar::deserialize_yyyymmdd_option")]
    feed_start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::data_model::calendar::deserialize_yyyymmdd_option")]
    feed_end_date: Option<NaiveDate>,
}

/// Parses, validates and writes `archive` (a GTFS zip archive held in
/// memory) to `storage` under its content hash, returning the
/// [`FeedMetadata`] record for the ingested feed.
///
/// Every row across every table is validated, and every cross-table
/// reference checked, before any write is issued; a failure at any
/// point leaves `storage` untouched for this feed's hash.
pub async fn ingest_feed<S: Storage>(
    storage: &S,
    url: &str,
    archive: &[u8],
    now: DateTime<Utc>,
) -> Result<FeedMetadata> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))
        .map_err(|error| CoreError::Parse(format!("not a valid zip archive: {error}")))?;

    let agencies = require_table(&mut zip, "agency.txt")?;
    let routes_raw = require_table(&mut zip, "routes.txt")?;
    let stops_raw = require_table(&mut zip, "stops.txt")?;
    let trips_raw = require_table(&mut zip, "trips.txt")?;
    let stop_times_raw = require_table(&mut zip, "stop_times.txt")?;
    let calendar_raw = read_table(&mut zip, "calendar.txt")?;
    let calendar_dates_raw = read_table(&mut zip, "calendar_dates.txt")?;
    let feed_info_raw = read_table(&mut zip, "feed_info.txt")?;

    if calendar_raw.is_none() && calendar_dates_raw.is_none() {
        return Err(CoreError::Validation(
            "feed has neither calendar.txt nor calendar_dates.txt".into(),
        ));
    }

    let mut progress = Progress::new(1000);
    let mut report = GtfsReport::default();

    log::info!("parsing agencies...");
    let agency_rows: Vec<AgencyRow> = parse_rows("agency.txt", &agencies)?;
    let agencies = agency_rows
        .into_iter()
        .map(|row| {
            progress.inc();
            row.into_model()
        })
        .collect::<Result<Vec<_>>>()?;
    report.agencies = agencies.len();

    log::info!("parsing routes...");
    let route_rows: Vec<RouteRow> = parse_rows("routes.txt", &routes_raw)?;
    let routes = route_rows
        .into_iter()
        .map(|row| {
            progress.inc();
            row.into_model()
        })
        .collect::<Result<Vec<_>>>()?;
    report.routes = routes.len();

    log::info!("parsing stops...");
    let stop_rows: Vec<StopRow> = parse_rows("stops.txt", &stops_raw)?;
    let stops = stop_rows
        .into_iter()
        .map(|row| {
            progress.inc();
            row.into_model()
        })
        .collect::<Result<Vec<_>>>()?;
    report.stops = stops.len();

    let mut calendars = Vec::new();
    if let Some(content) = &calendar_raw {
        log::info!("parsing calendar...");
        let rows: Vec<CalendarRow> = parse_rows("calendar.txt", content)?;
        calendars = rows
            .into_iter()
            .map(|row| {
                progress.inc();
                row.into_model()
            })
            .collect::<Result<Vec<_>>>()?;
    }
    report.calendar_rows = calendars.len();

    let mut calendar_dates = Vec::new();
    if let Some(content) = &calendar_dates_raw {
        log::info!("parsing calendar dates...");
        let rows: Vec<CalendarDateRow> = parse_rows("calendar_dates.txt", content)?;
        calendar_dates = rows
            .into_iter()
            .map(|row| {
                progress.inc();
                row.into_model()
            })
            .collect::<Result<Vec<_>>>()?;
    }
    report.calendar_dates = calendar_dates.len();

    log::info!("parsing trips...");
    let trip_rows: Vec<TripRow> = parse_rows("trips.txt", &trips_raw)?;
    let trips = trip_rows
        .into_iter()
        .map(|row| {
            progress.inc();
            row.into_model()
        })
        .collect::<Result<Vec<_>>>()?;
    report.trips = trips.len();

    log::info!("parsing stop times...");
    let stop_time_rows: Vec<StopTimeRow> = parse_rows("stop_times.txt", &stop_times_raw)?;
    let stop_times = stop_time_rows
        .into_iter()
        .map(|row| {
            progress.inc();
            row.into_model()
        })
        .collect::<Result<Vec<_>>>()?;
    report.stop_times = stop_times.len();

    // Every table is writer-side keyed by its id (and calendar_dates.txt
    // by (service_id, date)); a repeated key would otherwise collapse
    // silently at the storage layer instead of failing ingest.
    if let Some(id) = find_duplicate(agencies.iter().map(|agency| agency.id.raw())) {
        return Err(CoreError::Validation(format!("duplicate agency_id {id}")));
    }
    if let Some(id) = find_duplicate(routes.iter().map(|route| route.id.raw())) {
        return Err(CoreError::Validation(format!("duplicate route_id {id}")));
    }
    if let Some(id) = find_duplicate(stops.iter().map(|stop| stop.id.raw())) {
        return Err(CoreError::Validation(format!("duplicate stop_id {id}")));
    }
    if let Some(id) = find_duplicate(trips.iter().map(|trip| trip.id.raw())) {
        return Err(CoreError::Validation(format!("duplicate trip_id {id}")));
    }
    if let Some(id) = find_duplicate(calendars.iter().map(|calendar| calendar.service_id.raw())) {
        return Err(CoreError::Validation(format!(
            "duplicate service_id {id} in calendar.txt"
        )));
    }
    if let Some((service_id, date)) =
        find_duplicate(calendar_dates.iter().map(|entry| (entry.service_id.raw(), entry.date)))
    {
        return Err(CoreError::Validation(format!(
            "duplicate calendar_dates.txt entry for service_id {service_id} on {date}"
        )));
    }

    // Referential integrity, checked in full before any write.
    let agency_ids: HashSet<_> = agencies.iter().map(|agency| agency.id.raw()).collect();
    let route_ids: HashSet<_> = routes.iter().map(|route| route.id.raw()).collect();
    let stop_ids: HashSet<_> = stops.iter().map(|stop| stop.id.raw()).collect();
    let trip_ids: HashSet<_> = trips.iter().map(|trip| trip.id.raw()).collect();
    let mut service_ids: HashSet<_> = calendars.iter().map(|calendar| calendar.service_id.raw()).collect();
    service_ids.extend(calendar_dates.iter().map(|date| date.service_id.raw()));

    for route in &routes {
        if let Some(agency_id) = &route.agency_id {
            if !agency_ids.contains(&agency_id.raw()) {
                return Err(CoreError::Validation(format!(
                    "route {} references unknown agency {}",
                    route.id, agency_id
                )));
            }
        }
    }
    for stop in &stops {
        if let Some(parent) = &stop.parent_station {
            if !stop_ids.contains(&parent.raw()) {
                return Err(CoreError::Validation(format!(
                    "stop {} references unknown parent_station {}",
                    stop.id, parent
                )));
            }
        }
    }
    for trip in &trips {
        if !route_ids.contains(&trip.route_id.raw()) {
            return Err(CoreError::Validation(format!(
                "trip {} references unknown route {}",
                trip.id, trip.route_id
            )));
        }
        if !service_ids.contains(&trip.service_id.raw()) {
            return Err(CoreError::Validation(format!(
                "trip {} references unknown service {}",
                trip.id, trip.service_id
            )));
        }
    }
    for stop_time in &stop_times {
        if !trip_ids.contains(&stop_time.trip_id.raw()) {
            return Err(CoreError::Validation(format!(
                "stop_time references unknown trip {}",
                stop_time.trip_id
            )));
        }
        if !stop_ids.contains(&stop_time.stop_id.raw()) {
            return Err(CoreError::Validation(format!(
                "stop_time on trip {} references unknown stop {}",
                stop_time.trip_id, stop_time.stop_id
            )));
        }
    }

    let timezone = agencies
        .first()
        .map(|agency| agency.timezone.clone())
        .ok_or_else(|| CoreError::Validation("feed has no agencies".into()))?;
    if agencies.iter().any(|agency| agency.timezone != timezone) {
        return Err(CoreError::Validation(
            "all agencies in a feed must share one timezone".into(),
        ));
    }
    Tz::from_str(&timezone)
        .map_err(|_| CoreError::Validation(format!("invalid feed timezone: {timezone}")))?;

    let calendar_start_date = calendars
        .iter()
        .map(|calendar| calendar.start_date)
        .chain(calendar_dates.iter().map(|date| date.date))
        .min()
        .ok_or_else(|| CoreError::Validation("feed has no service dates".into()))?;
    let calendar_end_date = calendars
        .iter()
        .map(|calendar| calendar.end_date)
        .chain(calendar_dates.iter().map(|date| date.date))
        .max()
        .ok_or_else(|| CoreError::Validation("feed has no service dates".into()))?;

    let (feed_start_date, feed_end_date) = match feed_info_raw {
        Some(content) => {
            let rows: Vec<FeedInfoRow> = parse_rows("feed_info.txt", &content)?;
            match rows.into_iter().next() {
                Some(row) => (row.feed_start_date, row.feed_end_date),
                None => (None, None),
            }
        }
        None => (None, None),
    };

    let max_arrival = stop_times
        .iter()
        .filter_map(|stop_time| stop_time.arrival_time)
        .max()
        .unwrap_or_default();
    let max_departure = stop_times
        .iter()
        .filter_map(|stop_time| stop_time.departure_time)
        .max()
        .unwrap_or_default();

    let hash = hex_encode(&Sha256::digest(archive));

    let mut writer = storage.get_writer(&hash).await?;
    for agency in agencies {
        writer.write_agency(agency).await?;
    }
    for stop in stops {
        writer.write_stop(stop).await?;
    }
    for route in routes {
        writer.write_route(route).await?;
    }
    writer.begin_trips().await?;
    for trip in trips {
        writer.write_trip(trip).await?;
    }
    writer.end_trips().await?;
    writer.begin_stop_times().await?;
    for stop_time in stop_times {
        writer.write_stop_time(stop_time).await?;
    }
    writer.end_stop_times().await?;
    for calendar in calendars {
        writer.write_calendar(calendar).await?;
    }
    for calendar_date in calendar_dates {
        writer.write_calendar_date(calendar_date).await?;
    }
    writer.close().await?;

    report.log();

    let metadata = FeedMetadata {
        url: url.to_owned(),
        hash,
        retrieved_at: now,
        updated_at: now,
        timezone,
        calendar_start_date,
        calendar_end_date,
        feed_start_date,
        feed_end_date,
        max_arrival,
        max_departure,
    };
    storage.write_feed_metadata(metadata.clone()).await?;
    Ok(metadata)
}

fn require_table(archive: &mut zip::ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<String> {
    read_table(archive, name)?.ok_or_else(|| CoreError::Validation(format!("feed is missing {name}")))
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(out, "{byte:02x}").expect("writing to a String never fails");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storage::FeedReader;

    fn build_archive(files: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
            let options = zip::write::SimpleFileOptions::default();
            for (name, content) in files {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        buffer
    }

    fn minimal_files() -> Vec<(&'static str, &'static str)> {
        vec![
            ("agency.txt", "agency_id,agency_name,agency_url,agency_timezone\n1,KVG,https://example.com,Europe/Berlin\n"),
            ("routes.txt", "route_id,agency_id,route_short_name,route_type\nR1,1,1,3\n"),
            ("stops.txt", "stop_id,stop_name,stop_lat,stop_lon\nS1,Hauptbahnhof,54.3,10.1\nS2,Hafen,54.32,10.13\n"),
            ("trips.txt", "trip_id,route_id,service_id\nT1,R1,WD\n"),
            (
                "stop_times.txt",
                "trip_id,arrival_time,departure_time,stop_id,stop_sequence\nT1,08:00:00,08:00:00,S1,1\nT1,08:10:00,08:10:00,S2,2\n",
            ),
            (
                "calendar.txt",
                "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\nWD,1,1,1,1,1,0,0,20200101,20201231\n",
            ),
        ]
    }

    #[tokio::test]
    async fn ingests_a_minimal_feed() {
        let storage = storage_memory::MemoryStorage::new();
        let archive = build_archive(&minimal_files());
        let metadata = ingest_feed(&storage, "https://example.com/gtfs.zip", &archive, Utc::now())
            .await
            .unwrap();
        assert_eq!(metadata.timezone, "Europe/Berlin");
        assert_eq!(
            metadata.calendar_start_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );

        let reader = storage.get_reader(&metadata.hash).await.unwrap();
        assert_eq!(reader.trips().await.unwrap().len(), 1);
        assert_eq!(reader.stop_times().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_route_reference_aborts_the_whole_ingest() {
        let storage = storage_memory::MemoryStorage::new();
        let mut files = minimal_files();
        files[3] = ("trips.txt", "trip_id,route_id,service_id\nT1,DOES_NOT_EXIST,WD\n");
        let archive = build_archive(&files);
        let result = ingest_feed(&storage, "https://example.com/gtfs.zip", &archive, Utc::now()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_required_table_is_rejected() {
        let storage = storage_memory::MemoryStorage::new();
        let mut files = minimal_files();
        files.retain(|(name, _)| *name != "stops.txt");
        let archive = build_archive(&files);
        let result = ingest_feed(&storage, "https://example.com/gtfs.zip", &archive, Utc::now()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn duplicate_trip_id_aborts_ingest() {
        let storage = storage_memory::MemoryStorage::new();
        let mut files = minimal_files();
        files[3] = ("trips.txt", "trip_id,route_id,service_id\nT1,R1,WD\nT1,R1,WD\n");
        let archive = build_archive(&files);
        let result = ingest_feed(&storage, "https://example.com/gtfs.zip", &archive, Utc::now()).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn tables_nested_under_a_folder_are_still_found() {
        let storage = storage_memory::MemoryStorage::new();
        let nested_names: Vec<(String, &str)> = minimal_files()
            .into_iter()
            .map(|(name, content)| (format!("feed/{name}"), content))
            .collect();
        let mut buffer = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
            let options = zip::write::SimpleFileOptions::default();
            for (name, content) in &nested_names {
                writer.start_file(name.as_str(), options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        let metadata = ingest_feed(&storage, "https://example.com/gtfs.zip", &buffer, Utc::now())
            .await
            .unwrap();
        let reader = storage.get_reader(&metadata.hash).await.unwrap();
        assert_eq!(reader.trips().await.unwrap().len(), 1);
    }
}
