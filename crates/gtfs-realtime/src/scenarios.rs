//! End-to-end scenarios combining ingest, the static query engine, and
//! the realtime overlay against an in-memory backend: the §8 literal
//! scenarios (S1-S5), run through the full pipeline rather than against
//! synthetic fixtures, so a regression in how the pieces are wired
//! together (not just in one module's unit tests) would be caught here.

#![cfg(test)]

use std::io::Write as _;

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use gtfs::ingest::ingest_feed;
use gtfs::query::{departures, DepartureRequest};
use storage::{FeedReader, Storage};
use storage_memory::MemoryStorage;
use utility::id::Id;

use crate::overlay::Overlay;
use crate::parser::{ParsedRealtime, StopTimeUpdateKind, StopTimeUpdateRecord};

fn build_zip(files: &[(&str, String)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }
    buffer
}

/// Two trips on one route, calendar active every day of 2020, matching
/// §8 scenarios S1-S4: t1 departs s1 23:00:00/s2 23:01:00/s3 23:02:00,
/// t2 departs s1 23:10:00/s2 23:11:00.
fn basic_feed_zip() -> Vec<u8> {
    build_zip(&[
        (
            "agency.txt",
            "agency_id,agency_name,agency_url,agency_timezone\n1,KVG,https://example.com,Europe/Berlin\n".to_owned(),
        ),
        (
            "routes.txt",
            "route_id,agency_id,route_short_name,route_type\nR1,1,1,3\n".to_owned(),
        ),
        (
            "stops.txt",
            "stop_id,stop_name,stop_lat,stop_lon\nS1,Platz,54.3,10.1\nS2,Hafen,54.32,10.13\nS3,Bahnhof,54.34,10.16\n"
                .to_owned(),
        ),
        (
            "trips.txt",
            "trip_id,route_id,service_id,trip_headsign\nT1,R1,WD,Bahnhof\nT2,R1,WD,Bahnhof\n".to_owned(),
        ),
        (
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             T1,23:00:00,23:00:00,S1,1\nT1,23:01:00,23:01:00,S2,2\nT1,23:02:00,23:02:00,S3,3\n\
             T2,23:10:00,23:10:00,S1,1\nT2,23:11:00,23:11:00,S2,2\n"
                .to_owned(),
        ),
        (
            "calendar.txt",
            "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
             WD,1,1,1,1,1,1,1,20200101,20201231\n"
                .to_owned(),
        ),
    ])
}

fn berlin_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<FixedOffset> {
    chrono_tz::Europe::Berlin
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
        .fixed_offset()
}

async fn ingest_basic() -> (MemoryStorage, model::feed_metadata::FeedMetadata) {
    let storage = MemoryStorage::new();
    let metadata = ingest_feed(&storage, "https://example.com/gtfs.zip", &basic_feed_zip(), Utc::now())
        .await
        .unwrap();
    (storage, metadata)
}

#[tokio::test]
async fn s1_basic_static_departures() {
    let (storage, metadata) = ingest_basic().await;
    let reader = storage.get_reader(&metadata.hash).await.unwrap();

    let request = DepartureRequest {
        stop_id: Id::new("S1".to_owned()),
        window_start: berlin_time(2020, 1, 15, 23, 0),
        window_length: Duration::minutes(10),
        limit: -1,
        route_id: None,
        direction_id: None,
        route_types: Vec::new(),
    };
    let result = departures(&reader, &metadata, &request).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].trip_id, Id::new("T1".to_owned()));
    assert_eq!(result[0].time, berlin_time(2020, 1, 15, 23, 0));
    assert_eq!(result[1].trip_id, Id::new("T2".to_owned()));
    assert_eq!(result[1].time, berlin_time(2020, 1, 15, 23, 10));
}

#[tokio::test]
async fn s2_delay_propagates_to_later_unannotated_stops() {
    let (storage, metadata) = ingest_basic().await;
    let reader = storage.get_reader(&metadata.hash).await.unwrap();

    let request = DepartureRequest {
        stop_id: Id::new("S2".to_owned()),
        window_start: berlin_time(2020, 1, 15, 23, 0),
        window_length: Duration::minutes(20),
        limit: -1,
        route_id: None,
        direction_id: None,
        route_types: Vec::new(),
    };
    let static_result = departures(&reader, &metadata, &request).await.unwrap();
    assert_eq!(static_result.len(), 2);

    let realtime = ParsedRealtime {
        canceled_trips: Default::default(),
        trip_updates: std::collections::HashMap::from([(
            Id::new("T1".to_owned()),
            vec![StopTimeUpdateRecord {
                stop_id: None,
                stop_sequence: Some(2),
                arrival_time: None,
                arrival_delay: None,
                departure_time: None,
                departure_delay: Some(Duration::seconds(30)),
                kind: StopTimeUpdateKind::Scheduled,
            }],
        )]),
    };
    let overlay = Overlay::new(realtime);
    let adjusted = overlay.apply(static_result);

    let t1 = adjusted.iter().find(|d| d.trip_id == Id::new("T1".to_owned())).unwrap();
    assert_eq!(t1.time, berlin_time(2020, 1, 15, 23, 1) + Duration::seconds(30));
    assert_eq!(t1.delay, Duration::seconds(30));

    let t2 = adjusted.iter().find(|d| d.trip_id == Id::new("T2".to_owned())).unwrap();
    assert_eq!(t2.time, berlin_time(2020, 1, 15, 23, 11));
    assert_eq!(t2.delay, Duration::zero());

    // S2's "pushed further downstream" claim, at s3: no own update, same
    // +30s running delay carried forward from s2.
    let request_s3 = DepartureRequest {
        stop_id: Id::new("S3".to_owned()),
        ..request
    };
    let static_s3 = departures(&reader, &metadata, &request_s3).await.unwrap();
    let adjusted_s3 = overlay.apply(static_s3);
    assert_eq!(adjusted_s3.len(), 1);
    assert_eq!(adjusted_s3[0].time, berlin_time(2020, 1, 15, 23, 2) + Duration::seconds(30));
}

#[tokio::test]
async fn s3_skipped_stop_is_dropped_without_propagating_a_delay() {
    let (storage, metadata) = ingest_basic().await;
    let reader = storage.get_reader(&metadata.hash).await.unwrap();

    let request = DepartureRequest {
        stop_id: Id::new("S2".to_owned()),
        window_start: berlin_time(2020, 1, 15, 23, 0),
        window_length: Duration::minutes(20),
        limit: -1,
        route_id: None,
        direction_id: None,
        route_types: Vec::new(),
    };
    let static_result = departures(&reader, &metadata, &request).await.unwrap();

    let realtime = ParsedRealtime {
        canceled_trips: Default::default(),
        trip_updates: std::collections::HashMap::from([(
            Id::new("T1".to_owned()),
            vec![StopTimeUpdateRecord {
                stop_id: None,
                stop_sequence: Some(2),
                arrival_time: None,
                arrival_delay: None,
                departure_time: None,
                departure_delay: None,
                kind: StopTimeUpdateKind::Skipped,
            }],
        )]),
    };
    let overlay = Overlay::new(realtime);
    let adjusted = overlay.apply(static_result);

    assert!(!adjusted.iter().any(|d| d.trip_id == Id::new("T1".to_owned())));
    assert!(adjusted.iter().any(|d| d.trip_id == Id::new("T2".to_owned())));

    let request_s3 = DepartureRequest {
        stop_id: Id::new("S3".to_owned()),
        ..request
    };
    let static_s3 = departures(&reader, &metadata, &request_s3).await.unwrap();
    let adjusted_s3 = overlay.apply(static_s3);
    assert_eq!(adjusted_s3.len(), 1);
    assert_eq!(adjusted_s3[0].time, berlin_time(2020, 1, 15, 23, 2));
    assert_eq!(adjusted_s3[0].delay, Duration::zero());
}

#[tokio::test]
async fn s4_canceled_trip_has_no_departures_anywhere() {
    let (storage, metadata) = ingest_basic().await;
    let reader = storage.get_reader(&metadata.hash).await.unwrap();

    let request = DepartureRequest {
        stop_id: Id::new("S1".to_owned()),
        window_start: berlin_time(2020, 1, 15, 23, 0),
        window_length: Duration::minutes(20),
        limit: -1,
        route_id: None,
        direction_id: None,
        route_types: Vec::new(),
    };
    let static_result = departures(&reader, &metadata, &request).await.unwrap();

    let realtime = ParsedRealtime {
        canceled_trips: std::collections::HashSet::from([Id::new("T1".to_owned())]),
        trip_updates: Default::default(),
    };
    let overlay = Overlay::new(realtime);
    let adjusted = overlay.apply(static_result);

    assert!(!adjusted.iter().any(|d| d.trip_id == Id::new("T1".to_owned())));
    assert_eq!(adjusted.len(), 1);
    assert_eq!(adjusted[0].trip_id, Id::new("T2".to_owned()));
}

#[tokio::test]
async fn s5_overflow_trip_surfaces_on_the_next_calendar_day() {
    let storage = MemoryStorage::new();
    let zip = build_zip(&[
        (
            "agency.txt",
            "agency_id,agency_name,agency_url,agency_timezone\n1,KVG,https://example.com,Europe/Berlin\n".to_owned(),
        ),
        (
            "routes.txt",
            "route_id,agency_id,route_short_name,route_type\nR1,1,N1,3\n".to_owned(),
        ),
        (
            "stops.txt",
            "stop_id,stop_name,stop_lat,stop_lon\nS1,Platz,54.3,10.1\nS2,Hafen,54.32,10.13\nS3,Bahnhof,54.34,10.16\n"
                .to_owned(),
        ),
        (
            "trips.txt",
            "trip_id,route_id,service_id,trip_headsign\nT1,R1,WD,Bahnhof\n".to_owned(),
        ),
        (
            "stop_times.txt",
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             T1,24:50:00,24:50:00,S1,1\nT1,25:00:00,25:00:00,S2,2\nT1,25:10:00,25:10:00,S3,3\n"
                .to_owned(),
        ),
        (
            "calendar.txt",
            "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
             WD,1,1,1,1,1,1,1,20200101,20201231\n"
                .to_owned(),
        ),
    ]);
    let metadata = ingest_feed(&storage, "https://example.com/gtfs.zip", &zip, Utc::now())
        .await
        .unwrap();
    assert_eq!(metadata.max_departure, Duration::hours(25));
    let reader = storage.get_reader(&metadata.hash).await.unwrap();

    let request = DepartureRequest {
        stop_id: Id::new("S2".to_owned()),
        window_start: berlin_time(2020, 1, 15, 0, 55),
        window_length: Duration::minutes(10),
        limit: -1,
        route_id: None,
        direction_id: None,
        route_types: Vec::new(),
    };
    let result = departures(&reader, &metadata, &request).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].time, berlin_time(2020, 1, 15, 1, 0));

    // The overflow stop-time belongs to service date 2020-01-14; confirm
    // the earlier stop (S1) is also reachable with its own query and is
    // not itself excluded for being on the overflow day.
    let request_s1 = DepartureRequest {
        stop_id: Id::new("S1".to_owned()),
        window_start: berlin_time(2020, 1, 15, 0, 40),
        window_length: Duration::minutes(20),
        ..request
    };
    let result_s1 = departures(&reader, &metadata, &request_s1).await.unwrap();
    assert_eq!(result_s1.len(), 1);
    assert_eq!(result_s1[0].time, berlin_time(2020, 1, 15, 0, 50));
}

#[tokio::test]
async fn s4_other_trips_unaffected_include_no_update_trips_directly() {
    // Exercises invariant 6 (delay propagation identity): a trip with no
    // realtime update at all must produce identical output with and
    // without an overlay built from an unrelated message.
    let (storage, metadata) = ingest_basic().await;
    let reader = storage.get_reader(&metadata.hash).await.unwrap();

    let request = DepartureRequest {
        stop_id: Id::new("S1".to_owned()),
        window_start: berlin_time(2020, 1, 15, 23, 0),
        window_length: Duration::minutes(20),
        limit: -1,
        route_id: None,
        direction_id: None,
        route_types: Vec::new(),
    };
    let static_result = departures(&reader, &metadata, &request).await.unwrap();

    let unrelated_overlay = Overlay::new(ParsedRealtime {
        canceled_trips: Default::default(),
        trip_updates: std::collections::HashMap::from([(
            Id::new("SOME_OTHER_TRIP".to_owned()),
            vec![StopTimeUpdateRecord {
                stop_id: None,
                stop_sequence: Some(1),
                arrival_time: None,
                arrival_delay: None,
                departure_time: None,
                departure_delay: Some(Duration::seconds(600)),
                kind: StopTimeUpdateKind::Scheduled,
            }],
        )]),
    });
    let adjusted = unrelated_overlay.apply(static_result.clone());
    assert_eq!(adjusted, static_result);
}
