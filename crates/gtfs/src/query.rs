//! Static departure computation (§4.5): translates a wall-clock window
//! into per-service-date GTFS time spans and merges the resulting
//! stop-time events into an ordered departure list.
//!
//! Grounded on the window/overflow handling in
//! `KingOfBread-miner-omniviv`'s `process_trip_updates`/
//! `schedule_time_to_utc`, adapted to the noon-anchored arithmetic this
//! spec calls for rather than that source's fixed UTC offsets.

use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};
use chrono_tz::Tz;
use model::calendar::ServiceId;
use model::departure::Departure;
use model::feed_metadata::FeedMetadata;
use model::route::{RouteId, RouteType};
use model::stop::StopId;
use model::trip::DirectionId;
use storage::error::{CoreError, Result};
use storage::filter::StopTimeFilter;
use storage::FeedReader;

/// A single `departures` request against a static feed snapshot.
#[derive(Debug, Clone)]
pub struct DepartureRequest {
    pub stop_id: StopId,
    pub window_start: DateTime<FixedOffset>,
    pub window_length: Duration,
    /// Maximum number of departures to return. Negative means
    /// unlimited; zero returns no departures at all.
    pub limit: i64,
    pub route_id: Option<RouteId>,
    pub direction_id: Option<DirectionId>,
    pub route_types: Vec<RouteType>,
}

/// One GTFS service-date time span produced by the window → spans
/// algorithm, bounding the `departure_start`/`departure_end` filter for
/// a single `stop_time_events` query.
#[derive(Debug, Clone, PartialEq)]
struct Span {
    service_date: NaiveDate,
    departure_start: Option<Duration>,
    departure_end: Option<Duration>,
}

/// The feed-timezone instant `noon(date) - 12h`, the origin GTFS
/// `HHMMSS` offsets are measured from.
fn service_date_origin(tz: Tz, date: NaiveDate) -> DateTime<Tz> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .expect("12:00:00 is always a valid NaiveTime");
    let noon = match tz.from_local_datetime(&noon) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(earliest, _) => earliest,
        chrono::LocalResult::None => tz
            .from_local_datetime(&(noon + Duration::hours(1)))
            .single()
            .expect("shifting an hour resolves a DST gap at local noon"),
    };
    noon - Duration::hours(12)
}

/// Computes the window → spans decomposition described in §4.5.
fn window_to_spans(
    tz: Tz,
    window_start: DateTime<FixedOffset>,
    window_end: DateTime<FixedOffset>,
    max_departure: Duration,
) -> Vec<Span> {
    let window_start_tz = window_start.with_timezone(&tz);
    let window_end_tz = window_end.with_timezone(&tz);
    let start_date = window_start_tz.date_naive();
    let end_date = window_end_tz.date_naive();

    let mut spans = Vec::new();
    let mut date = start_date - Duration::days(1);
    while date <= end_date {
        let origin = service_date_origin(tz, date);
        let x_start = window_start_tz - origin;
        let x_end = window_end_tz - origin;

        let begins_before = start_date < date;
        let begins_during = start_date == date;
        let begins_after = start_date > date;
        let ends_after = end_date > date;
        let ends_during = end_date == date;

        if begins_before && ends_after {
            spans.push(Span {
                service_date: date,
                departure_start: None,
                departure_end: None,
            });
            date += Duration::days(1);
            continue;
        }

        let departure_start = if begins_during {
            Some(x_start)
        } else if begins_after {
            if x_start > max_departure {
                date += Duration::days(1);
                continue;
            }
            Some(x_start)
        } else {
            None
        };

        let departure_end = if ends_during { Some(x_end) } else { None };

        spans.push(Span {
            service_date: date,
            departure_start,
            departure_end,
        });
        date += Duration::days(1);
    }
    spans
}

/// Computes the ordered departure list for `request` against a static
/// feed snapshot. `metadata` supplies the feed timezone and
/// `max_departure` bound used by the window → spans algorithm.
pub async fn departures<R: FeedReader>(
    reader: &R,
    metadata: &FeedMetadata,
    request: &DepartureRequest,
) -> Result<Vec<Departure>> {
    if request.limit == 0 {
        return Ok(Vec::new());
    }

    let tz = Tz::from_str(&metadata.timezone)
        .map_err(|_| CoreError::Validation(format!("invalid feed timezone: {}", metadata.timezone)))?;

    let window_end = request.window_start + request.window_length;
    let spans = window_to_spans(tz, request.window_start, window_end, metadata.max_departure);

    let bounds = reader.min_max_stop_seq().await?;

    let mut all_departures = Vec::new();
    for span in spans {
        let service_ids: Vec<ServiceId> = reader.active_services(span.service_date).await?;
        if service_ids.is_empty() {
            continue;
        }

        let filter = StopTimeFilter {
            stop_id: Some(request.stop_id.clone()),
            service_ids,
            route_id: request.route_id.clone(),
            route_types: request.route_types.clone(),
            trip_ids: Vec::new(),
            direction_id: request.direction_id,
            arrival_start: None,
            arrival_end: None,
            departure_start: span.departure_start,
            departure_end: span.departure_end,
        };

        let mut events = reader.stop_time_events(&filter).await?;
        events.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));

        for event in events {
            let Some(departure_offset) = event.departure_time else {
                continue;
            };

            if let Some((_, max_seq)) = bounds.get(&event.trip_id) {
                if event.stop_sequence == *max_seq {
                    continue;
                }
            }

            let wall_clock = service_date_origin(tz, span.service_date) + departure_offset;
            let wall_clock = wall_clock.with_timezone(&request.window_start.timezone());
            if wall_clock < request.window_start {
                continue;
            }

            all_departures.push(Departure {
                stop_id: event.stop_id,
                route_id: event.route_id,
                trip_id: event.trip_id,
                stop_sequence: event.stop_sequence,
                direction_id: event.direction_id,
                time: wall_clock,
                headsign: event.headsign,
                delay: Duration::zero(),
            });
        }
    }

    all_departures.sort_by(|a, b| a.time.cmp(&b.time));
    if request.limit >= 0 {
        all_departures.truncate(request.limit as usize);
    }

    Ok(all_departures)
}
