//! Decodes a [`pb::FeedMessage`] into the plain records the overlay engine
//! consumes, enforcing the header and per-update validity rules.
//!
//! Grounded on the teacher's `gtfs::realtime::update` (header decode, the
//! trip/stop-time walk, the `schedule_relationship` dispatch) and on
//! `KingOfBread-miner-omniviv`'s `providers::timetables::gtfs::realtime`
//! (the `delay` trip-level fallback and the stop lookup maps it builds per
//! trip before folding stop-time updates in).

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use model::stop::StopId;
use model::trip::TripId;
use storage::error::{CoreError, Result};
use utility::id::Id;

use crate::pb;

/// How a [`StopTimeUpdateRecord`] should be folded into the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopTimeUpdateKind {
    /// A normal delay/time update for this stop.
    Scheduled,
    /// The vehicle will not call at this stop; drop it from results.
    Skipped,
    /// No realtime information for this stop; revert to schedule.
    NoData,
}

/// One `StopTimeUpdate` entry of a `TripUpdate`, with its schedule
/// relationship already resolved and its arrival/departure fields decoded
/// into [`chrono`] types. `UNSCHEDULED` stop-time updates are dropped
/// during parsing and never produce a record (see [`parse_feed`]).
#[derive(Debug, Clone, PartialEq)]
pub struct StopTimeUpdateRecord {
    pub stop_id: Option<StopId>,
    pub stop_sequence: Option<u32>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub arrival_delay: Option<Duration>,
    pub departure_time: Option<DateTime<Utc>>,
    pub departure_delay: Option<Duration>,
    pub kind: StopTimeUpdateKind,
}

/// The realtime state of one GTFS-realtime feed message, folded down to
/// what the overlay engine needs: which trips are canceled, and the
/// ordered stop-time updates for every trip still running.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRealtime {
    pub canceled_trips: HashSet<TripId>,
    pub trip_updates: HashMap<TripId, Vec<StopTimeUpdateRecord>>,
}

fn decode_event(event: &Option<pb::trip_update::StopTimeEvent>) -> (Option<DateTime<Utc>>, Option<Duration>) {
    let Some(event) = event else {
        return (None, None);
    };
    let time = event.time.and_then(|seconds| Utc.timestamp_opt(seconds, 0).single());
    let delay = event.delay.map(|delay| Duration::seconds(delay as i64));
    (time, delay)
}

/// Parses one decoded feed message, returning its header timestamp
/// alongside the folded [`ParsedRealtime`]. Rejects a feed whose
/// `gtfs_realtime_version` is not `"1.0"`/`"2.0"`, whose incrementality is
/// not `FULL_DATASET` (differential feeds are not supported, per the
/// storage timestamp-merge design below), or that contains a
/// `StopTimeUpdate` with neither a `stop_id` nor a nonzero
/// `stop_sequence`.
pub fn parse_feed(message: &pb::FeedMessage) -> Result<(DateTime<Utc>, ParsedRealtime)> {
    let version = message.header.gtfs_realtime_version.as_str();
    if version != "1.0" && version != "2.0" {
        return Err(CoreError::Unsupported(format!(
            "unsupported gtfs_realtime_version: {version}"
        )));
    }
    if message.header.incrementality() != pb::feed_header::Incrementality::FullDataset {
        return Err(CoreError::Unsupported(
            "only FULL_DATASET realtime feeds are supported".into(),
        ));
    }
    let timestamp = message
        .header
        .timestamp
        .and_then(|seconds| Utc.timestamp_opt(seconds as i64, 0).single())
        .unwrap_or_else(Utc::now);

    let mut canceled_trips = HashSet::new();
    let mut trip_updates: HashMap<TripId, Vec<StopTimeUpdateRecord>> = HashMap::new();
    let mut added_or_unscheduled = 0usize;

    for entity in &message.entity {
        let Some(trip_update) = &entity.trip_update else {
            continue;
        };
        let Some(trip_id) = &trip_update.trip.trip_id else {
            log::warn!("dropping trip update with no trip_id (entity {})", entity.id);
            continue;
        };
        let trip_id: TripId = Id::new(trip_id.clone());

        match trip_update.trip.schedule_relationship() {
            pb::trip_descriptor::ScheduleRelationship::Canceled => {
                canceled_trips.insert(trip_id);
                continue;
            }
            pb::trip_descriptor::ScheduleRelationship::Added
            | pb::trip_descriptor::ScheduleRelationship::Unscheduled
            | pb::trip_descriptor::ScheduleRelationship::Duplicated => {
                added_or_unscheduled += 1;
                continue;
            }
            pb::trip_descriptor::ScheduleRelationship::Scheduled => {}
        }

        let mut records = Vec::with_capacity(trip_update.stop_time_update.len());
        for update in &trip_update.stop_time_update {
            let stop_id = update.stop_id.clone().filter(|id| !id.is_empty()).map(Id::new);
            let stop_sequence = update.stop_sequence;

            if stop_id.is_none() && stop_sequence.unwrap_or(0) == 0 {
                return Err(CoreError::Parse(format!(
                    "trip {trip_id} has a stop_time_update with neither stop_id nor stop_sequence"
                )));
            }

            let kind = match update.schedule_relationship() {
                pb::trip_update::stop_time_update::ScheduleRelationship::Scheduled => StopTimeUpdateKind::Scheduled,
                pb::trip_update::stop_time_update::ScheduleRelationship::Skipped => StopTimeUpdateKind::Skipped,
                pb::trip_update::stop_time_update::ScheduleRelationship::NoData => StopTimeUpdateKind::NoData,
                pb::trip_update::stop_time_update::ScheduleRelationship::Unscheduled => continue,
            };

            let (arrival_time, arrival_delay) = decode_event(&update.arrival);
            let (departure_time, departure_delay) = decode_event(&update.departure);

            records.push(StopTimeUpdateRecord {
                stop_id,
                stop_sequence,
                arrival_time,
                arrival_delay,
                departure_time,
                departure_delay,
                kind,
            });
        }
        trip_updates.entry(trip_id).or_default().extend(records);
    }

    if added_or_unscheduled > 0 {
        log::debug!("ignored {added_or_unscheduled} ADDED/UNSCHEDULED/DUPLICATED trip updates");
    }
    log::info!(
        "parsed realtime feed: {} trip updates, {} canceled trips",
        trip_updates.len(),
        canceled_trips.len()
    );

    Ok((timestamp, ParsedRealtime { canceled_trips, trip_updates }))
}

/// Merges several parsed feeds into one, as if a single feed had produced
/// them: the feed with the latest header timestamp wins for any trip both
/// feeds describe, while canceled-trip sets are unioned across all feeds
/// regardless of timestamp (a cancellation is never silently undone by an
/// older, stale feed).
pub fn merge_feeds(mut feeds: Vec<(DateTime<Utc>, ParsedRealtime)>) -> ParsedRealtime {
    feeds.sort_by_key(|(timestamp, _)| *timestamp);

    let mut merged = ParsedRealtime::default();
    for (_, realtime) in feeds {
        merged.canceled_trips.extend(realtime.canceled_trips);
        merged.trip_updates.extend(realtime.trip_updates);
    }
    merged
}
