//! Applies a parsed realtime feed to the results of a static departure
//! query: canceled trips and skipped stops are dropped, and every
//! remaining departure's time reflects the delay accumulated along its
//! trip up to that stop.
//!
//! Grounded on the propagation shape of the teacher's `realtime::update`
//! (time wins over delay, per-stop-time-update dispatch on schedule
//! relationship) and `KingOfBread-miner-omniviv`'s `process_trip_updates`
//! (per-trip running delay seeded from the trip-level `delay` field,
//! `stop_sequence`/`stop_id` lookup maps built once per trip).

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, FixedOffset};
use model::departure::Departure;
use model::trip::TripId;

use crate::parser::{ParsedRealtime, StopTimeUpdateKind, StopTimeUpdateRecord};

/// A parsed realtime feed (or the merge of several, see
/// [`crate::parser::merge_feeds`]), ready to be applied to one or more
/// static query results.
pub struct Overlay {
    canceled_trips: HashSet<TripId>,
    trip_updates: HashMap<TripId, Vec<StopTimeUpdateRecord>>,
}

impl Overlay {
    /// Builds an overlay from a parsed feed, sorting each trip's
    /// stop-time updates by `stop_sequence` (updates lacking one sort
    /// after those that have it; they are matched by `stop_id` instead,
    /// so their relative order does not affect correctness).
    pub fn new(realtime: ParsedRealtime) -> Self {
        let mut trip_updates = realtime.trip_updates;
        for records in trip_updates.values_mut() {
            records.sort_by_key(|record| record.stop_sequence.unwrap_or(u32::MAX));
        }
        Self {
            canceled_trips: realtime.canceled_trips,
            trip_updates,
        }
    }

    pub fn is_canceled(&self, trip_id: &TripId) -> bool {
        self.canceled_trips.contains(trip_id)
    }

    /// The largest absolute delay carried by any stop-time update this
    /// overlay knows about. Callers should widen both edges of a
    /// departure query window by this much before fetching the static
    /// rows to run through [`Overlay::apply`], then drop results that
    /// still fall outside the original window once delays are applied —
    /// otherwise a trip running this late (or this early) could be
    /// missed entirely.
    pub fn recommended_widening(&self) -> Duration {
        self.trip_updates
            .values()
            .flatten()
            .filter_map(|record| record.departure_delay.or(record.arrival_delay))
            .map(|delay| delay.abs())
            .max()
            .unwrap_or_else(Duration::zero)
    }

    /// Adjusts `departures` for this overlay. Rows belonging to a
    /// canceled trip are dropped; rows matching a `SKIPPED` stop-time
    /// update are dropped; every other row's `time`/`delay` reflect the
    /// running delay accumulated along its trip up to and including its
    /// own stop. Input order is preserved for surviving rows, so callers
    /// relying on the static engine's per-trip `stop_sequence` ordering
    /// for delay propagation should pass rows in that order.
    pub fn apply(&self, departures: Vec<Departure>) -> Vec<Departure> {
        let mut consumed_by_stop_id: HashMap<TripId, HashSet<usize>> = HashMap::new();
        let mut running_delay: HashMap<TripId, Duration> = HashMap::new();
        let mut out = Vec::with_capacity(departures.len());

        for mut departure in departures {
            if self.is_canceled(&departure.trip_id) {
                continue;
            }

            let Some(updates) = self.trip_updates.get(&departure.trip_id) else {
                out.push(departure);
                continue;
            };

            let consumed = consumed_by_stop_id.entry(departure.trip_id.clone()).or_default();
            let matched = updates.iter().enumerate().find(|(index, update)| match update.stop_sequence {
                Some(sequence) => sequence == departure.stop_sequence,
                None => update.stop_id.as_ref() == Some(&departure.stop_id) && !consumed.contains(index),
            });

            let Some((index, update)) = matched else {
                let delay = running_delay.get(&departure.trip_id).copied().unwrap_or_else(Duration::zero);
                apply_delay(&mut departure, delay);
                out.push(departure);
                continue;
            };

            if update.stop_sequence.is_none() {
                consumed.insert(index);
            }

            match update.kind {
                StopTimeUpdateKind::Skipped => {
                    log::debug!(
                        "dropping skipped stop {} (trip {})",
                        departure.stop_id,
                        departure.trip_id
                    );
                }
                StopTimeUpdateKind::NoData => {
                    log::debug!("resetting running delay to zero for trip {} (NO_DATA)", departure.trip_id);
                    running_delay.insert(departure.trip_id.clone(), Duration::zero());
                    apply_delay(&mut departure, Duration::zero());
                    out.push(departure);
                }
                StopTimeUpdateKind::Scheduled => {
                    let scheduled_time = departure.time;
                    let previous = running_delay.get(&departure.trip_id).copied().unwrap_or_else(Duration::zero);
                    let delay = resolve_delay(update, scheduled_time).unwrap_or(previous);
                    running_delay.insert(departure.trip_id.clone(), delay);
                    apply_delay(&mut departure, delay);
                    out.push(departure);
                }
            }
        }

        out
    }
}

fn apply_delay(departure: &mut Departure, delay: Duration) {
    departure.time += delay;
    departure.delay = delay;
}

/// Resolves the running delay at one stop from a single update. An
/// absolute time always wins over a delay figure when both are present on
/// the same event (`time.is_some()` checked first). When the update
/// carries no departure information at all, the arrival side is used
/// instead, but only to update the running delay carried forward — the
/// stop's own departure is still computed as schedule plus running delay,
/// never materialized directly from the arrival event. An arrival-only
/// update whose effective delay is negative (running ahead of schedule)
/// resets the running delay to zero rather than applying the negative
/// figure, per the ahead-of-schedule recovery rule.
fn resolve_delay(update: &StopTimeUpdateRecord, scheduled_departure: DateTime<FixedOffset>) -> Option<Duration> {
    if let Some(time) = update.departure_time {
        return Some(time.with_timezone(&scheduled_departure.timezone()) - scheduled_departure);
    }
    if let Some(delay) = update.departure_delay {
        return Some(delay);
    }

    let arrival_delay = update
        .arrival_time
        .map(|time| time.with_timezone(&scheduled_departure.timezone()) - scheduled_departure)
        .or(update.arrival_delay)?;

    Some(if arrival_delay < Duration::zero() { Duration::zero() } else { arrival_delay })
}
