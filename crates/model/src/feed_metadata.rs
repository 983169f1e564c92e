use chrono::{DateTime, Duration, NaiveDate, Utc};
use utility::serde::duration;

/// Summary information about an ingested feed, derived during the ingest
/// pipeline and kept alongside the feed's tables.
///
/// `max_departure` bounds how far back into the previous service date a
/// static query must search for overflow stop-times (those with an
/// `HHMMSS` offset past 24:00:00).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeedMetadata {
    /// The URL the feed archive was retrieved from.
    pub url: String,

    /// Content hash of the feed archive; identifies it within storage.
    pub hash: String,

    /// When this feed was first retrieved.
    pub retrieved_at: DateTime<Utc>,

    /// When this feed's record was last updated (e.g. re-ingested).
    pub updated_at: DateTime<Utc>,

    /// IANA timezone name shared by all agencies in the feed.
    pub timezone: String,

    /// Earliest `start_date` across `calendar.txt`/`calendar_dates.txt`.
    pub calendar_start_date: NaiveDate,

    /// Latest `end_date` across `calendar.txt`/`calendar_dates.txt`.
    pub calendar_end_date: NaiveDate,

    /// `feed_info.feed_start_date`, if present.
    pub feed_start_date: Option<NaiveDate>,

    /// `feed_info.feed_end_date`, if present.
    pub feed_end_date: Option<NaiveDate>,

    /// Largest arrival-time offset over all stop-times.
    #[serde(
        serialize_with = "duration::serialize",
        deserialize_with = "duration::deserialize"
    )]
    pub max_arrival: Duration,

    /// Largest departure-time offset over all stop-times.
    #[serde(
        serialize_with = "duration::serialize",
        deserialize_with = "duration::deserialize"
    )]
    pub max_departure: Duration,
}
