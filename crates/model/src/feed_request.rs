use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// A consumer that has asked to be kept informed about a [`FeedRequest`]'s
/// URL, e.g. so it can be notified when a fresher feed becomes available.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeedConsumer {
    pub name: String,
    pub headers: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An on-demand request to keep a feed URL refreshed, tracked
/// independently of any one ingested feed hash.
///
/// Consumer upserts merge by `name`; a consumer is never implicitly
/// dropped from the list by a later upsert of the same `FeedRequest`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeedRequest {
    pub url: String,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub consumers: Vec<FeedConsumer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn feed_request_round_trips_through_json() {
        let request = FeedRequest {
            url: "https://example.com/gtfs.zip".to_owned(),
            refreshed_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            consumers: vec![FeedConsumer {
                name: "departure-board".to_owned(),
                headers: HashMap::new(),
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: FeedRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }
}
