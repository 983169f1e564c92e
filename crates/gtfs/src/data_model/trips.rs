use model::trip::{DirectionId, Trip};
use serde::Deserialize;
use storage::error::{CoreError, Result};
use utility::id::Id;

/// One row of `trips.txt`.
///
/// See <https://gtfs.org/schedule/reference/#tripstxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRow {
    #[serde(rename = "trip_id")]
    pub id: String,

    pub route_id: String,

    pub service_id: String,

    #[serde(rename = "trip_headsign", default)]
    pub headsign: Option<String>,

    #[serde(rename = "trip_short_name", default)]
    pub short_name: Option<String>,

    #[serde(default)]
    pub direction_id: Option<DirectionId>,
}

impl TripRow {
    /// Converts this row into the storage-facing [`Trip`].
    ///
    /// `route_id` and `service_id` are not checked for existence here;
    /// referential integrity across tables is the ingest pipeline's job.
    pub fn into_model(self) -> Result<Trip> {
        if self.id.is_empty() {
            return Err(CoreError::Parse("trip_id must not be empty".into()));
        }
        if self.route_id.is_empty() {
            return Err(CoreError::Parse(format!(
                "trip {} is missing route_id",
                self.id
            )));
        }
        if self.service_id.is_empty() {
            return Err(CoreError::Parse(format!(
                "trip {} is missing service_id",
                self.id
            )));
        }
        Ok(Trip {
            id: Id::new(self.id),
            route_id: Id::new(self.route_id),
            service_id: Id::new(self.service_id),
            headsign: self.headsign,
            short_name: self.short_name,
            direction_id: self.direction_id,
        })
    }
}
