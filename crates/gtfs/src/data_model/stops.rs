use model::stop::{LocationType, Stop};
use serde::Deserialize;
use storage::error::{CoreError, Result};
use utility::id::Id;

use super::{Latitude, Longitude, Url};

/// One row of `stops.txt`.
///
/// See <https://gtfs.org/schedule/reference/#stopstxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRow {
    #[serde(rename = "stop_id")]
    pub id: String,

    #[serde(rename = "stop_code", default)]
    pub code: Option<String>,

    #[serde(rename = "stop_name", default)]
    pub name: Option<String>,

    #[serde(rename = "stop_desc", default)]
    pub desc: Option<String>,

    #[serde(rename = "stop_lat", default)]
    pub lat: Option<Latitude>,

    #[serde(rename = "stop_lon", default)]
    pub lon: Option<Longitude>,

    #[serde(rename = "stop_url", default)]
    pub url: Option<Url>,

    #[serde(rename = "location_type", default)]
    pub location_type: LocationType,

    #[serde(rename = "parent_station", default)]
    pub parent_station: Option<String>,

    #[serde(rename = "platform_code", default)]
    pub platform_code: Option<String>,
}

impl StopRow {
    /// Converts this row into the storage-facing [`Stop`].
    ///
    /// Stops that are not a plain stop/platform or boarding area must carry
    /// a name and coordinates; everything else is optional.
    pub fn into_model(self) -> Result<Stop> {
        if self.id.is_empty() {
            return Err(CoreError::Parse("stop_id must not be empty".into()));
        }
        let requires_name_and_location = !matches!(
            self.location_type,
            LocationType::StopOrPlatform | LocationType::BoardingArea
        );
        if requires_name_and_location {
            if self.name.as_deref().unwrap_or("").is_empty() {
                return Err(CoreError::Parse(format!(
                    "stop {} requires stop_name for location_type {:?}",
                    self.id, self.location_type
                )));
            }
            if self.lat.is_none() || self.lon.is_none() {
                return Err(CoreError::Parse(format!(
                    "stop {} requires stop_lat/stop_lon for location_type {:?}",
                    self.id, self.location_type
                )));
            }
        }
        Ok(Stop {
            id: Id::new(self.id),
            code: self.code,
            name: self.name,
            desc: self.desc,
            lat: self.lat,
            lon: self.lon,
            url: self.url,
            location_type: self.location_type,
            parent_station: self.parent_station.filter(|s| !s.is_empty()).map(Id::new),
            platform_code: self.platform_code,
        })
    }
}
