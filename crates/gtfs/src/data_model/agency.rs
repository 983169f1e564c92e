use model::agency::Agency;
use serde::Deserialize;
use storage::error::{CoreError, Result};
use utility::id::Id;

use super::{Timezone, Url};

/// One row of `agency.txt`.
///
/// See <https://gtfs.org/schedule/reference/#agencytxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyRow {
    /// Uniquely identifies a transit brand, often synonymous with a transit
    /// agency. Required when the feed contains more than one agency; we
    /// require it unconditionally since a missing row would leave
    /// `routes.agency_id` unresolvable.
    #[serde(rename = "agency_id", default)]
    pub id: Option<String>,

    #[serde(rename = "agency_name")]
    pub name: String,

    #[serde(rename = "agency_url")]
    pub url: Url,

    #[serde(rename = "agency_timezone")]
    pub timezone: Timezone,
}

impl AgencyRow {
    /// Converts this row into the storage-facing [`Agency`].
    ///
    /// Feeds with a single agency commonly omit `agency_id`; in that case
    /// we synthesize the id `"1"`, matching the convention GTFS consumers
    /// already rely on for single-agency feeds.
    pub fn into_model(self) -> Result<Agency> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Parse("agency_name must not be empty".into()));
        }
        if self.timezone.trim().is_empty() {
            return Err(CoreError::Parse("agency_timezone must not be empty".into()));
        }
        let id = self.id.filter(|s| !s.is_empty()).unwrap_or_else(|| "1".to_owned());
        Ok(Agency {
            id: Id::new(id),
            name: self.name,
            url: self.url,
            timezone: self.timezone,
        })
    }
}
