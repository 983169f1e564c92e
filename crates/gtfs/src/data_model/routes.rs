use model::route::{Route, RouteType};
use model::Color;
use serde::Deserialize;
use storage::error::{CoreError, Result};
use utility::id::Id;

use super::Url;

/// One row of `routes.txt`.
///
/// See <https://gtfs.org/schedule/reference/#routestxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRow {
    #[serde(rename = "route_id")]
    pub id: String,

    #[serde(rename = "agency_id", default)]
    pub agency_id: Option<String>,

    #[serde(rename = "route_short_name", default)]
    pub short_name: Option<String>,

    #[serde(rename = "route_long_name", default)]
    pub long_name: Option<String>,

    #[serde(rename = "route_desc", default)]
    pub desc: Option<String>,

    #[serde(rename = "route_type")]
    pub route_type: RouteType,

    #[serde(rename = "route_url", default)]
    pub url: Option<Url>,

    #[serde(rename = "route_color", default)]
    pub color: Option<String>,

    #[serde(rename = "route_text_color", default)]
    pub text_color: Option<String>,
}

impl RouteRow {
    /// Converts this row into the storage-facing [`Route`].
    ///
    /// At least one of `short_name`/`long_name` must be non-empty. Colors
    /// are parsed as six-digit hex; an unparseable color is a validation
    /// error rather than a silent fallback to the default.
    pub fn into_model(self) -> Result<Route> {
        if self.id.is_empty() {
            return Err(CoreError::Parse("route_id must not be empty".into()));
        }
        let has_short = !self.short_name.as_deref().unwrap_or("").is_empty();
        let has_long = !self.long_name.as_deref().unwrap_or("").is_empty();
        if !has_short && !has_long {
            return Err(CoreError::Parse(format!(
                "route {} must set route_short_name or route_long_name",
                self.id
            )));
        }
        let color = parse_color(&self.id, "route_color", self.color)?;
        let text_color = parse_color(&self.id, "route_text_color", self.text_color)?;
        Ok(Route {
            id: Id::new(self.id),
            agency_id: self.agency_id.filter(|s| !s.is_empty()).map(Id::new),
            short_name: self.short_name.filter(|s| !s.is_empty()),
            long_name: self.long_name.filter(|s| !s.is_empty()),
            desc: self.desc,
            route_type: self.route_type,
            url: self.url,
            color,
            text_color,
        })
    }
}

fn parse_color(route_id: &str, field: &str, raw: Option<String>) -> Result<Option<Color>> {
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(hex) => Color::from_hex(&hex).map(Some).ok_or_else(|| {
            CoreError::Parse(format!(
                "route {route_id} has an invalid {field} value: {hex}"
            ))
        }),
    }
}
