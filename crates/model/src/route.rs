use utility::id::{HasId, Id};

use crate::agency::Agency;
use crate::Color;

/// The mode of transport used on a [`Route`], corresponding to
/// `routes.route_type`.
///
/// See <https://gtfs.org/schedule/reference/#routestxt>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum RouteType {
    /// Tram, streetcar, or light rail.
    Tram = 0,
    /// Subway or metro.
    Subway = 1,
    /// Intercity or long-distance rail.
    Rail = 2,
    Bus = 3,
    Ferry = 4,
    /// Street-level cable car, e.g. San Francisco cable cars.
    CableTram = 5,
    /// Aerial cable car, e.g. gondola or suspended cable car.
    AerialLift = 6,
    Funicular = 7,
    Trolleybus = 11,
    Monorail = 12,
}

pub type RouteId = Id<Route>;

/// A group of trips displayed to riders as a single service, corresponding
/// to one row of `routes.txt`.
///
/// See <https://gtfs.org/schedule/reference/#routestxt>.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    /// `route_id`. Uniquely identifies the route within the feed.
    pub id: RouteId,

    /// `agency_id`. Required when the feed lists more than one agency.
    pub agency_id: Option<Id<Agency>>,

    /// `route_short_name`. Short rider-facing name, e.g. `RE83`.
    /// Conditionally required: must be set if `long_name` is absent.
    pub short_name: Option<String>,

    /// `route_long_name`. Full rider-facing name.
    /// Conditionally required: must be set if `short_name` is absent.
    pub long_name: Option<String>,

    /// `route_desc`. Description of the route.
    pub desc: Option<String>,

    /// `route_type`. Mode of transport used on the route.
    #[serde(rename = "type")]
    pub route_type: RouteType,

    /// `route_url`. URL of a web page about the route.
    pub url: Option<String>,

    /// `route_color`. Background color used for rider-facing signage.
    /// Defaults to white when absent.
    pub color: Option<Color>,

    /// `route_text_color`. Text color used against `color`. Defaults to
    /// black when absent.
    pub text_color: Option<Color>,
}

impl Route {
    /// `color`, defaulting to white when the feed does not set one.
    pub fn display_color(&self) -> Color {
        self.color.unwrap_or_else(Color::white)
    }

    /// `text_color`, defaulting to black when the feed does not set one.
    pub fn display_text_color(&self) -> Color {
        self.text_color.unwrap_or_else(Color::black)
    }
}

impl HasId for Route {
    type IdType = String;
}
