use utility::id::{HasId, Id};

/// The kind of place a [`Stop`] row represents.
///
/// See <https://gtfs.org/schedule/reference/#stopstxt>, `location_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum LocationType {
    /// A location where passengers board or disembark from a transit
    /// vehicle. Stop times reference stops of this type (or `Station`,
    /// in feeds that do not split platforms out separately).
    #[default]
    StopOrPlatform = 0,

    /// A physical structure containing one or more platforms. A station
    /// may be set as the `parent_station` of stops with `StopOrPlatform`.
    Station = 1,

    /// An entrance or exit to a station, referencing the station through
    /// `parent_station`.
    EntranceExit = 2,

    /// A location within a station not matched to a specific stop,
    /// entrance, or exit, used to link pathways.
    GenericNode = 3,

    /// A specific location on a platform, used to link pathways.
    BoardingArea = 4,
}

pub type StopId = Id<Stop>;

/// A place where vehicles pick up or drop off passengers, corresponding
/// to one row of `stops.txt`.
///
/// See <https://gtfs.org/schedule/reference/#stopstxt>.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stop {
    /// `stop_id`. Uniquely identifies the stop within the feed.
    pub id: StopId,

    /// `stop_code`. Short text or number shown to riders, distinct from
    /// `id`, to identify the stop (e.g. at bus stop signage).
    pub code: Option<String>,

    /// `stop_name`. Name of the location as displayed to riders.
    /// Conditionally required: must be set unless `location_type` is
    /// `EntranceExit`, `GenericNode`, or `BoardingArea`.
    pub name: Option<String>,

    /// `stop_desc`. Description of the stop.
    pub desc: Option<String>,

    /// `stop_lat`. Latitude of the stop.
    /// Conditionally required: must be set unless `location_type` is
    /// `GenericNode` or `BoardingArea`.
    pub lat: Option<f64>,

    /// `stop_lon`. Longitude of the stop.
    /// Conditionally required: see `lat`.
    pub lon: Option<f64>,

    /// `stop_url`. URL of a web page about the stop.
    pub url: Option<String>,

    /// `location_type`. Defaults to `StopOrPlatform` when absent.
    #[serde(default)]
    pub location_type: LocationType,

    /// `parent_station`. Required for `EntranceExit`, `GenericNode`, and
    /// `BoardingArea`; optional for `StopOrPlatform`; forbidden for
    /// `Station`.
    pub parent_station: Option<StopId>,

    /// `platform_code`. Platform identifier for a platform stop.
    pub platform_code: Option<String>,
}

impl HasId for Stop {
    type IdType = String;
}
