use utility::id::{HasId, Id};

/// A transit agency, corresponding to one row of `agency.txt`.
///
/// See <https://gtfs.org/schedule/reference/#agencytxt>.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Agency {
    /// `agency_id`. Uniquely identifies the agency within the feed.
    pub id: Id<Agency>,

    /// `agency_name`. Full name of the transit agency.
    pub name: String,

    /// `agency_url`. URL of the agency's transit website.
    pub url: String,

    /// `agency_timezone`. IANA timezone name, e.g. `Europe/Berlin`.
    pub timezone: String,
}

impl HasId for Agency {
    type IdType = String;
}
