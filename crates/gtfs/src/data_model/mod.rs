pub mod agency;
pub mod calendar;
pub mod calendar_dates;
pub mod routes;
pub mod stop_times;
pub mod stops;
pub mod trips;

/// An ISO 4217 alphabetical currency code. For the list of current currency, refer
/// to https://en.wikipedia.org/wiki/ISO_4217#Active_codes.
///
/// # Examples
///
/// `CAD` for Canadian dollars, `EUR` for euros or `JPY` for Japanese yen.
#[allow(dead_code)]
pub type CurrencyCode = String;

/// Service day in the YYYYMMDD format. Since time within a service day may be above
/// 24:00:00, a service day may contain information for the subsequent day(s).
///
/// # Examples
///
/// `20180913` for September 13th, 2018.
#[allow(dead_code)]
pub type Date = String;

/// An email address.
///
/// # Examples
///
/// `example@example.com`
#[allow(dead_code)]
pub type Email = String;

/// An ID field value is an internal ID, not intended to be shown to riders, and is a
/// sequence of any UTF-8 characters. Using only printable ASCII characters is
/// recommended. An ID is labeled "unique ID" when it must be unique within a file.
/// IDs defined in one .txt file are often referenced in another .txt file. IDs that
/// reference an ID in another table are labeled "foreign ID".
///
/// # Examples
///
/// The `stop_id` field in stops.txt is a "unique ID". The `parent_station` field in
/// stops.txt is a "foreign ID referencing `stops.stop_id`".
pub type IdString = String;

/// An IETF BCP 47 language code. For an introduction to IETF BCP 47, refer to http://www.rfc-editor.org/rfc/bcp/bcp47.txt and http://www.w3.org/International/articles/language-tags/.
///
/// # Examples
///
/// `en` for English, `en-US` for American English or `de` for German.
#[allow(dead_code)]
pub type LanguageCode = String;

/// WGS84 latitude in decimal degrees. The value must be greater than or equal to
/// -90.0 and less than or equal to 90.0.
///
/// # Examples
///
/// `41.890169` for the Colosseum in Rome.
pub type Latitude = f64;

/// WGS84 longitude in decimal degrees. The value must be greater than or equal to
/// -180.0 and less than or equal to 180.0.
///
/// # Examples
///
/// `12.492269` for the Colosseum in Rome.
pub type Longitude = f64;

/// A phone number.
#[allow(dead_code)]
pub type PhoneNumber = String;

/// Time in the HH:MM:SS format (H:MM:SS is also accepted). The time is measured from
/// "noon minus 12h" of the service day (effectively midnight except for days on
/// which daylight savings time changes occur). For times occurring after midnight
/// on the service day, enter the time as a value greater than 24:00:00 in HH:MM:SS.
///
/// # Examples
///
/// `14:30:00` for 2:30PM or `25:35:00` for 1:35AM on the next day.
pub type Time = String;

/// TZ timezone from the https://www.iana.org/time-zones. Timezone names never contain
/// the space character but may contain an underscore.
/// Refer to http://en.wikipedia.org/wiki/List_of_tz_zones for a list of valid values.
///
/// # Examples
///
/// `Asia/Tokyo`, `America/Los_Angeles` or `Africa/Cairo`.
pub type Timezone = String;

/// A fully qualified URL that includes http:// or https://, and any special
/// characters in the URL must be correctly escaped.
/// See the following http://www.w3.org/Addressing/URL/4_URI_Recommentations.html for
/// a description of how to create fully qualified URL values.
pub type Url = String;
