use chrono::NaiveDate;

use crate::calendar::ServiceId;

/// Whether a [`CalendarDate`] adds or removes service on its date.
///
/// See <https://gtfs.org/schedule/reference/#calendar_datestxt>,
/// `exception_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum ExceptionType {
    Added = 1,
    Removed = 2,
}

/// An exception to a [`crate::calendar::Calendar`] pattern on a single
/// date, corresponding to one row of `calendar_dates.txt`. A feed may
/// also use `calendar_dates.txt` exclusively, with no matching
/// `calendar.txt` row, to define service through exceptions alone.
///
/// Unique on `(service_id, date)`.
///
/// See <https://gtfs.org/schedule/reference/#calendar_datestxt>.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalendarDate {
    pub service_id: ServiceId,
    pub date: NaiveDate,
    pub exception_type: ExceptionType,
}
