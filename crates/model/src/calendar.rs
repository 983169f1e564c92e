use chrono::{Datelike, NaiveDate, Weekday};
use utility::id::{HasId, Id};

pub type ServiceId = Id<Calendar>;

/// A weekly service pattern, corresponding to one row of `calendar.txt`.
///
/// See <https://gtfs.org/schedule/reference/#calendartxt>.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Calendar {
    /// `service_id`. Identifies a set of dates when service is available.
    pub service_id: ServiceId,

    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,

    /// `start_date`. First day the pattern is in effect, inclusive.
    pub start_date: NaiveDate,

    /// `end_date`. Last day the pattern is in effect, inclusive.
    pub end_date: NaiveDate,
}

impl Calendar {
    /// Whether `date` falls within `[start_date, end_date]` and its
    /// weekday flag is set. Does not account for `calendar_dates.txt`
    /// exceptions; callers resolving actual service for a date must
    /// combine this with the matching `CalendarDate` rows.
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        if date < self.start_date || date > self.end_date {
            return false;
        }
        match date.weekday() {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

impl HasId for Calendar {
    type IdType = String;
}
