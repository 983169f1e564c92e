use chrono::NaiveDate;
use model::calendar_date::{CalendarDate, ExceptionType};
use serde::Deserialize;
use storage::error::{CoreError, Result};
use utility::id::Id;

use super::calendar::deserialize_yyyymmdd;

/// One row of `calendar_dates.txt`.
///
/// See <https://gtfs.org/schedule/reference/#calendar_datestxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarDateRow {
    pub service_id: String,

    #[serde(deserialize_with = "deserialize_yyyymmdd")]
    pub date: NaiveDate,

    pub exception_type: ExceptionType,
}

impl CalendarDateRow {
    /// Converts this row into the storage-facing [`CalendarDate`].
    pub fn into_model(self) -> Result<CalendarDate> {
        if self.service_id.is_empty() {
            return Err(CoreError::Parse("service_id must not be empty".into()));
        }
        Ok(CalendarDate {
            service_id: Id::new(self.service_id),
            date: self.date,
            exception_type: self.exception_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_service_id_is_rejected() {
        let row = CalendarDateRow {
            service_id: String::new(),
            date: NaiveDate::from_ymd_opt(2020, 12, 25).unwrap(),
            exception_type: ExceptionType::Added,
        };
        assert!(row.into_model().is_err());
    }
}
