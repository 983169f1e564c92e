use chrono::NaiveDate;
use model::calendar::Calendar;
use serde::{Deserialize, Deserializer};
use storage::error::{CoreError, Result};
use utility::id::Id;

/// Deserializes a GTFS date field (`YYYYMMDD`) into a [`NaiveDate`].
pub fn deserialize_yyyymmdd<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, "%Y%m%d")
        .map_err(|_| serde::de::Error::custom(format!("invalid GTFS date: {raw}")))
}

/// As [`deserialize_yyyymmdd`], but tolerates a missing/empty field.
pub fn deserialize_yyyymmdd_option<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y%m%d")
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid GTFS date: {raw}"))),
    }
}

/// 0/1 flag used for each weekday column of `calendar.txt`.
fn service_available<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    match raw {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid service availability flag: {other}"
        ))),
    }
}

/// One row of `calendar.txt`.
///
/// See <https://gtfs.org/schedule/reference/#calendartxt>.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRow {
    pub service_id: String,

    #[serde(deserialize_with = "service_available")]
    pub monday: bool,
    #[serde(deserialize_with = "service_available")]
    pub tuesday: bool,
    #[serde(deserialize_with = "service_available")]
    pub wednesday: bool,
    #[serde(deserialize_with = "service_available")]
    pub thursday: bool,
    #[serde(deserialize_with = "service_available")]
    pub friday: bool,
    #[serde(deserialize_with = "service_available")]
    pub saturday: bool,
    #[serde(deserialize_with = "service_available")]
    pub sunday: bool,

    #[serde(deserialize_with = "deserialize_yyyymmdd")]
    pub start_date: NaiveDate,

    #[serde(deserialize_with = "deserialize_yyyymmdd")]
    pub end_date: NaiveDate,
}

impl CalendarRow {
    /// Converts this row into the storage-facing [`Calendar`].
    pub fn into_model(self) -> Result<Calendar> {
        if self.service_id.is_empty() {
            return Err(CoreError::Parse("service_id must not be empty".into()));
        }
        if self.start_date > self.end_date {
            return Err(CoreError::Parse(format!(
                "service {} has start_date after end_date",
                self.service_id
            )));
        }
        Ok(Calendar {
            service_id: Id::new(self.service_id),
            monday: self.monday,
            tuesday: self.tuesday,
            wednesday: self.wednesday,
            thursday: self.thursday,
            friday: self.friday,
            saturday: self.saturday,
            sunday: self.sunday,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_after_end_is_rejected() {
        let row = CalendarRow {
            service_id: "WD".to_owned(),
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            sunday: false,
            start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert!(row.into_model().is_err());
    }

    #[test]
    fn date_parses_from_yyyymmdd() {
        let json = "\"20200101\"";
        let mut de = serde_json::Deserializer::from_str(json);
        let date = deserialize_yyyymmdd(&mut de).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
