pub mod duration {
    use chrono::Duration;
    use serde::de::{Error as DeError, IntoDeserializer};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a duration as `HH:MM:SS`, where `HH` may exceed 23 for
    /// GTFS stop-times that cross midnight (service-date overflow).
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let total_seconds = duration.num_seconds();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        let formatted = format!("{:02}:{:02}:{:02}", hours, minutes, seconds);
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(D::Error::custom)
    }

    pub fn serialize_option<S>(
        option_duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match option_duration {
            Some(d) => serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize_option<'de, D>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) if !s.is_empty() => {
                let duration = deserialize(s.as_str().into_deserializer())?;
                Ok(Some(duration))
            }
            _ => Ok(None),
        }
    }

    /// Parses a GTFS `HHMMSS` time string (`H:MM:SS` also tolerated) into
    /// a duration since the service date's noon-minus-12h origin. Hours
    /// are not bounded to 23: a trip ending after midnight is expressed
    /// with hours >= 24, per the GTFS convention.
    pub fn parse(s: &str) -> Result<Duration, String> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(format!("expected HH:MM:SS, got {s:?}"));
        }

        let hours: i64 = parts[0].parse().map_err(|_| format!("bad hours in {s:?}"))?;
        let minutes: i64 = parts[1]
            .parse()
            .map_err(|_| format!("bad minutes in {s:?}"))?;
        let seconds: i64 = parts[2]
            .parse()
            .map_err(|_| format!("bad seconds in {s:?}"))?;

        if !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
            return Err(format!("minutes/seconds out of range in {s:?}"));
        }

        Ok(Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds))
    }

    /// Formats a duration back to `HH:MM:SS`, preserving hours >= 24.
    pub fn format(duration: Duration) -> String {
        let total_seconds = duration.num_seconds();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn round_trips_ordinary_time() {
            let d = parse("23:59:59").unwrap();
            assert_eq!(format(d), "23:59:59");
        }

        #[test]
        fn parses_overflow_hours() {
            let d = parse("25:00:00").unwrap();
            assert_eq!(d.num_seconds(), 25 * 3600);
            assert_eq!(format(d), "25:00:00");
        }

        #[test]
        fn parses_single_digit_hour() {
            let d = parse("5:00:00").unwrap();
            assert_eq!(format(d), "05:00:00");
        }

        #[test]
        fn rejects_bad_shape() {
            assert!(parse("bad").is_err());
            assert!(parse("12:00").is_err());
            assert!(parse("12:60:00").is_err());
            assert!(parse("12:00:60").is_err());
        }
    }
}
