use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Wire format for dates, as the committee writes them: 15/08/2024
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Wire format for schedule timestamps: 13/03/2024 19:00
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("invalid date '{0}', expected dd/mm/yyyy")]
    Date(String),

    #[error("invalid timestamp '{0}', expected dd/mm/yyyy HH:MM")]
    DateTime(String),
}

/// Parse a dd/mm/yyyy string. Malformed input fails here, at the boundary;
/// an invalid date can never enter the domain.
pub fn parse_br_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DateParseError::Date(input.to_string()))
}

pub fn format_br_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_br_datetime(input: &str) -> Result<NaiveDateTime, DateParseError> {
    NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT)
        .map_err(|_| DateParseError::DateTime(input.to_string()))
}

pub fn format_br_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

/// Serde adapter keeping `NaiveDate` fields in the dd/mm/yyyy wire format.
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_br_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_br_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `NaiveDateTime` fields in dd/mm/yyyy HH:MM format.
pub mod br_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        datetime: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_br_datetime(*datetime))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_br_datetime(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_br_date() {
        let date = parse_br_date("15/08/2024").unwrap();
        assert_eq!(format_br_date(date), "15/08/2024");
        assert_eq!(parse_br_date(" 05/07/2024 ").unwrap(), date_ymd(2024, 7, 5));
    }

    #[test]
    fn test_parse_br_date_rejects_malformed() {
        assert!(matches!(parse_br_date("soon"), Err(DateParseError::Date(_))));
        assert!(parse_br_date("2024-08-15").is_err());
        assert!(parse_br_date("15/8").is_err());
        // Calendar overflow is rejected, not wrapped
        assert!(parse_br_date("31/02/2024").is_err());
    }

    #[test]
    fn test_parse_br_datetime() {
        let dt = parse_br_datetime("13/03/2024 19:00").unwrap();
        assert_eq!(format_br_datetime(dt), "13/03/2024 19:00");
        assert!(parse_br_datetime("13/03/2024").is_err());
        assert!(parse_br_datetime("13/03/2024 25:00").is_err());
    }

    fn date_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
