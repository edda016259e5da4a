//! Serde helpers for calendar dates.
//!
//! The API sends dates either as `"2024-03-15"` or as a full timestamp
//! `"2024-03-15T00:00:00.000Z"`; both deserialize to the same `NaiveDate`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|at| at.date_naive())
        })
        .or_else(|| {
            value
                .split('T')
                .next()
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        })
}

pub mod flexible_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&day.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_day(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

pub mod optional_flexible_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(day: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match day {
            Some(day) => serializer.serialize_str(&day.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Missing, `null` and empty strings all read as `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_day(value)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Probe {
        #[serde(with = "flexible_date")]
        date: NaiveDate,
    }

    #[test]
    fn test_accepts_plain_date_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let plain: Probe = serde_json::from_str(r#"{"date":"2024-03-15"}"#).unwrap();
        let stamped: Probe =
            serde_json::from_str(r#"{"date":"2024-03-15T00:00:00.000Z"}"#).unwrap();
        assert_eq!(plain.date, expected);
        assert_eq!(stamped.date, expected);
    }

    #[derive(serde::Deserialize)]
    struct MaybeProbe {
        #[serde(default, with = "optional_flexible_date")]
        due: Option<NaiveDate>,
    }

    #[test]
    fn test_optional_date_tolerates_missing_and_empty() {
        let missing: MaybeProbe = serde_json::from_str("{}").unwrap();
        let empty: MaybeProbe = serde_json::from_str(r#"{"due":""}"#).unwrap();
        let null: MaybeProbe = serde_json::from_str(r#"{"due":null}"#).unwrap();
        let set: MaybeProbe = serde_json::from_str(r#"{"due":"2024-05-01T10:00:00Z"}"#).unwrap();
        assert_eq!(missing.due, None);
        assert_eq!(empty.due, None);
        assert_eq!(null.due, None);
        assert_eq!(set.due, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"date":"15/03/2024"}"#).is_err());
        assert_eq!(parse_day("not a date"), None);
    }
}
