use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Значение поля записи, как его видит движок фильтрации и сортировки.
///
/// Тип варианта определяет семантику: `Text` сравнивается без учёта регистра,
/// `Keyword` (enum / id) сравнивается точно, `Ranked` фильтруется по ключу, а сортируется
/// по рангу, даты фильтруются по календарному дню.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Keyword(String),
    Ranked { key: &'static str, rank: i64 },
    Number(f64),
    Bool(bool),
    Instant(DateTime<Utc>),
    Day(NaiveDate),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        FieldValue::Keyword(value.into())
    }

    /// Calendar day of a date-like value
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Instant(at) => Some(at.date_naive()),
            FieldValue::Day(day) => Some(*day),
            _ => None,
        }
    }

    /// Exact (or case-insensitive, for text) equality against a filter literal.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            FieldValue::Text(value) => value.to_lowercase() == literal.to_lowercase(),
            FieldValue::Keyword(value) => value == literal,
            FieldValue::Ranked { key, .. } => *key == literal,
            FieldValue::Number(value) => literal
                .trim()
                .parse::<f64>()
                .map(|parsed| parsed == *value)
                .unwrap_or(false),
            FieldValue::Bool(value) => literal
                .trim()
                .parse::<bool>()
                .map(|parsed| parsed == *value)
                .unwrap_or(false),
            FieldValue::Instant(_) | FieldValue::Day(_) => {
                match (self.day(), NaiveDate::parse_from_str(literal.trim(), "%Y-%m-%d")) {
                    (Some(day), Ok(parsed)) => day == parsed,
                    _ => false,
                }
            }
        }
    }

    /// Ascending comparison of two values of the same kind.
    ///
    /// Text is compared case-folded first so that "alpha" and "Beta" order the
    /// way a reader expects; values of different kinds compare as equal.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b))
            | (FieldValue::Keyword(a), FieldValue::Keyword(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (FieldValue::Ranked { rank: a, .. }, FieldValue::Ranked { rank: b, .. }) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Instant(a), FieldValue::Instant(b)) => a.cmp(b),
            (FieldValue::Day(a), FieldValue::Day(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_matches_case_insensitively() {
        assert!(FieldValue::text("Printer").matches_literal("printer"));
        assert!(!FieldValue::keyword("Open").matches_literal("open"));
        assert!(FieldValue::keyword("open").matches_literal("open"));
    }

    #[test]
    fn test_instant_matches_by_calendar_day() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap();
        assert!(FieldValue::Instant(at).matches_literal("2024-03-15"));
        assert!(!FieldValue::Instant(at).matches_literal("2024-03-16"));
        assert!(!FieldValue::Instant(at).matches_literal("yesterday"));
    }

    #[test]
    fn test_ranked_compares_by_rank_and_filters_by_key() {
        let high = FieldValue::Ranked { key: "high", rank: 3 };
        let low = FieldValue::Ranked { key: "low", rank: 1 };
        assert_eq!(high.compare(&low), Ordering::Greater);
        assert!(high.matches_literal("high"));
    }

    #[test]
    fn test_number_and_bool_literals() {
        assert!(FieldValue::Number(7.5).matches_literal("7.5"));
        assert!(FieldValue::Bool(false).matches_literal("false"));
        assert!(!FieldValue::Bool(false).matches_literal("no"));
    }
}
