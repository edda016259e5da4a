use crate::domain::common::{FieldValue, ListRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение фильтра по одному полю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Literal compared according to the field kind (text: case-insensitive,
    /// enum / id: exact, dates: calendar day "YYYY-MM-DD")
    Is(String),
    Flag(bool),
    OnDay(NaiveDate),
    /// Inclusive calendar-day range; an open end is unbounded
    Between {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn is(value: impl Into<String>) -> Self {
        FilterValue::Is(value.into())
    }

    /// Empty values put no constraint on the field.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Is(value) => value.trim().is_empty(),
            FilterValue::Between { from, to } => from.is_none() && to.is_none(),
            FilterValue::Flag(_) | FilterValue::OnDay(_) => false,
        }
    }

    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        match self {
            FilterValue::Is(literal) => value.matches_literal(literal.trim()),
            FilterValue::Flag(expected) => matches!(value, FieldValue::Bool(actual) if actual == expected),
            FilterValue::OnDay(day) => value.day() == Some(*day),
            FilterValue::Between { from, to } => match value.day() {
                Some(day) => {
                    from.map_or(true, |from| day >= from) && to.map_or(true, |to| day <= to)
                }
                None => false,
            },
        }
    }
}

/// Набор активных фильтров: поле → значение, плюс строка поиска.
///
/// Фильтры объединяются по AND; пустой набор выбирает всю коллекцию.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    search: String,
    fields: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSet::set`].
    pub fn with(mut self, field: &str, value: FilterValue) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.set_search(search);
        self
    }

    /// Sets a field constraint; an empty value removes it.
    pub fn set(&mut self, field: &str, value: FilterValue) {
        if value.is_empty() {
            self.fields.remove(field);
        } else {
            self.fields.insert(field.to_string(), value);
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    /// Literal of an `Is` filter, for binding to a select box.
    pub fn literal(&self, field: &str) -> String {
        match self.fields.get(field) {
            Some(FilterValue::Is(value)) => value.clone(),
            _ => String::new(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.fields.is_empty()
    }

    /// Number of active constraints (search counts as one).
    pub fn active_count(&self) -> usize {
        self.fields.len() + usize::from(!self.search.trim().is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Union of two filter sets; on a shared field `other` wins.
    pub fn union(&self, other: &FilterSet) -> FilterSet {
        let mut merged = self.clone();
        for (field, value) in &other.fields {
            merged.fields.insert(field.clone(), value.clone());
        }
        if !other.search.trim().is_empty() {
            merged.search = other.search.clone();
        }
        merged
    }

    /// AND over every active constraint, stopping at the first failure.
    pub fn matches<T: ListRecord>(&self, record: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !record.matches_search(&needle) {
            return false;
        }
        self.fields
            .iter()
            .all(|(field, value)| value.matches(record.field(field).as_ref()))
    }
}

/// Фильтрует коллекцию, сохраняя исходный относительный порядок
pub fn filter_records<T: ListRecord + Clone>(records: &[T], filters: &FilterSet) -> Vec<T> {
    if filters.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| filters.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::test_support::Probe;

    fn sample() -> Vec<Probe> {
        vec![
            Probe::new("1", "Printer jam", "open", 3),
            Probe::new("2", "VPN down", "closed", 4),
            Probe::new("3", "printer toner", "open", 1),
            Probe::new("4", "New laptop", "in_progress", 2),
        ]
    }

    fn ids(records: &[Probe]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = sample();
        assert_eq!(filter_records(&records, &FilterSet::new()), records);
    }

    #[test]
    fn test_empty_values_put_no_constraint() {
        let filters = FilterSet::new()
            .with("status", FilterValue::is("  "))
            .with("created", FilterValue::Between { from: None, to: None });
        assert!(filters.is_empty());
        assert_eq!(filter_records(&sample(), &filters).len(), 4);
    }

    #[test]
    fn test_exact_match_on_keyword_fields() {
        let filters = FilterSet::new().with("status", FilterValue::is("open"));
        assert_eq!(ids(&filter_records(&sample(), &filters)), vec!["1", "3"]);
        let filters = FilterSet::new().with("status", FilterValue::is("Open"));
        assert!(filter_records(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_text_fields_match_case_insensitively() {
        let filters = FilterSet::new().with("title", FilterValue::is("vpn DOWN"));
        assert_eq!(ids(&filter_records(&sample(), &filters)), vec!["2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filters = FilterSet::new().with_search("PRINTER");
        assert_eq!(ids(&filter_records(&sample(), &filters)), vec!["1", "3"]);
    }

    #[test]
    fn test_missing_field_fails_active_filter() {
        let filters = FilterSet::new().with("assignee", FilterValue::is("u1"));
        assert!(filter_records(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_disjoint_filters_compose() {
        let records = sample();
        let f1 = FilterSet::new().with("status", FilterValue::is("open"));
        let f2 = FilterSet::new().with_search("toner");
        let stepwise = filter_records(&filter_records(&records, &f1), &f2);
        let combined = filter_records(&records, &f1.union(&f2));
        assert_eq!(stepwise, combined);
        assert_eq!(ids(&combined), vec!["3"]);
    }

    #[test]
    fn test_day_range_is_inclusive() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        let range = FilterValue::Between {
            from: Some(day(10)),
            to: Some(day(12)),
        };
        assert!(range.matches(Some(&FieldValue::Day(day(10)))));
        assert!(range.matches(Some(&FieldValue::Day(day(12)))));
        assert!(!range.matches(Some(&FieldValue::Day(day(13)))));
        assert!(!range.matches(None));
    }
}
