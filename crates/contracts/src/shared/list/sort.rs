use crate::domain::common::{FieldValue, ListRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Единственный активный ключ сортировки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Descending,
        }
    }

    /// Header click: the same key flips the direction, a new key starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Compares two optional values. Missing values go last in both directions;
/// the direction only flips the order of present values.
pub fn compare_optional(
    a: Option<&FieldValue>,
    b: Option<&FieldValue>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.compare(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Стабильная сортировка: записи с равным ключом сохраняют исходный порядок
pub fn sort_records<T: ListRecord>(records: &mut [T], spec: &SortSpec) {
    records.sort_by(|a, b| {
        compare_optional(
            a.field(&spec.field).as_ref(),
            b.field(&spec.field).as_ref(),
            spec.direction,
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::test_support::Probe;
    use chrono::{TimeZone, Utc};

    fn ids(records: &[Probe]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_same_key_flips_new_key_resets() {
        let mut spec = SortSpec::ascending("title");
        spec.toggle("title");
        assert_eq!(spec.direction, SortDirection::Descending);
        spec.toggle("title");
        assert_eq!(spec.direction, SortDirection::Ascending);
        spec.toggle("title");
        spec.toggle("priority");
        assert_eq!(spec, SortSpec::ascending("priority"));
    }

    #[test]
    fn test_stable_for_equal_keys_in_both_directions() {
        let mut records = vec![
            Probe::new("a", "x", "open", 2),
            Probe::new("b", "x", "open", 3),
            Probe::new("c", "x", "open", 2),
            Probe::new("d", "x", "open", 3),
        ];
        sort_records(&mut records, &SortSpec::descending("priority"));
        assert_eq!(ids(&records), vec!["b", "d", "a", "c"]);

        let mut records = vec![
            Probe::new("a", "x", "open", 2),
            Probe::new("b", "x", "open", 3),
            Probe::new("c", "x", "open", 2),
            Probe::new("d", "x", "open", 3),
        ];
        sort_records(&mut records, &SortSpec::ascending("priority"));
        assert_eq!(ids(&records), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let mut records = vec![
            Probe::new("1", "charlie", "open", 1),
            Probe::new("2", "Alpha", "open", 1),
            Probe::new("3", "bravo", "open", 1),
        ];
        sort_records(&mut records, &SortSpec::ascending("title"));
        assert_eq!(ids(&records), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_missing_dates_sort_last_regardless_of_direction() {
        let at = |day| Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
        let build = || {
            vec![
                Probe::new("none-1", "x", "open", 1),
                Probe::new("early", "x", "open", 1).created(at(1)),
                Probe::new("none-2", "x", "open", 1),
                Probe::new("late", "x", "open", 1).created(at(20)),
            ]
        };

        let mut records = build();
        sort_records(&mut records, &SortSpec::ascending("created_at"));
        assert_eq!(ids(&records), vec!["early", "late", "none-1", "none-2"]);

        let mut records = build();
        sort_records(&mut records, &SortSpec::descending("created_at"));
        assert_eq!(ids(&records), vec!["late", "early", "none-1", "none-2"]);
    }
}
