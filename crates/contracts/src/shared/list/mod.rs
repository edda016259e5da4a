//! Движок списков: фильтрация, сортировка, пагинация и состояние списка.
//!
//! Everything here is pure and works on an in-memory collection; the list
//! views own a [`ListState`] and call [`ListState::derive`] on every render.

pub mod confirm;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod state;

pub use confirm::Confirmation;
pub use filter::{filter_records, FilterSet, FilterValue};
pub use pagination::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use sort::{compare_optional, sort_records, SortDirection, SortSpec};
pub use state::{ListCommand, ListState, LoadPhase, RequestGeneration};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::common::{FieldValue, ListRecord};
    use chrono::{DateTime, Utc};

    /// Minimal record used by the engine tests.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Probe {
        pub id: String,
        pub title: String,
        pub status: String,
        pub priority: i64,
        pub created_at: Option<DateTime<Utc>>,
    }

    impl Probe {
        pub fn new(id: &str, title: &str, status: &str, priority: i64) -> Self {
            Self {
                id: id.to_string(),
                title: title.to_string(),
                status: status.to_string(),
                priority,
                created_at: None,
            }
        }

        pub fn created(mut self, at: DateTime<Utc>) -> Self {
            self.created_at = Some(at);
            self
        }
    }

    impl ListRecord for Probe {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "title" => Some(FieldValue::text(&self.title)),
                "status" => Some(FieldValue::keyword(&self.status)),
                "priority" => Some(FieldValue::Ranked {
                    key: "priority",
                    rank: self.priority,
                }),
                "created_at" => self.created_at.map(FieldValue::Instant),
                _ => None,
            }
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Probe;
    use super::*;

    #[test]
    fn test_search_refinement_resets_to_first_page() {
        // 30 titles contain "abc", 12 of them also contain "abcd"
        let records: Vec<Probe> = (0..40)
            .map(|i| {
                let title = match i {
                    0..=11 => format!("abcd-{:02}", i),
                    12..=29 => format!("abc-{:02}", i),
                    _ => format!("zzz-{:02}", i),
                };
                Probe::new(&i.to_string(), &title, "open", 1)
            })
            .collect();

        let mut state = ListState::new(SortSpec::ascending("title")).with_page_size(10);
        state.set_search("abc");
        state.go_to_page(3);
        let page = state.derive(&records);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_count, 30);
        assert_eq!(page.items.len(), 10);

        assert_eq!(state.set_search("abcd"), ListCommand::Rederive);
        let page = state.derive(&records);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);
        assert!(page.items.iter().all(|p| p.title.starts_with("abcd")));
    }

    #[test]
    fn test_derive_never_mutates_source() {
        let records = vec![
            Probe::new("1", "b", "open", 1),
            Probe::new("2", "a", "open", 1),
        ];
        let snapshot = records.clone();
        let state = ListState::new(SortSpec::ascending("title"));
        let page = state.derive(&records);
        assert_eq!(page.items[0].id, "2");
        assert_eq!(records, snapshot);
    }
}
