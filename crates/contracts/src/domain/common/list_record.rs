use super::FieldValue;

/// Запись, которая может отображаться в списке с фильтрами, сортировкой и пагинацией.
///
/// Заменяет пару `Searchable` / `Sortable`: один и тот же доступ к полям
/// используется и для фильтра, и для сортировки.
pub trait ListRecord {
    /// Canonical identifier (already normalized from `id` / `_id`)
    fn record_id(&self) -> &str;

    /// Value of a filterable / sortable field, `None` when the field is empty
    /// or unknown for this kind of record.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Fields matched by the free-text search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over [`ListRecord::search_fields`].
    /// `needle` is expected to be lowercased by the caller.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}
