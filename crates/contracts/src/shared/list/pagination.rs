use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Размеры страницы, доступные в PaginationControls
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Страница отфильтрованной и отсортированной коллекции.
///
/// `page` is 1-based; `start_index` / `end_index` are 0-based offsets into the
/// filtered collection, `end_index` exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            start_index: 0,
            end_index: 0,
            total_count: 0,
            total_pages: 1,
            has_next: false,
            has_prev: false,
        }
    }

    /// "21–25 of 25" style range label; "0 of 0" when the page is empty.
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            format!("0 of {}", self.total_count)
        } else {
            format!("{}–{} of {}", self.start_index + 1, self.end_index, self.total_count)
        }
    }
}

/// `ceil(count / size)`, never less than 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Вырезает страницу `page` (с 1) размера `page_size`.
///
/// A page past the end yields an empty slice rather than wrapping around or
/// failing. Zero page / page size are clamped to 1.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_count = records.len();
    let total_pages = total_pages(total_count, page_size);

    let start_index = (page - 1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(total_count).max(start_index);
    let items = if start_index < total_count {
        records[start_index..end_index].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        page,
        page_size,
        start_index,
        end_index,
        total_count,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_last_partial_page() {
        let records: Vec<u32> = (0..25).collect();
        let page = paginate(&records, 3, 10);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
        assert_eq!((page.start_index, page.end_index), (20, 25));
        assert!(!page.has_next);
        assert!(page.has_prev);
        assert_eq!(page.range_label(), "21–25 of 25");
    }

    #[test]
    fn test_first_page_flags() {
        let records: Vec<u32> = (0..25).collect();
        let page = paginate(&records, 1, 10);
        assert_eq!(page.items.len(), 10);
        assert!(page.has_next);
        assert!(!page.has_prev);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records: Vec<u32> = (0..25).collect();
        let page = paginate(&records, 100, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.start_index, 990);
        assert!(!page.has_next);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let records: Vec<u32> = Vec::new();
        let page = paginate(&records, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.range_label(), "0 of 0");
    }

    #[test]
    fn test_zero_page_is_clamped_to_first() {
        let records: Vec<u32> = (0..3).collect();
        let page = paginate(&records, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![0]);
    }
}
