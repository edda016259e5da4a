/// Утилиты для списков: подсветка поиска, поле поиска, индикаторы сортировки
use contracts::shared::list::{FilterSet, FilterValue, SortSpec};
use leptos::prelude::*;

/// Byte ranges of case-insensitive occurrences of `filter` in `text`.
///
/// Only texts whose lowercase form keeps byte offsets are highlighted;
/// the rest are left plain.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки. Каждое нажатие сразу уходит в `on_change`.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс активной колонки сортировки
pub fn get_sort_class(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Значение select-а для булевого фильтра: "true", "false" или "" (любой)
pub fn flag_literal(filters: &FilterSet, field: &str) -> &'static str {
    match filters.get(field) {
        Some(FilterValue::Flag(true)) => "true",
        Some(FilterValue::Flag(false)) => "false",
        _ => "",
    }
}

/// Обратное к `flag_literal`; пустое значение снимает фильтр
pub fn flag_filter(value: &str) -> FilterValue {
    match value {
        "true" => FilterValue::Flag(true),
        "false" => FilterValue::Flag(false),
        _ => FilterValue::is(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Printer jam, printer", "PRINTER"), vec![(0, 7), (13, 20)]);
        assert!(match_ranges("Printer", "  ").is_empty());
        assert!(match_ranges("Printer", "scanner").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::descending("priority");
        assert_eq!(get_sort_indicator(&sort, "priority"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "title"), " ⇅");
        assert_eq!(get_sort_class(&sort, "priority"), "sort-icon active");
    }

    #[test]
    fn test_flag_filter_select_values() {
        let mut filters = FilterSet::new();
        assert_eq!(flag_literal(&filters, "is_active"), "");

        filters.set("is_active", flag_filter("false"));
        assert_eq!(flag_literal(&filters, "is_active"), "false");

        filters.set("is_active", flag_filter(""));
        assert!(filters.get("is_active").is_none());
    }
}
