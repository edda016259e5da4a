//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Priority"
//!     sort_field="priority"
//!     sort=Signal::derive(move || list.state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки: клик переключает сортировку, рядом индикатор ▲▼
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Поле для сортировки
    sort_field: &'static str,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<SortSpec>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)] min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class=header_class on:click=move |_| on_sort.run(sort_field.to_string())>
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, sort_field))>
                    {move || sort.with(|s| get_sort_indicator(s, sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
