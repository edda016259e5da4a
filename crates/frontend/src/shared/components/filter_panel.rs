use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сворачиваемая панель фильтров; пагинация живёт в её заголовке
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Number of active field filters plus search (badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Сбросить все фильтры
    on_clear: Callback<()>,

    #[prop(into)] pagination_controls: ViewFn,

    /// Filter form fields
    #[prop(into)]
    filter_content: ViewFn,
) -> impl IntoView {
    let chevron_class = move || {
        if is_expanded.get() {
            "filter-panel__chevron filter-panel__chevron--expanded"
        } else {
            "filter-panel__chevron"
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=chevron_class>{icon("chevron-down")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_clear.run(())
                    >
                        "Clear filters"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
        </div>
    }
}

/// Выпадающий фильтр по одному полю; пустое значение означает «все»
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional, into)] all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| "All".to_string());
    view! {
        <div class="filter-field">
            <label class="filter-field__label">{label}</label>
            <select
                class="filter-field__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{all_label}</option>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(id, text)| {
                            let selected = id == current;
                            view! { <option value=id selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
