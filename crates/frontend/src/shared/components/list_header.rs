use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Шапка страницы-списка: заголовок, счётчик, «Новый» и «Обновить»
#[component]
pub fn ListHeader(
    #[prop(into)] title: String,
    /// Записей после фильтрации
    #[prop(into)]
    count: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
    /// Кнопка создания показывается только при наличии callback
    #[prop(optional)]
    on_create: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || count.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {on_create.map(|on_create| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_create.run(())
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </div>
        </div>
    }
}

/// Ошибка последней загрузки; данные под ней остаются видимыми
#[component]
pub fn LoadError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
}
