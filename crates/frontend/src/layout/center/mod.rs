pub mod tab_bar;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::prelude::*;
use tab_bar::TabBar;

/// Полоса вкладок и их содержимое
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <TabBar />
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
                <Show when=move || tabs_store.opened.with(Vec::is_empty)>
                    <div class="placeholder">"Choose a section in the menu"</div>
                </Show>
            </div>
        </div>
    }
}
