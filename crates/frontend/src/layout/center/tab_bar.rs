use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let key = StoredValue::new(tab.key);
    let is_active = Memo::new(move |_| {
        tabs_store.active.with(|active| key.with_value(|k| active.as_deref() == Some(k.as_str())))
    });

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div class="tab" class:tab--active=is_active on:click=on_click>
            <span class="tab__title">{tab.title}</span>
            <button class="tab__close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs__bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab /> }
            />
        </div>
    }
}
