//! Боковое меню: группы разделов, видимые текущей роли

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{menu_for, NavItem};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::enums::Role;
use leptos::prelude::*;

#[component]
fn SidebarItem(item: NavItem) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_active = move || ctx.active.with(|active| active.as_deref() == Some(item.key));

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
            on:click=move |_| ctx.open_tab(item.key, item.label)
        >
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span>{item.label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let role = move || {
        auth_state.with(|state| state.user_info.as_ref().map(|u| u.role).unwrap_or(Role::User))
    };

    view! {
        <div class="app-sidebar__content">
            {move || {
                menu_for(role())
                    .into_iter()
                    .map(|(group, items)| view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-title">{group}</div>
                            {items.into_iter().map(|item| view! { <SidebarItem item=item /> }).collect_view()}
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
