//! Application Shell - корневые компоненты приложения
//!
//! - `AppShell` - auth gate (показывает LoginPage или MainLayout)
//! - `MainLayout` - основной layout (TopHeader + Sidebar + Tabs)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Раздел, открываемый после входа, если в URL нет `?active=`
const START_TAB: &str = "a004_ticket";

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    tabs_store.init_router_integration(START_TAB);

    view! { <Shell /> }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|state| state.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
