//! TopHeader - верхняя панель: переключатель меню, название, пользователь, выход.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::enums::Role;
use contracts::shared::notification::ToastCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "top-header__role top-header__role--admin",
        Role::Manager => "top-header__role top-header__role--manager",
        Role::User => "top-header__role",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let toasts = use_toast();
    let logging_out = RwSignal::new(false);

    let logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.reset();
            toasts.info(ToastCategory::Auth, "Signed out");
            let _ = logging_out.try_set(false);
        });
    };

    let user_name = move || {
        auth_state.with(|state| {
            state
                .user_info
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let user_role = move || auth_state.with(|state| state.user_info.as_ref().map(|u| u.role));
    let user_department = move || {
        auth_state.with(|state| {
            state
                .user_info
                .as_ref()
                .and_then(|u| u.department)
                .map(|d| d.display_name())
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Time Tracker"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_name}</span>
                    {move || user_role().map(|role| view! {
                        <span class=role_badge_class(role)>{role.display_name()}</span>
                    })}
                    {move || user_department().map(|department| view! {
                        <span class="top-header__department">{department}</span>
                    })}
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    disabled=move || logging_out.get()
                    title="Sign out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
