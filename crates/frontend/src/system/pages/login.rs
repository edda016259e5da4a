use contracts::shared::notification::ToastCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let toasts = use_toast();

    let can_submit = move || {
        !is_loading.get() && !username.with(|u| u.trim().is_empty()) && !password.with(String::is_empty)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            // Успешный вход переключает AppShell на MainLayout
            match do_login(set_auth_state, username_val, password_val).await {
                Ok(user) => {
                    log::info!("Logged in as {} ({})", user.username, user.role);
                    toasts.success(ToastCategory::Auth, format!("Welcome, {}", user.display_name()));
                }
                Err(err) => {
                    let _ = error_message.try_set(Some(err.message.clone()));
                    let _ = password.try_set(String::new());
                    toasts.report(ToastCategory::Auth, "Login failed", &err);
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Time Tracker"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.with(Option::is_some)>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label required=true>"Username"</Label>
                        <input
                            type="text"
                            class="form__input"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <Label required=true>"Password"</Label>
                        <input
                            type="password"
                            class="form__input"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary login-box__submit"
                        disabled=move || !can_submit()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
