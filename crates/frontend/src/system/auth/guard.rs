use contracts::enums::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for users holding at least `role`
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state.with(|state| {
                    state.access_token.is_some()
                        && state.user_info.as_ref().is_some_and(|u| u.has_role(role))
                })
            }
            fallback=move || view! {
                <div class="access-denied">
                    {format!("Access denied. {} privileges required.", role.display_name())}
                </div>
            }
        >
            {children()}
        </Show>
    }
}
