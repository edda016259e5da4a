use contracts::shared::api::ApiError;
use contracts::shared::notification::ToastCategory;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::toast::use_toast;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Session as left in sessionStorage by the previous page load.
    fn restore() -> Self {
        match (storage::get_access_token(), storage::get_user()) {
            (Some(token), Some(user)) => Self {
                access_token: Some(token),
                user_info: Some(user),
            },
            _ => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }
}

/// Auth context provider component
///
/// The stored session is shown immediately; `/auth/me` confirms it in the
/// background and refreshes the cached user.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = AuthState::restore();
    let has_session = initial.is_authenticated();
    let (auth_state, set_auth_state) = signal(initial);

    if has_session {
        let toasts = use_toast();
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user_info) => {
                    log::debug!("Session confirmed for {}", user_info.username);
                    storage::save_user(&user_info);
                    set_auth_state.update(|state| state.user_info = Some(user_info));
                }
                Err(e) if e.is_authentication() => {
                    log::warn!("Stored session rejected: {}", e);
                    expire_session(set_auth_state);
                    toasts.warning(ToastCategory::Auth, "Session expired, please sign in again");
                }
                // Offline or server trouble: keep the cached session
                Err(e) => log::warn!("Session check failed: {}", e),
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Current user for ACL checks and display
pub fn current_user(auth_state: ReadSignal<AuthState>) -> Option<UserInfo> {
    auth_state.with(|state| state.user_info.clone())
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<UserInfo, ApiError> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_user(&response.user);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user.clone()),
    });

    Ok(response.user)
}

/// Helper: Perform logout. The local session is dropped even when the
/// server call fails.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        if let Err(e) = api::logout(&token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    expire_session(set_auth_state);
}

/// Forget the session locally (token rejected or logout)
pub fn expire_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
