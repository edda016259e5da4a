use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const USER_KEY: &str = "user";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save access token to sessionStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from sessionStorage
pub fn get_access_token() -> Option<String> {
    get_session_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Save current user as JSON
pub fn save_user(user: &UserInfo) {
    let Some(storage) = get_session_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => log::error!("Failed to store user: {}", e),
    }
}

/// Stored user; a corrupt entry reads as absent.
pub fn get_user() -> Option<UserInfo> {
    let json = get_session_storage()?.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring stored user: {}", e);
            None
        }
    }
}

/// Clear token and user
pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
