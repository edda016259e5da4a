use contracts::enums::{Department, Role};
use contracts::shared::notification::ToastCategory;
use contracts::system::auth::UserInfo;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;

use crate::shared::components::form_field::options_of;
use crate::shared::form_state::FormState;
use crate::system::users::api;

/// Роли, которые может выдать текущий пользователь: не выше собственной
pub fn role_options(actor: Option<&UserInfo>) -> Vec<(String, String)> {
    let granted = Role::all()
        .into_iter()
        .filter(|role| actor.is_some_and(|u| u.has_role(*role)));
    options_of(granted, Role::code, Role::display_name)
}

pub fn department_options() -> Vec<(String, String)> {
    options_of(Department::all(), Department::code, Department::display_name)
}

#[derive(Clone)]
pub struct CreateUserViewModel {
    pub state: FormState<CreateUserDto>,
}

impl CreateUserViewModel {
    pub fn new(actor: Option<&UserInfo>) -> Self {
        let dto = CreateUserDto {
            department: actor.and_then(|u| u.department),
            ..CreateUserDto::default()
        };
        Self {
            state: FormState::new(dto, ToastCategory::User),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let username = self.state.form.with_untracked(|f| f.username.clone());
        self.state.submit(
            CreateUserDto::validate,
            api::create_user,
            format!("User \"{}\" created", username.trim()),
            on_saved,
        );
    }
}

#[derive(Clone)]
pub struct EditUserViewModel {
    pub state: FormState<UpdateUserDto>,
    pub id: String,
    pub username: String,
    /// Собственную роль и активность не меняем
    pub is_self: bool,
}

impl EditUserViewModel {
    pub fn new(user: &User, actor: Option<&UserInfo>) -> Self {
        Self {
            state: FormState::new(UpdateUserDto::from(user), ToastCategory::User),
            id: user.id.clone(),
            username: user.username.clone(),
            is_self: actor.is_some_and(|a| a.id == user.id),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let id = self.id.clone();
        self.state.submit(
            UpdateUserDto::validate,
            move |dto| api::update_user(id, dto),
            format!("User \"{}\" updated", self.username),
            on_saved,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> UserInfo {
        UserInfo {
            id: "me".into(),
            username: "me".into(),
            full_name: None,
            email: None,
            role,
            department: Some(Department::It),
            is_active: true,
        }
    }

    #[test]
    fn test_role_options_capped_by_actor_role() {
        let codes = |options: Vec<(String, String)>| options.into_iter().map(|(code, _)| code).collect::<Vec<_>>();
        assert_eq!(codes(role_options(Some(&actor(Role::Manager)))), vec!["user", "manager"]);
        assert_eq!(codes(role_options(Some(&actor(Role::Admin)))), vec!["user", "manager", "admin"]);
        assert!(role_options(None).is_empty());
    }
}
