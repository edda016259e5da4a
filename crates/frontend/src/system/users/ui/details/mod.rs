//! Карточка пользователя: создание (логин + пароль) и редактирование.

mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::{role_options, CreateUserViewModel, EditUserViewModel};
