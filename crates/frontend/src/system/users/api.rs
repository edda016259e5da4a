use contracts::shared::api::ApiError;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api_utils::{create_item, delete_item, fetch_list, update_item};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    fetch_list::<User>().await
}

pub async fn create_user(dto: CreateUserDto) -> Result<(), ApiError> {
    create_item::<User, _>(&dto).await
}

/// Password is changed only when the DTO carries one
pub async fn update_user(id: String, dto: UpdateUserDto) -> Result<(), ApiError> {
    update_item::<User, _>(&id, &dto).await
}

pub async fn delete_user(id: String) -> Result<(), ApiError> {
    delete_item::<User>(&id).await
}
