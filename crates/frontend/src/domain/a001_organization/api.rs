use contracts::domain::a001_organization::{Organization, OrganizationDto};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::{create_item, delete_item, fetch_list, update_item};

pub async fn fetch_organizations() -> Result<Vec<Organization>, ApiError> {
    fetch_list::<Organization>().await
}

pub async fn create_organization(dto: OrganizationDto) -> Result<(), ApiError> {
    create_item::<Organization, _>(&dto).await
}

pub async fn update_organization(id: String, dto: OrganizationDto) -> Result<(), ApiError> {
    update_item::<Organization, _>(&id, &dto).await
}

pub async fn delete_organization(id: String) -> Result<(), ApiError> {
    delete_item::<Organization>(&id).await
}
