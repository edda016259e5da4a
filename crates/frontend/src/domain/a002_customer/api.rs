use contracts::domain::a002_customer::{Customer, CustomerDto, CustomerQuery};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::{create_item, delete_item, fetch_list, fetch_list_with, update_item};

pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    fetch_list::<Customer>().await
}

/// `GET /customers?organizationId=` for the organization → customer cascade
pub async fn fetch_customers_of(organization_id: String) -> Result<Vec<Customer>, ApiError> {
    let query = CustomerQuery {
        organization_id: Some(organization_id),
    };
    fetch_list_with::<Customer, _>(&query).await
}

pub async fn create_customer(dto: CustomerDto) -> Result<(), ApiError> {
    create_item::<Customer, _>(&dto).await
}

pub async fn update_customer(id: String, dto: CustomerDto) -> Result<(), ApiError> {
    update_item::<Customer, _>(&id, &dto).await
}

pub async fn delete_customer(id: String) -> Result<(), ApiError> {
    delete_item::<Customer>(&id).await
}
