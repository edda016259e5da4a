use contracts::domain::a004_ticket::{Ticket, TicketAssignment, TicketDto, TicketStatusChange};
use contracts::enums::TicketStatus;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::{create_item, delete_item, fetch_item, fetch_list, update_item};

pub async fn fetch_tickets() -> Result<Vec<Ticket>, ApiError> {
    fetch_list::<Ticket>().await
}

pub async fn fetch_ticket(id: String) -> Result<Ticket, ApiError> {
    fetch_item::<Ticket>(&id).await
}

pub async fn create_ticket(dto: TicketDto) -> Result<(), ApiError> {
    create_item::<Ticket, _>(&dto).await
}

pub async fn update_ticket(id: String, dto: TicketDto) -> Result<(), ApiError> {
    update_item::<Ticket, _>(&id, &dto).await
}

pub async fn change_status(id: String, status: TicketStatus) -> Result<(), ApiError> {
    update_item::<Ticket, _>(&id, &TicketStatusChange { status }).await
}

/// `None` снимает исполнителя
pub async fn assign(id: String, assigned_to: Option<String>) -> Result<(), ApiError> {
    update_item::<Ticket, _>(&id, &TicketAssignment { assigned_to }).await
}

pub async fn delete_ticket(id: String) -> Result<(), ApiError> {
    delete_item::<Ticket>(&id).await
}
