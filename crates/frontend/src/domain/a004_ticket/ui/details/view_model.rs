use contracts::domain::a004_ticket::{Ticket, TicketDto};
use contracts::enums::{Department, Role, TicketCategory, TicketPriority, TicketStatus};
use contracts::shared::notification::ToastCategory;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use crate::domain::a004_ticket::api;
use crate::shared::components::form_field::options_of;
use crate::shared::form_state::{FormMode, FormState};

#[derive(Clone)]
pub struct TicketDetailsViewModel {
    pub state: FormState<TicketDto>,
    pub editing_id: Option<String>,
    /// Исполнителя в форме выбирают только менеджеры и администраторы
    pub can_assign: bool,
}

impl TicketDetailsViewModel {
    pub fn new(mode: &FormMode<Ticket>, user: Option<&UserInfo>) -> Self {
        let (dto, editing_id) = match mode {
            FormMode::Create => (TicketDto::for_department(user.and_then(|u| u.department)), None),
            FormMode::Edit(ticket) => (TicketDto::from(ticket), Some(ticket.id.clone())),
        };
        Self {
            state: FormState::new(dto, ToastCategory::Ticket),
            editing_id,
            can_assign: user.is_some_and(|u| u.has_role(Role::Manager)),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit ticket"
        } else {
            "New ticket"
        }
    }

    pub fn status_options() -> Vec<(String, String)> {
        options_of(TicketStatus::all(), TicketStatus::code, TicketStatus::display_name)
    }

    pub fn priority_options() -> Vec<(String, String)> {
        options_of(TicketPriority::all(), TicketPriority::code, TicketPriority::display_name)
    }

    pub fn category_options() -> Vec<(String, String)> {
        options_of(TicketCategory::all(), TicketCategory::code, TicketCategory::display_name)
    }

    pub fn department_options() -> Vec<(String, String)> {
        options_of(Department::all(), Department::code, Department::display_name)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let editing_id = self.editing_id.clone();
        let message = if editing_id.is_some() {
            "Ticket updated"
        } else {
            "Ticket created"
        };
        self.state.submit(
            TicketDto::validate,
            move |dto| async move {
                match editing_id {
                    Some(id) => api::update_ticket(id, dto).await,
                    None => api::create_ticket(dto).await,
                }
            },
            message.to_string(),
            on_saved,
        );
    }
}
