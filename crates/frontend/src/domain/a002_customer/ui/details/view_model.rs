use contracts::domain::a001_organization::Organization;
use contracts::domain::a002_customer::{Customer, CustomerDto};
use contracts::shared::notification::ToastCategory;
use leptos::prelude::*;

use crate::domain::a002_customer::api;
use crate::shared::form_state::{FormMode, FormState};

#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub state: FormState<CustomerDto>,
    pub editing_id: Option<String>,
    /// Active organizations plus the current one of an edited customer
    pub organization_options: Signal<Vec<(String, String)>>,
}

impl CustomerDetailsViewModel {
    pub fn new(mode: &FormMode<Customer>, organizations: Signal<Vec<Organization>>) -> Self {
        let (dto, editing_id) = match mode {
            FormMode::Create => (CustomerDto::default(), None),
            FormMode::Edit(customer) => (CustomerDto::from(customer), Some(customer.id.clone())),
        };
        let current = dto.organization_id.clone();
        let organization_options = Signal::derive(move || {
            organizations.with(|items| {
                items
                    .iter()
                    .filter(|o| o.is_active || current.as_deref() == Some(o.id.as_str()))
                    .map(|o| (o.id.clone(), o.name.clone()))
                    .collect()
            })
        });
        Self {
            state: FormState::new(dto, ToastCategory::Customer),
            editing_id,
            organization_options,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit customer"
        } else {
            "New customer"
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let editing_id = self.editing_id.clone();
        let message = if editing_id.is_some() {
            "Customer updated"
        } else {
            "Customer created"
        };
        self.state.submit(
            CustomerDto::validate,
            move |dto| async move {
                match editing_id {
                    Some(id) => api::update_customer(id, dto).await,
                    None => api::create_customer(dto).await,
                }
            },
            message.to_string(),
            on_saved,
        );
    }
}
