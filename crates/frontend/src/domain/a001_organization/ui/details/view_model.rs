use contracts::domain::a001_organization::{Organization, OrganizationDto};
use contracts::shared::notification::ToastCategory;
use leptos::prelude::*;

use crate::domain::a001_organization::api;
use crate::shared::form_state::{FormMode, FormState};

/// ViewModel for Organization details form
#[derive(Clone)]
pub struct OrganizationDetailsViewModel {
    pub state: FormState<OrganizationDto>,
    pub editing_id: Option<String>,
}

impl OrganizationDetailsViewModel {
    pub fn new(mode: &FormMode<Organization>) -> Self {
        let (dto, editing_id) = match mode {
            FormMode::Create => (OrganizationDto::default(), None),
            FormMode::Edit(organization) => {
                (OrganizationDto::from(organization), Some(organization.id.clone()))
            }
        };
        Self {
            state: FormState::new(dto, ToastCategory::Customer),
            editing_id,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit organization"
        } else {
            "New organization"
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let editing_id = self.editing_id.clone();
        let message = if editing_id.is_some() {
            "Organization updated"
        } else {
            "Organization created"
        };
        self.state.submit(
            OrganizationDto::validate,
            move |dto| async move {
                match editing_id {
                    Some(id) => api::update_organization(id, dto).await,
                    None => api::create_organization(dto).await,
                }
            },
            message.to_string(),
            on_saved,
        );
    }
}
