use contracts::domain::a004_ticket::Ticket;
use contracts::enums::{Department, TicketCategory, TicketPriority, TicketStatus};
use leptos::prelude::*;
use thaw::*;

use super::view_model::TicketDetailsViewModel;
use crate::shared::components::form_field::{FormField, SelectInput};
use crate::shared::date_utils::{from_input_value, to_input_value};
use crate::shared::form_state::{optional_text, FormMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;

#[component]
pub fn TicketDetails(
    mode: FormMode<Ticket>,
    /// Исполнители: (id, имя)
    #[prop(into)]
    assignee_options: Signal<Vec<(String, String)>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let user = auth_state.with_untracked(|s| s.user_info.clone());
    let vm = TicketDetailsViewModel::new(&mode, user.as_ref());
    let state = vm.state;
    let saving = Signal::derive(move || state.saving.get());
    let title = vm.title();
    let can_assign = vm.can_assign;

    let vm_save = vm.clone();
    let footer = move || {
        let vm = vm_save.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_close.run(())
                disabled=saving
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.save_command(on_saved)
                disabled=saving
            >
                {icon("save")}
                {move || if saving.get() { " Saving..." } else { " Save" }}
            </Button>
        }
    };

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="details-form">
                <FormField label="Title" required=true error=state.error("title")>
                    <input
                        type="text"
                        class="form__input"
                        maxlength="200"
                        prop:value=move || state.form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("title", |f| f.title = value);
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Description" required=true error=state.error("description")>
                    <textarea
                        class="form__textarea"
                        rows="5"
                        prop:value=move || state.form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("description", |f| f.description = value);
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <div class="form__row">
                    <FormField label="Status" error=state.error("status")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.status.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                if let Some(status) = TicketStatus::from_code(&code) {
                                    state.update("status", |f| f.status = status);
                                }
                            })
                            options=TicketDetailsViewModel::status_options()
                            disabled=saving
                        />
                    </FormField>

                    <FormField label="Priority" error=state.error("priority")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.priority.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                if let Some(priority) = TicketPriority::from_code(&code) {
                                    state.update("priority", |f| f.priority = priority);
                                }
                            })
                            options=TicketDetailsViewModel::priority_options()
                            disabled=saving
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <FormField label="Category" error=state.error("category")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.category.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                if let Some(category) = TicketCategory::from_code(&code) {
                                    state.update("category", |f| f.category = category);
                                }
                            })
                            options=TicketDetailsViewModel::category_options()
                            disabled=saving
                        />
                    </FormField>

                    <FormField label="Department" required=true error=state.error("department")>
                        <SelectInput
                            value=Signal::derive(move || {
                                state.form.with(|f| f.department.map(|d| d.code().to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                state.update("department", |f| f.department = Department::from_code(&code));
                            })
                            options=TicketDetailsViewModel::department_options()
                            placeholder="Select department"
                            disabled=saving
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <Show when=move || can_assign>
                        <FormField label="Assigned to" error=state.error("assigned_to")>
                            <SelectInput
                                value=Signal::derive(move || state.form.with(|f| f.assigned_to.clone().unwrap_or_default()))
                                on_change=Callback::new(move |id: String| {
                                    state.update("assigned_to", |f| f.assigned_to = optional_text(id));
                                })
                                options=assignee_options
                                placeholder="Unassigned"
                                disabled=saving
                            />
                        </FormField>
                    </Show>

                    <FormField label="Due date" error=state.error("due_date")>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || state.form.with(|f| to_input_value(f.due_date))
                            on:change=move |ev| {
                                let value = from_input_value(&event_target_value(&ev));
                                state.update("due_date", |f| f.due_date = value);
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>
                </div>
            </div>
        </Modal>
    }
}
