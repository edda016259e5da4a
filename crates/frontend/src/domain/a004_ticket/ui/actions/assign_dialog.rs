use contracts::domain::a004_ticket::Ticket;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::form_field::{FormField, SelectInput};
use crate::shared::form_state::optional_text;
use crate::shared::modal::Modal;

/// Назначение исполнителя; пустой выбор снимает назначение
#[component]
pub fn TicketAssignDialog(
    ticket: Ticket,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<Option<String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(ticket.assigned_to.clone().unwrap_or_default());

    let footer = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_cancel.run(())
                disabled=busy
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_submit.run(optional_text(selected.get_untracked()))
                disabled=busy
            >
                {move || if busy.get() { "Saving..." } else { "Assign" }}
            </Button>
        }
    };

    view! {
        <Modal title=format!("Assign: {}", ticket.title) on_close=on_cancel footer=footer>
            <FormField label="Assignee">
                <SelectInput
                    value=selected
                    on_change=Callback::new(move |id: String| selected.set(id))
                    options=options
                    placeholder="Unassigned"
                    disabled=busy
                />
            </FormField>
        </Modal>
    }
}
