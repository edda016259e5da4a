use contracts::domain::a004_ticket::Ticket;
use contracts::enums::TicketStatus;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_ticket::ui::details::TicketDetailsViewModel;
use crate::shared::components::form_field::{FormField, SelectInput};
use crate::shared::modal::Modal;

#[component]
pub fn TicketStatusDialog(
    ticket: Ticket,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<TicketStatus>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(ticket.status);
    let unchanged = ticket.status;

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
                on_click=move |_| on_submit.run(selected.get_untracked())
                disabled=Signal::derive(move || busy.get() || selected.get() == unchanged)
            >
                {move || if busy.get() { "Saving..." } else { "Change status" }}
            </Button>
        }
    };

    view! {
        <Modal title=format!("Status: {}", ticket.title) on_close=on_cancel footer=footer>
            <FormField label="New status">
                <SelectInput
                    value=Signal::derive(move || selected.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(status) = TicketStatus::from_code(&code) {
                            selected.set(status);
                        }
                    })
                    options=TicketDetailsViewModel::status_options()
                    disabled=busy
                />
            </FormField>
        </Modal>
    }
}
