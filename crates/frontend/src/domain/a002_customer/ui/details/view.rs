use contracts::domain::a001_organization::Organization;
use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::form_field::{CheckboxField, FormField, SelectInput};
use crate::shared::form_state::{optional_text, FormMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn CustomerDetails(
    mode: FormMode<Customer>,
    /// Справочник организаций, загруженный списком
    #[prop(into)]
    organizations: Signal<Vec<Organization>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(&mode, organizations);
    let state = vm.state;
    let saving = Signal::derive(move || state.saving.get());
    let title = vm.title();
    let organization_options = vm.organization_options;

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
                <FormField label="Name" required=true error=state.error("name")>
                    <input
                        type="text"
                        class="form__input"
                        maxlength="100"
                        prop:value=move || state.form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("name", |f| f.name = value);
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Organization" required=true error=state.error("organization_id")>
                    <SelectInput
                        value=Signal::derive(move || state.form.with(|f| f.organization_id.clone().unwrap_or_default()))
                        on_change=Callback::new(move |value: String| {
                            state.update("organization_id", |f| f.organization_id = optional_text(value));
                        })
                        options=organization_options
                        placeholder="Select organization"
                        disabled=saving
                    />
                </FormField>

                <FormField label="Email" error=state.error("email")>
                    <input
                        type="email"
                        class="form__input"
                        prop:value=move || state.form.with(|f| f.email.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("email", |f| f.email = optional_text(value));
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <FormField label="Phone" error=state.error("phone")>
                    <input
                        type="tel"
                        class="form__input"
                        maxlength="30"
                        prop:value=move || state.form.with(|f| f.phone.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("phone", |f| f.phone = optional_text(value));
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <CheckboxField
                    label="Active"
                    checked=Signal::derive(move || state.form.with(|f| f.is_active))
                    on_change=Callback::new(move |checked: bool| state.update("is_active", |f| f.is_active = checked))
                    disabled=saving
                />
            </div>
        </Modal>
    }
}
