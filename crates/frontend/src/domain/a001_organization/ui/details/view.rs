use contracts::domain::a001_organization::Organization;
use leptos::prelude::*;
use thaw::*;

use super::view_model::OrganizationDetailsViewModel;
use crate::shared::components::form_field::{CheckboxField, FormField};
use crate::shared::form_state::{optional_text, FormMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn OrganizationDetails(
    mode: FormMode<Organization>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = OrganizationDetailsViewModel::new(&mode);
    let state = vm.state;
    let saving = Signal::derive(move || state.saving.get());
    let title = vm.title();

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

                <FormField label="Description" error=state.error("description")>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || state.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("description", |f| {
                                f.description = optional_text(value);
                            });
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
