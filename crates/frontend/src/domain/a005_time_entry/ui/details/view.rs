use chrono::NaiveDate;
use contracts::domain::a001_organization::Organization;
use contracts::domain::a003_process::Process;
use contracts::domain::a005_time_entry::{TimeEntry, MAX_HOURS_PER_ENTRY};
use contracts::shared::cascade::DependentSelect;
use leptos::prelude::*;
use thaw::*;

use super::view_model::TimeEntryDetailsViewModel;
use crate::shared::components::form_field::{FormField, SelectInput};
use crate::shared::date_utils::{from_input_value, to_input_value};
use crate::shared::form_state::{optional_text, FormMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Подсказка зависимого списка: ждём родителя / грузим / выбираем
fn dependent_placeholder<T>(select: &DependentSelect<T>, parent_label: &str) -> String {
    if select.parent().is_none() {
        format!("Select {} first", parent_label)
    } else if select.is_loading() {
        "Loading...".to_string()
    } else if select.options().is_empty() {
        "Nothing to choose".to_string()
    } else {
        "Select...".to_string()
    }
}

#[component]
pub fn TimeEntryDetails(
    mode: FormMode<TimeEntry>,
    #[prop(into)] organizations: Signal<Vec<Organization>>,
    #[prop(into)] processes: Signal<Vec<Process>>,
    /// Day preset for a new entry
    default_day: NaiveDate,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = TimeEntryDetailsViewModel::new(&mode, default_day);
    let state = vm.state;
    let customers = vm.customers;
    let activities = vm.activities;
    let saving = Signal::derive(move || state.saving.get());
    let title = vm.title();

    let organization_options = Signal::derive(move || {
        let current = state.form.with(|f| f.organization_id.clone());
        organizations.with(|items| {
            items
                .iter()
                .filter(|o| o.is_active || current.as_deref() == Some(o.id.as_str()))
                .map(|o| (o.id.clone(), o.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let process_options = Signal::derive(move || {
        processes.with(|items| {
            items
                .iter()
                .map(|p| (p.id.clone(), p.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let customer_options = Signal::derive(move || {
        customers.with(|c| {
            c.options()
                .iter()
                .map(|customer| (customer.id.clone(), customer.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let activity_options = Signal::derive(move || {
        activities.with(|a| {
            a.options()
                .iter()
                .map(|activity| (activity.id.clone(), activity.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    // Ошибка загрузки зависимого списка показывается вместо ошибки поля
    let customer_error = Signal::derive(move || {
        customers
            .with(|c| c.error().map(str::to_string))
            .or_else(|| state.error("customer_id").get())
    });
    let activity_error = Signal::derive(move || {
        activities
            .with(|a| a.error().map(str::to_string))
            .or_else(|| state.error("activity_id").get())
    });

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

    let vm_organization = vm.clone();
    let vm_customer = vm.clone();
    let vm_process = vm.clone();
    let vm_activity = vm;

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="details-form">
                <div class="form__row">
                    <FormField label="Date" required=true error=state.error("date")>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || state.form.with(|f| to_input_value(f.date))
                            on:change=move |ev| {
                                let value = from_input_value(&event_target_value(&ev));
                                state.update("date", |f| f.date = value);
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>

                    <FormField label="Hours" required=true error=state.error("hours")>
                        <input
                            type="number"
                            class="form__input"
                            min="0.25"
                            max=MAX_HOURS_PER_ENTRY.to_string()
                            step="0.25"
                            prop:value=move || state.form.with(|f| f.hours.to_string())
                            on:input=move |ev| {
                                let hours = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                                state.update("hours", |f| f.hours = hours);
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <FormField label="Organization" required=true error=state.error("organization_id")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.organization_id.clone().unwrap_or_default()))
                            on_change=Callback::new(move |id: String| vm_organization.select_organization(id))
                            options=organization_options
                            placeholder="Select organization"
                            disabled=saving
                        />
                    </FormField>

                    <FormField label="Customer" required=true error=customer_error>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.customer_id.clone().unwrap_or_default()))
                            on_change=Callback::new(move |id: String| vm_customer.select_customer(id))
                            options=customer_options
                            placeholder=Signal::derive(move || Some(customers.with(|c| dependent_placeholder(c, "organization"))))
                            disabled=Signal::derive(move || saving.get() || !customers.with(|c| c.is_enabled()))
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <FormField label="Process" required=true error=state.error("process_id")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.process_id.clone().unwrap_or_default()))
                            on_change=Callback::new(move |id: String| vm_process.select_process(id))
                            options=process_options
                            placeholder="Select process"
                            disabled=saving
                        />
                    </FormField>

                    <FormField label="Activity" required=true error=activity_error>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.activity_id.clone().unwrap_or_default()))
                            on_change=Callback::new(move |id: String| vm_activity.select_activity(id))
                            options=activity_options
                            placeholder=Signal::derive(move || Some(activities.with(|a| dependent_placeholder(a, "process"))))
                            disabled=Signal::derive(move || saving.get() || !activities.with(|a| a.is_enabled()))
                        />
                    </FormField>
                </div>

                <FormField label="Notes" error=state.error("notes")>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || state.form.with(|f| f.notes.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("notes", |f| f.notes = optional_text(value));
                        }
                        disabled=move || saving.get()
                    />
                </FormField>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_customer::Customer;

    #[test]
    fn test_dependent_placeholder_follows_parent() {
        let mut select: DependentSelect<Customer> = DependentSelect::new();
        assert_eq!(dependent_placeholder(&select, "organization"), "Select organization first");

        select.select_parent("org-1");
        assert_eq!(dependent_placeholder(&select, "organization"), "Loading...");
    }
}
