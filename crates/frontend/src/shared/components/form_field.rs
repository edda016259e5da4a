use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

/// Inline error for one field of a form's error map
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

/// Подпись, поле ввода и ошибка под ним
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || if error.with(Option::is_some) { "form__group form__group--invalid" } else { "form__group" }>
            <Label required=required>{label}</Label>
            {children()}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// `(code, display name)` pairs of a closed enum for a select box
pub fn options_of<T>(
    values: impl IntoIterator<Item = T>,
    code: impl Fn(&T) -> &'static str,
    name: impl Fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|value| (code(&value).to_string(), name(&value).to_string()))
        .collect()
}

/// Plain `<select>` over `(value, label)` pairs. Empty value = nothing chosen.
#[component]
pub fn SelectInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {move || placeholder.get().map(|text| view! { <option value="">{text}</option> })}
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(id, label)| {
                        let selected = id == current;
                        view! { <option value=id selected=selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::TicketPriority;

    #[test]
    fn test_options_of_keeps_enum_order() {
        let options = options_of(TicketPriority::all(), TicketPriority::code, TicketPriority::display_name);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], ("low".to_string(), "Low".to_string()));
        assert_eq!(options[3].0, "critical");
    }
}
