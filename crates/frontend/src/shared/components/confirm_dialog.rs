use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// Подтверждение деструктивного действия. Отмена ничего не меняет,
/// вызов уходит только из `on_confirm`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    /// Запрос уже выполняется
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label.unwrap_or_else(|| "Delete".to_string()));

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
                on_click=move |_| on_confirm.run(())
                disabled=busy
            >
                {move || if busy.get() { "Working...".to_string() } else { confirm_label.get_value() }}
            </Button>
        }
    };

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <p class="confirm-dialog__message">{message}</p>
        </Modal>
    }
}
