use contracts::system::access::Action;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

fn action_icon(action: Action) -> &'static str {
    match action {
        Action::View => "eye",
        Action::Edit => "edit",
        Action::Delete => "delete",
        Action::Assign => "user-check",
        Action::ChangeStatus => "refresh",
    }
}

/// Кнопки действий строки. Показываются только разрешённые `can_perform`
/// действия, которые страница поддерживает.
#[component]
pub fn RowActions(
    actions: Vec<Action>,
    /// Действия, для которых у страницы есть обработчик
    #[prop(optional)]
    supported: Option<&'static [Action]>,
    on_action: Callback<Action>,
) -> impl IntoView {
    let buttons = actions
        .into_iter()
        .filter(|action| supported.map_or(true, |s| s.contains(action)))
        .map(|action| {
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_action.run(action)
                    attr:title=action.label()
                >
                    {icon(action_icon(action))}
                </Button>
            }
        })
        .collect_view();

    view! { <div class="row-actions">{buttons}</div> }
}

/// Бейдж Active / Inactive
#[component]
pub fn ActiveBadge(is_active: bool) -> impl IntoView {
    if is_active {
        view! { <span class="badge badge--success">"Active"</span> }.into_any()
    } else {
        view! { <span class="badge badge--neutral">"Inactive"</span> }.into_any()
    }
}
