use chrono::NaiveDate;
use contracts::domain::a004_ticket::Ticket;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_ticket::api;
use crate::domain::a004_ticket::ui::badges::{OverdueBadge, PriorityBadge, StatusBadge};
use crate::shared::date_utils::{format_date_opt, format_datetime_opt};
use crate::shared::modal::Modal;

/// Карточка тикета только для чтения.
///
/// Opens with the row as listed, then swaps in the server copy.
#[component]
pub fn TicketCard(
    ticket: Ticket,
    /// Имя исполнителя, уже разрешённое списком
    #[prop(into)]
    assignee: String,
    #[prop(into)] author: String,
    today: NaiveDate,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = ticket.title.clone();
    let id = ticket.id.clone();
    let current = RwSignal::new(ticket);

    spawn_local(async move {
        match api::fetch_ticket(id).await {
            Ok(fresh) => {
                let _ = current.try_set(fresh);
            }
            // Карточка остаётся со строкой из списка
            Err(err) => log::warn!("Ticket refresh failed: {}", err),
        }
    });

    let field = move |read: fn(&Ticket) -> String| move || current.with(read);

    view! {
        <Modal title=title on_close=on_close>
            <div class="ticket-card">
                <div class="ticket-card__badges">
                    {move || current.with(|t| view! {
                        <StatusBadge status=t.status />
                        <PriorityBadge priority=t.priority />
                        {t.is_overdue(today).then(|| view! { <OverdueBadge /> })}
                    })}
                </div>
                <p class="ticket-card__description">{field(|t| t.description.clone())}</p>
                <dl class="ticket-card__fields">
                    <dt>"Category"</dt>
                    <dd>{field(|t| t.category.display_name().to_string())}</dd>
                    <dt>"Department"</dt>
                    <dd>{field(|t| t.department.display_name().to_string())}</dd>
                    <dt>"Created by"</dt>
                    <dd>{author}</dd>
                    <dt>"Assigned to"</dt>
                    <dd>{assignee}</dd>
                    <dt>"Due date"</dt>
                    <dd>{field(|t| format_date_opt(t.due_date.as_ref()))}</dd>
                    <dt>"Created"</dt>
                    <dd>{field(|t| format_datetime_opt(t.created_at.as_ref()))}</dd>
                    <dt>"Last activity"</dt>
                    <dd>{field(|t| format_datetime_opt(t.last_activity.as_ref()))}</dd>
                </dl>
            </div>
        </Modal>
    }
}
