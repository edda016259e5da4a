use contracts::enums::{TicketPriority, TicketStatus};
use leptos::prelude::*;

pub fn status_badge_class(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "badge badge--primary",
        TicketStatus::InProgress => "badge badge--warning",
        TicketStatus::Resolved => "badge badge--success",
        TicketStatus::Closed => "badge badge--neutral",
    }
}

pub fn priority_badge_class(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Low => "badge badge--neutral",
        TicketPriority::Medium => "badge badge--primary",
        TicketPriority::High => "badge badge--warning",
        TicketPriority::Critical => "badge badge--error",
    }
}

#[component]
pub fn StatusBadge(status: TicketStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status.display_name()}</span> }
}

#[component]
pub fn PriorityBadge(priority: TicketPriority) -> impl IntoView {
    view! { <span class=priority_badge_class(priority)>{priority.display_name()}</span> }
}

#[component]
pub fn OverdueBadge() -> impl IntoView {
    view! { <span class="badge badge--error" title="Past due date">"Overdue"</span> }
}
