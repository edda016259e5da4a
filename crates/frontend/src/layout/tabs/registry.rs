//! Tab content registry: tab.key → View

use crate::domain::a001_organization::ui::list::OrganizationList;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a004_ticket::ui::list::TicketList;
use crate::domain::a005_time_entry::ui::list::TimeEntryList;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a004_ticket" => view! { <TicketList /> }.into_any(),
        "a005_time_entry" => view! { <TimeEntryList /> }.into_any(),
        "a001_organization" => view! { <OrganizationList /> }.into_any(),
        "a002_customer" => view! { <CustomerList /> }.into_any(),
        "sys_users" => view! { <UserList /> }.into_any(),
        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Page not found"</div> }.into_any()
        }
    }
}
