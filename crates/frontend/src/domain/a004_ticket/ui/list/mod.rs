use contracts::domain::a004_ticket::{Ticket, TicketRow};
use contracts::domain::common::Lookups;
use contracts::enums::{Role, TicketStatus};
use contracts::shared::list::{Confirmation, FilterValue, ListState, SortSpec};
use contracts::shared::notification::ToastCategory;
use contracts::system::access::{visible_actions, Action};
use contracts::system::auth::UserInfo;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_ticket::api;
use crate::domain::a004_ticket::ui::actions::{TicketAssignDialog, TicketCard, TicketStatusDialog};
use crate::domain::a004_ticket::ui::badges::{OverdueBadge, PriorityBadge, StatusBadge};
use crate::domain::a004_ticket::ui::details::{TicketDetails, TicketDetailsViewModel};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterSelect};
use crate::shared::components::list_header::{ListHeader, LoadError};
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::{format_date_opt, format_datetime_opt, today};
use crate::shared::form_state::FormMode;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::{current_user, use_auth};
use crate::system::users::api as users_api;

const UNASSIGNED: &str = "Unassigned";

/// Диалог над одной строкой
#[derive(Clone)]
enum RowDialog {
    View(Ticket),
    Status(Ticket),
    Assign(Ticket),
}

fn user_label(user: &User) -> String {
    user.full_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(&user.username)
        .to_string()
}

/// Имена пользователей для строк; текущий пользователь известен всегда
fn user_lookups(users: &[User], me: Option<&UserInfo>) -> Lookups {
    let mut lookups = Lookups {
        users: users.iter().map(|u| (u.id.clone(), user_label(u))).collect(),
        ..Lookups::default()
    };
    if let Some(me) = me {
        lookups
            .users
            .entry(me.id.clone())
            .or_insert_with(|| me.display_name().to_string());
    }
    lookups
}

#[component]
pub fn TicketList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let list = ListController::<TicketRow>::new(
        "tickets",
        ToastCategory::Ticket,
        ListState::new(SortSpec::descending("created_at")),
    );
    let page = list.page();
    let today = today();

    // Справочник пользователей доступен только менеджерам
    let is_manager = auth_state.with_untracked(|s| {
        s.user_info.as_ref().is_some_and(|u| u.has_role(Role::Manager))
    });
    let people: RwSignal<Vec<User>> = RwSignal::new(Vec::new());

    let load = move || {
        let me = auth_state.with_untracked(|s| s.user_info.clone());
        list.load(move || async move {
            let tickets = api::fetch_tickets().await?;
            if is_manager {
                match users_api::fetch_users().await {
                    Ok(users) => {
                        let _ = people.try_set(users);
                    }
                    Err(e) => log::warn!("Assignee list unavailable: {}", e),
                }
            }
            let lookups = people
                .try_with_untracked(|users| user_lookups(users, me.as_ref()))
                .unwrap_or_default();
            Ok(TicketRow::project_all(&tickets, &lookups))
        })
    };
    load();

    let names = Memo::new(move |_| {
        let me = current_user(auth_state);
        people.with(|users| user_lookups(users, me.as_ref()))
    });
    let name_of = move |id: Option<&str>, fallback: &str| -> String {
        match id {
            Some(id) => names.with(|n| n.user(id).unwrap_or(id).to_string()),
            None => fallback.to_string(),
        }
    };

    let assignee_options = Signal::derive(move || {
        if is_manager {
            people.with(|users| {
                users
                    .iter()
                    .filter(|u| u.is_active)
                    .map(|u| (u.id.clone(), user_label(u)))
                    .collect::<Vec<_>>()
            })
        } else {
            current_user(auth_state)
                .map(|me| vec![(me.id.clone(), "Me".to_string())])
                .unwrap_or_default()
        }
    });

    let form_mode: RwSignal<Option<FormMode<Ticket>>> = RwSignal::new(None);
    let dialog: RwSignal<Option<RowDialog>> = RwSignal::new(None);
    let confirm: RwSignal<Confirmation<Ticket>> = RwSignal::new(Confirmation::default());
    let deleting = RwSignal::new(false);
    let updating = RwSignal::new(false);
    let filters_expanded = RwSignal::new(true);

    let loading = list.is_loading();
    let search = list.search();
    let sort = list.sort();
    let on_sort = Callback::new(move |field: String| {
        list.toggle_sort(&field);
    });
    let filter_callback = move |field: &'static str| {
        Callback::new(move |value: String| {
            list.set_filter(field, FilterValue::is(value));
        })
    };

    let on_status = Callback::new(move |status: TicketStatus| {
        let Some(RowDialog::Status(ticket)) = dialog.get_untracked() else {
            return;
        };
        list.mutate(
            updating,
            api::change_status(ticket.id.clone(), status),
            format!("\"{}\" is now {}", ticket.title, status.display_name()),
            move || {
                dialog.set(None);
                load();
            },
        );
    });

    let on_assign = Callback::new(move |assignee: Option<String>| {
        let Some(RowDialog::Assign(ticket)) = dialog.get_untracked() else {
            return;
        };
        let message = match assignee.as_deref() {
            Some(id) => format!("\"{}\" assigned to {}", ticket.title, name_of(Some(id), UNASSIGNED)),
            None => format!("\"{}\" unassigned", ticket.title),
        };
        list.mutate(updating, api::assign(ticket.id.clone(), assignee), message, move || {
            dialog.set(None);
            load();
        });
    });

    let on_confirm_delete = Callback::new(move |_| {
        let Some(target) = confirm.with_untracked(|c| c.pending().cloned()) else {
            return;
        };
        list.mutate(
            deleting,
            api::delete_ticket(target.id.clone()),
            format!("Ticket \"{}\" deleted", target.title),
            move || {
                confirm.update(|c| {
                    c.confirm();
                });
                load();
            },
        );
    });

    let row = move |record: TicketRow| {
        let actions = current_user(auth_state)
            .map(|user| visible_actions(&record, &user))
            .unwrap_or_default();
        let assignee = match (&record.assignee_name, &record.ticket.assigned_to) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => UNASSIGNED.to_string(),
        };
        let TicketRow { ticket, .. } = record;
        let title = ticket.title.clone();
        let overdue = ticket.is_overdue(today);
        let status = ticket.status;
        let priority = ticket.priority;
        let category = ticket.category.display_name();
        let department = ticket.department.display_name();
        let due = format_date_opt(ticket.due_date.as_ref());
        let created = format_datetime_opt(ticket.created_at.as_ref());
        let on_action = Callback::new(move |action: Action| match action {
            Action::View => dialog.set(Some(RowDialog::View(ticket.clone()))),
            Action::Edit => form_mode.set(Some(FormMode::Edit(ticket.clone()))),
            Action::ChangeStatus => dialog.set(Some(RowDialog::Status(ticket.clone()))),
            Action::Assign => dialog.set(Some(RowDialog::Assign(ticket.clone()))),
            Action::Delete => confirm.update(|c| c.request(ticket.clone())),
        });

        view! {
            <TableRow class=if overdue { "table__row--overdue" } else { "" }>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="table__primary">{move || highlight_matches(&title, &search.get())}</span>
                        {overdue.then(|| view! { <OverdueBadge /> })}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <PriorityBadge priority=priority />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{category}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{department}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{assignee}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{due}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{created}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <RowActions actions=actions on_action=on_action />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a004_ticket--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Tickets"
                count=Signal::derive(move || page.with(|p| p.total_count))
                loading=loading
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| form_mode.set(Some(FormMode::Create)))
            />

            <div class="page__content">
                <LoadError error=list.error() />

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filters()
                    on_clear=Callback::new(move |_| {
                        list.clear_filters();
                    })
                    pagination_controls=move || list.pagination(page)
                    filter_content=move || view! {
                        <Flex class="filter-row" gap=FlexGap::Medium align=FlexAlign::End>
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |value: String| {
                                    list.set_search(&value);
                                })
                                placeholder="Ticket title..."
                            />
                            <FilterSelect
                                label="Status"
                                value=list.filter_literal("status")
                                options=TicketDetailsViewModel::status_options()
                                on_change=filter_callback("status")
                            />
                            <FilterSelect
                                label="Priority"
                                value=list.filter_literal("priority")
                                options=TicketDetailsViewModel::priority_options()
                                on_change=filter_callback("priority")
                            />
                            <FilterSelect
                                label="Category"
                                value=list.filter_literal("category")
                                options=TicketDetailsViewModel::category_options()
                                on_change=filter_callback("category")
                            />
                            <FilterSelect
                                label="Department"
                                value=list.filter_literal("department")
                                options=TicketDetailsViewModel::department_options()
                                on_change=filter_callback("department")
                            />
                            <FilterSelect
                                label="Assigned to"
                                value=list.filter_literal("assigned_to")
                                options=assignee_options
                                on_change=filter_callback("assigned_to")
                                all_label="Anyone"
                            />
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Title" sort_field="title" sort=sort on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Priority" sort_field="priority" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Category" sort_field="category" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Department" sort_field="department" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Assigned to" sort_field="assignee" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Due" sort_field="due_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell min_width=150.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().items.into_iter().map(row).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.total_count == 0) && !loading.get()>
                        <div class="table__empty">"No tickets found"</div>
                    </Show>
                </div>
            </div>

            {move || form_mode.get().map(|mode| view! {
                <TicketDetails
                    mode=mode
                    assignee_options=assignee_options
                    on_saved=Callback::new(move |_| {
                        form_mode.set(None);
                        load();
                    })
                    on_close=Callback::new(move |_| form_mode.set(None))
                />
            })}

            {move || dialog.get().map(|open| {
                let on_close = Callback::new(move |_| dialog.set(None));
                match open {
                    RowDialog::View(ticket) => {
                        let assignee = name_of(ticket.assigned_to.as_deref(), UNASSIGNED);
                        let author = name_of(Some(ticket.created_by.as_str()), UNASSIGNED);
                        view! {
                            <TicketCard ticket=ticket assignee=assignee author=author today=today on_close=on_close />
                        }
                        .into_any()
                    }
                    RowDialog::Status(ticket) => view! {
                        <TicketStatusDialog ticket=ticket busy=updating on_submit=on_status on_cancel=on_close />
                    }
                    .into_any(),
                    RowDialog::Assign(ticket) => view! {
                        <TicketAssignDialog
                            ticket=ticket
                            options=assignee_options
                            busy=updating
                            on_submit=on_assign
                            on_cancel=on_close
                        />
                    }
                    .into_any(),
                }
            })}

            {move || confirm.with(|c| c.pending().map(|t| t.title.clone())).map(|title| view! {
                <ConfirmDialog
                    title="Delete ticket"
                    message=format!("Delete ticket \"{}\"? This cannot be undone.", title)
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |_| confirm.update(|c| c.cancel()))
                />
            })}
        </PageFrame>
    }
}
