use contracts::enums::{Department, Role};
use contracts::shared::list::{Confirmation, FilterValue, ListState, SortSpec};
use contracts::shared::notification::ToastCategory;
use contracts::system::access::{visible_actions, Action};
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterSelect};
use crate::shared::components::form_field::options_of;
use crate::shared::components::list_header::{ListHeader, LoadError};
use crate::shared::components::row_actions::{ActiveBadge, RowActions};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::form_state::FormMode;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{flag_filter, highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::{current_user, use_auth};
use crate::system::auth::guard::RequireRole;
use crate::system::users::api;
use crate::system::users::ui::details::UserDetails;

const ROW_ACTIONS: &[Action] = &[Action::Edit, Action::Delete];

fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge--error",
        Role::Manager => "badge badge--warning",
        Role::User => "badge badge--neutral",
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    view! {
        <RequireRole role=Role::Manager>
            <UserTable />
        </RequireRole>
    }
}

#[component]
fn UserTable() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let list = ListController::<User>::new(
        "users",
        ToastCategory::User,
        ListState::new(SortSpec::ascending("username")),
    );
    let page = list.page();
    let load = move || list.load(api::fetch_users);
    load();

    let form_mode: RwSignal<Option<FormMode<User>>> = RwSignal::new(None);
    let confirm: RwSignal<Confirmation<User>> = RwSignal::new(Confirmation::default());
    let deleting = RwSignal::new(false);
    let filters_expanded = RwSignal::new(true);

    let loading = list.is_loading();
    let search = list.search();
    let sort = list.sort();
    let on_sort = Callback::new(move |field: String| {
        list.toggle_sort(&field);
    });

    let on_confirm_delete = Callback::new(move |_| {
        let Some(target) = confirm.with_untracked(|c| c.pending().cloned()) else {
            return;
        };
        list.mutate(
            deleting,
            api::delete_user(target.id.clone()),
            format!("User \"{}\" deleted", target.username),
            move || {
                confirm.update(|c| {
                    c.confirm();
                });
                load();
            },
        );
    });

    let row = move |user: User| {
        let actions = current_user(auth_state)
            .map(|actor| visible_actions(&user, &actor))
            .unwrap_or_default();
        let username = user.username.clone();
        let full_name = user.full_name.clone().unwrap_or_default();
        let email = user.email.clone().unwrap_or_default();
        let role = user.role;
        let department = user.department.display_name();
        let is_active = user.is_active;
        let created = format_datetime_opt(user.created_at.as_ref());
        let last_login = format_datetime_opt(user.last_login_at.as_ref());
        let on_action = Callback::new(move |action: Action| match action {
            Action::Edit => form_mode.set(Some(FormMode::Edit(user.clone()))),
            Action::Delete => confirm.update(|c| c.request(user.clone())),
            _ => {}
        });

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="table__primary">{move || highlight_matches(&username, &search.get())}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&full_name, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&email, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <span class=role_badge_class(role)>{role.display_name()}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{department}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <ActiveBadge is_active=is_active />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{created}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{last_login}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <RowActions actions=actions supported=ROW_ACTIONS on_action=on_action />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <ListHeader
                title="Users"
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
                        <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-row">
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |value: String| {
                                    list.set_search(&value);
                                })
                                placeholder="Username, name or email..."
                            />
                            <FilterSelect
                                label="Role"
                                value=list.filter_literal("role")
                                options=options_of(Role::all(), Role::code, Role::display_name)
                                on_change=Callback::new(move |value: String| {
                                    list.set_filter("role", FilterValue::is(value));
                                })
                            />
                            <FilterSelect
                                label="Department"
                                value=list.filter_literal("department")
                                options=options_of(Department::all(), Department::code, Department::display_name)
                                on_change=Callback::new(move |value: String| {
                                    list.set_filter("department", FilterValue::is(value));
                                })
                            />
                            <FilterSelect
                                label="Status"
                                value=list.flag_literal("is_active")
                                options=vec![
                                    ("true".to_string(), "Active".to_string()),
                                    ("false".to_string(), "Inactive".to_string()),
                                ]
                                on_change=Callback::new(move |value: String| {
                                    list.set_filter("is_active", flag_filter(&value));
                                })
                            />
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Username" sort_field="username" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Full name" sort_field="full_name" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Email" sort_field="email" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Role" sort_field="role" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Department" sort_field="department" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_field="is_active" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort min_width=130.0 />
                                <SortableHeaderCell label="Last login" sort_field="last_login_at" sort=sort on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().items.into_iter().map(row).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.total_count == 0) && !loading.get()>
                        <div class="table__empty">"No users found"</div>
                    </Show>
                </div>
            </div>

            {move || form_mode.get().map(|mode| view! {
                <UserDetails
                    mode=mode
                    on_saved=Callback::new(move |_| {
                        form_mode.set(None);
                        load();
                    })
                    on_close=Callback::new(move |_| form_mode.set(None))
                />
            })}

            {move || confirm.with(|c| c.pending().map(|u| u.username.clone())).map(|username| view! {
                <ConfirmDialog
                    title="Delete user"
                    message=format!("Delete user \"{}\"? This cannot be undone.", username)
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |_| confirm.update(|c| c.cancel()))
                />
            })}
        </PageFrame>
    }
}
