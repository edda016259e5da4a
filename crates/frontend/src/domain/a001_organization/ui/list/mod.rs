use contracts::domain::a001_organization::Organization;
use contracts::enums::Role;
use contracts::shared::list::{Confirmation, ListState, SortSpec};
use contracts::shared::notification::ToastCategory;
use contracts::system::access::{visible_actions, Action};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_organization::api;
use crate::domain::a001_organization::ui::details::OrganizationDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterSelect};
use crate::shared::components::list_header::{ListHeader, LoadError};
use crate::shared::components::row_actions::{ActiveBadge, RowActions};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::form_state::FormMode;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{flag_filter, highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::{current_user, use_auth};
use crate::system::auth::guard::RequireRole;

const ROW_ACTIONS: &[Action] = &[Action::Edit, Action::Delete];

fn status_options() -> Vec<(String, String)> {
    vec![
        ("true".to_string(), "Active".to_string()),
        ("false".to_string(), "Inactive".to_string()),
    ]
}

#[component]
pub fn OrganizationList() -> impl IntoView {
    view! {
        <RequireRole role=Role::Manager>
            <OrganizationTable />
        </RequireRole>
    }
}

#[component]
fn OrganizationTable() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let list = ListController::<Organization>::new(
        "organizations",
        ToastCategory::Customer,
        ListState::new(SortSpec::ascending("name")),
    );
    let page = list.page();
    let load = move || list.load(api::fetch_organizations);
    load();

    let form_mode: RwSignal<Option<FormMode<Organization>>> = RwSignal::new(None);
    let confirm: RwSignal<Confirmation<Organization>> = RwSignal::new(Confirmation::default());
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
            api::delete_organization(target.id.clone()),
            format!("Organization \"{}\" deleted", target.name),
            move || {
                confirm.update(|c| {
                    c.confirm();
                });
                load();
            },
        );
    });

    let row = move |organization: Organization| {
        let actions = current_user(auth_state)
            .map(|user| visible_actions(&organization, &user))
            .unwrap_or_default();
        let name = organization.name.clone();
        let description = organization.description.clone().unwrap_or_default();
        let created = format_datetime_opt(organization.created_at.as_ref());
        let is_active = organization.is_active;
        let on_action = Callback::new(move |action: Action| match action {
            Action::Edit => form_mode.set(Some(FormMode::Edit(organization.clone()))),
            Action::Delete => confirm.update(|c| c.request(organization.clone())),
            _ => {}
        });

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="table__primary">{move || highlight_matches(&name, &search.get())}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&description, &search.get())}
                    </TableCellLayout>
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
                    <RowActions actions=actions supported=ROW_ACTIONS on_action=on_action />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a001_organization--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Organizations"
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
                        <Flex gap=FlexGap::Medium align=FlexAlign::End>
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |value: String| {
                                    list.set_search(&value);
                                })
                                placeholder="Name or description..."
                            />
                            <FilterSelect
                                label="Status"
                                value=list.flag_literal("is_active")
                                options=status_options()
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
                                <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Description" sort_field="description" sort=sort on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="Status" sort_field="is_active" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().items.into_iter().map(row).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.total_count == 0) && !loading.get()>
                        <div class="table__empty">"No organizations found"</div>
                    </Show>
                </div>
            </div>

            {move || form_mode.get().map(|mode| view! {
                <OrganizationDetails
                    mode=mode
                    on_saved=Callback::new(move |_| {
                        form_mode.set(None);
                        load();
                    })
                    on_close=Callback::new(move |_| form_mode.set(None))
                />
            })}

            {move || confirm.with(|c| c.pending().map(|o| o.name.clone())).map(|name| view! {
                <ConfirmDialog
                    title="Delete organization"
                    message=format!("Delete organization \"{}\"? This cannot be undone.", name)
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |_| confirm.update(|c| c.cancel()))
                />
            })}
        </PageFrame>
    }
}
