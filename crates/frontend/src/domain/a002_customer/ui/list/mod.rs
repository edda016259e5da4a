use contracts::domain::a001_organization::Organization;
use contracts::domain::a002_customer::{Customer, CustomerRow};
use contracts::domain::common::Lookups;
use contracts::enums::Role;
use contracts::shared::api::ApiError;
use contracts::shared::list::{Confirmation, FilterValue, ListState, SortSpec};
use contracts::shared::notification::ToastCategory;
use contracts::system::access::{visible_actions, Action};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_organization::api as organization_api;
use crate::domain::a002_customer::api;
use crate::domain::a002_customer::ui::details::CustomerDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterSelect};
use crate::shared::components::list_header::{ListHeader, LoadError};
use crate::shared::components::row_actions::{ActiveBadge, RowActions};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::form_state::FormMode;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{flag_filter, highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::{current_user, use_auth};
use crate::system::auth::guard::RequireRole;

const ROW_ACTIONS: &[Action] = &[Action::Edit, Action::Delete];

/// Клиенты + организации одним проходом; строки получают имя организации
async fn fetch_rows(organizations: RwSignal<Vec<Organization>>) -> Result<Vec<CustomerRow>, ApiError> {
    let customers = api::fetch_customers().await?;
    let loaded = organization_api::fetch_organizations().await?;
    let lookups = Lookups {
        organizations: Lookups::index(&loaded, |o| o.id.as_str(), |o| o.name.as_str()),
        ..Lookups::default()
    };
    let _ = organizations.try_set(loaded);
    Ok(CustomerRow::project_all(&customers, &lookups))
}

#[component]
pub fn CustomerList() -> impl IntoView {
    view! {
        <RequireRole role=Role::Manager>
            <CustomerTable />
        </RequireRole>
    }
}

#[component]
fn CustomerTable() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let list = ListController::<CustomerRow>::new(
        "customers",
        ToastCategory::Customer,
        ListState::new(SortSpec::ascending("name")),
    );
    let organizations: RwSignal<Vec<Organization>> = RwSignal::new(Vec::new());
    let page = list.page();
    let load = move || list.load(move || fetch_rows(organizations));
    load();

    let form_mode: RwSignal<Option<FormMode<Customer>>> = RwSignal::new(None);
    let confirm: RwSignal<Confirmation<Customer>> = RwSignal::new(Confirmation::default());
    let deleting = RwSignal::new(false);
    let filters_expanded = RwSignal::new(true);

    let loading = list.is_loading();
    let search = list.search();
    let sort = list.sort();
    let on_sort = Callback::new(move |field: String| {
        list.toggle_sort(&field);
    });

    let organization_options = Signal::derive(move || {
        organizations.with(|items| {
            items
                .iter()
                .map(|o| (o.id.clone(), o.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_confirm_delete = Callback::new(move |_| {
        let Some(target) = confirm.with_untracked(|c| c.pending().cloned()) else {
            return;
        };
        list.mutate(
            deleting,
            api::delete_customer(target.id.clone()),
            format!("Customer \"{}\" deleted", target.name),
            move || {
                confirm.update(|c| {
                    c.confirm();
                });
                load();
            },
        );
    });

    let row = move |record: CustomerRow| {
        let actions = current_user(auth_state)
            .map(|user| visible_actions(&record, &user))
            .unwrap_or_default();
        let organization = record.organization_display().to_string();
        let CustomerRow { customer, .. } = record;
        let name = customer.name.clone();
        let email = customer.email.clone().unwrap_or_default();
        let phone = customer.phone.clone().unwrap_or_default();
        let is_active = customer.is_active;
        let on_action = Callback::new(move |action: Action| match action {
            Action::Edit => form_mode.set(Some(FormMode::Edit(customer.clone()))),
            Action::Delete => confirm.update(|c| c.request(customer.clone())),
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
                        {move || highlight_matches(&organization, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&email, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        {move || highlight_matches(&phone, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <ActiveBadge is_active=is_active />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <RowActions actions=actions supported=ROW_ACTIONS on_action=on_action />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a002_customer--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Customers"
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
                                placeholder="Name, email, phone or organization..."
                            />
                            <FilterSelect
                                label="Organization"
                                value=list.filter_literal("organization_id")
                                options=organization_options
                                on_change=Callback::new(move |value: String| {
                                    list.set_filter("organization_id", FilterValue::is(value));
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
                                <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Organization" sort_field="organization" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Email" sort_field="email" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Phone" sort_field="phone" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_field="is_active" sort=sort on_sort=on_sort min_width=90.0 />
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().items.into_iter().map(row).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.total_count == 0) && !loading.get()>
                        <div class="table__empty">"No customers found"</div>
                    </Show>
                </div>
            </div>

            {move || form_mode.get().map(|mode| view! {
                <CustomerDetails
                    mode=mode
                    organizations=organizations
                    on_saved=Callback::new(move |_| {
                        form_mode.set(None);
                        load();
                    })
                    on_close=Callback::new(move |_| form_mode.set(None))
                />
            })}

            {move || confirm.with(|c| c.pending().map(|c| c.name.clone())).map(|name| view! {
                <ConfirmDialog
                    title="Delete customer"
                    message=format!("Delete customer \"{}\"? This cannot be undone.", name)
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |_| confirm.update(|c| c.cancel()))
                />
            })}
        </PageFrame>
    }
}
