use chrono::NaiveDate;
use contracts::domain::a005_time_entry::{
    format_hours, TimeEntry, TimeEntryQuery, TimeEntryRow, TimesheetSummary,
};
use contracts::shared::api::ApiError;
use contracts::shared::list::{
    filter_records, Confirmation, FilterValue, ListCommand, ListState, SortSpec,
};
use contracts::shared::notification::ToastCategory;
use contracts::system::access::{visible_actions, Action};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_time_entry::api::{self, TimesheetCatalog};
use crate::domain::a005_time_entry::ui::details::TimeEntryDetails;
use crate::domain::a005_time_entry::ui::summary::TimesheetSummaryPanel;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::{FilterPanel, FilterSelect};
use crate::shared::components::list_header::{ListHeader, LoadError};
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::{format_date, month_of, today};
use crate::shared::form_state::FormMode;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::{current_user, use_auth};

const ROW_ACTIONS: &[Action] = &[Action::Edit, Action::Delete];

/// Период табеля уходит на сервер, остальные фильтры локальные
const DATE_FIELD: &str = "date";

fn date_range(state: &ListState) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match state.filters.get(DATE_FIELD) {
        Some(FilterValue::Between { from, to }) => (*from, *to),
        Some(FilterValue::OnDay(day)) => (Some(*day), Some(*day)),
        _ => (None, None),
    }
}

fn query_of(state: &ListState) -> TimeEntryQuery {
    let (from, to) = date_range(state);
    TimeEntryQuery { from, to }
}

fn initial_state(today: NaiveDate) -> ListState {
    let state = ListState::new(SortSpec::descending("date")).with_server_fields(&[DATE_FIELD]);
    match month_of(today) {
        Some((from, to)) => state.with_filter(
            DATE_FIELD,
            FilterValue::Between {
                from: Some(from),
                to: Some(to),
            },
        ),
        None => state,
    }
}

/// Справочники грузятся при первом открытии и по кнопке обновления;
/// сами записи запрашиваются за выбранный период.
async fn fetch_rows(
    catalog: RwSignal<TimesheetCatalog>,
    query: TimeEntryQuery,
    refresh_catalog: bool,
) -> Result<Vec<TimeEntryRow>, ApiError> {
    let cached = catalog
        .try_with_untracked(|c| (!refresh_catalog && !c.is_empty()).then(|| c.lookups.clone()))
        .flatten();
    let lookups = match cached {
        Some(lookups) => lookups,
        None => {
            let loaded = api::fetch_catalog().await?;
            let lookups = loaded.lookups.clone();
            let _ = catalog.try_set(loaded);
            lookups
        }
    };
    let entries = api::fetch_time_entries(query).await?;
    Ok(TimeEntryRow::project_all(&entries, &lookups))
}

#[component]
pub fn TimeEntryList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let day = today();
    let list = ListController::<TimeEntryRow>::new("time entries", ToastCategory::System, initial_state(day));
    let catalog: RwSignal<TimesheetCatalog> = RwSignal::new(TimesheetCatalog::default());
    let page = list.page();
    let load = move |refresh_catalog: bool| {
        let query = list.state.with_untracked(query_of);
        list.load(move || fetch_rows(catalog, query, refresh_catalog));
    };
    load(false);

    let form_mode: RwSignal<Option<FormMode<TimeEntry>>> = RwSignal::new(None);
    let confirm: RwSignal<Confirmation<TimeEntryRow>> = RwSignal::new(Confirmation::default());
    let deleting = RwSignal::new(false);
    let filters_expanded = RwSignal::new(true);

    let loading = list.is_loading();
    let search = list.search();
    let sort = list.sort();
    let on_sort = Callback::new(move |field: String| {
        list.toggle_sort(&field);
    });

    // Итоги считаются по всем отфильтрованным записям, не только по странице
    let summary = Memo::new(move |_| {
        list.state.with(|s| {
            list.records
                .with(|records| TimesheetSummary::from_rows(&filter_records(records, &s.filters)))
        })
    });

    let date_from = Signal::derive(move || list.state.with(|s| date_range(s).0));
    let date_to = Signal::derive(move || list.state.with(|s| date_range(s).1));
    let on_range = Callback::new(move |(from, to): (Option<NaiveDate>, Option<NaiveDate>)| {
        if list.set_filter(DATE_FIELD, FilterValue::Between { from, to }) == ListCommand::Refetch {
            load(false);
        }
    });
    let on_clear = Callback::new(move |_| {
        if list.clear_filters() == ListCommand::Refetch {
            load(false);
        }
    });

    let organization_options = Signal::derive(move || {
        catalog.with(|c| {
            c.organizations
                .iter()
                .map(|o| (o.id.clone(), o.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let process_options = Signal::derive(move || {
        catalog.with(|c| {
            c.processes
                .iter()
                .map(|p| (p.id.clone(), p.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_confirm_delete = Callback::new(move |_| {
        let Some(target) = confirm.with_untracked(|c| c.pending().cloned()) else {
            return;
        };
        list.mutate(
            deleting,
            api::delete_time_entry(target.entry.id.clone()),
            format!("Time entry of {} deleted", format_date(&target.entry.date)),
            move || {
                confirm.update(|c| {
                    c.confirm();
                });
                load(false);
            },
        );
    });

    let row = move |record: TimeEntryRow| {
        let actions = current_user(auth_state)
            .map(|user| visible_actions(&record, &user))
            .unwrap_or_default();
        let date = format_date(&record.entry.date);
        let hours = format_hours(record.entry.hours);
        let organization = record.organization_display().to_string();
        let customer = record.customer_display().to_string();
        let process = record.process_display().to_string();
        let activity = record.activity_display().to_string();
        let notes = record.entry.notes.clone().unwrap_or_default();
        let on_action = Callback::new(move |action: Action| match action {
            Action::Edit => form_mode.set(Some(FormMode::Edit(record.entry.clone()))),
            Action::Delete => confirm.update(|c| c.request(record.clone())),
            _ => {}
        });

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>{date}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <span class="table__number">{hours}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&organization, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&customer, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&process, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&activity, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&notes, &search.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <RowActions actions=actions supported=ROW_ACTIONS on_action=on_action />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a005_time_entry--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Timesheets"
                count=Signal::derive(move || page.with(|p| p.total_count))
                loading=loading
                on_refresh=Callback::new(move |_| load(true))
                on_create=Callback::new(move |_| form_mode.set(Some(FormMode::Create)))
            />

            <div class="page__content">
                <LoadError error=list.error() />

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filters()
                    on_clear=on_clear
                    pagination_controls=move || list.pagination(page)
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-row">
                            <DateRangePicker
                                label="Period".to_string()
                                date_from=date_from
                                date_to=date_to
                                on_change=on_range
                            />
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |value: String| {
                                    list.set_search(&value);
                                })
                                placeholder="Process, activity, customer, notes..."
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
                                label="Process"
                                value=list.filter_literal("process_id")
                                options=process_options
                                on_change=Callback::new(move |value: String| {
                                    list.set_filter("process_id", FilterValue::is(value));
                                })
                            />
                        </Flex>
                    }
                />

                <TimesheetSummaryPanel summary=summary />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Date" sort_field="date" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Hours" sort_field="hours" sort=sort on_sort=on_sort min_width=70.0 />
                                <SortableHeaderCell label="Organization" sort_field="organization" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Process" sort_field="process" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Activity" sort_field="activity" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Notes" sort_field="notes" sort=sort on_sort=on_sort min_width=200.0 />
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().items.into_iter().map(row).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.total_count == 0) && !loading.get()>
                        <div class="table__empty">"No time entries for this period"</div>
                    </Show>
                </div>
            </div>

            {move || form_mode.get().map(|mode| view! {
                <TimeEntryDetails
                    mode=mode
                    organizations=Signal::derive(move || catalog.with(|c| c.organizations.clone()))
                    processes=Signal::derive(move || catalog.with(|c| c.processes.clone()))
                    default_day=day
                    on_saved=Callback::new(move |_| {
                        form_mode.set(None);
                        load(false);
                    })
                    on_close=Callback::new(move |_| form_mode.set(None))
                />
            })}

            {move || confirm.with(|c| c.pending().map(|r| (format_date(&r.entry.date), format_hours(r.entry.hours)))).map(|(date, hours)| view! {
                <ConfirmDialog
                    title="Delete time entry"
                    message=format!("Delete {} h logged on {}? This cannot be undone.", hours, date)
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |_| confirm.update(|c| c.cancel()))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_covers_current_month() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let query = query_of(&initial_state(day));
        assert_eq!(query.from, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(query.to, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_period_change_requires_refetch() {
        let mut state = initial_state(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        let range = FilterValue::Between {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: None,
        };
        assert_eq!(state.set_filter(DATE_FIELD, range), ListCommand::Refetch);
        assert_eq!(query_of(&state).to, None);
        assert_eq!(state.set_filter("process_id", FilterValue::is("p-1")), ListCommand::Rederive);
    }

    #[test]
    fn test_cleared_period_sends_no_bounds() {
        let mut state = initial_state(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        state.clear_filters();
        assert_eq!(query_of(&state), TimeEntryQuery::default());
    }
}
