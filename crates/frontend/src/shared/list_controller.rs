//! Реактивная обёртка над `ListState` для страницы-списка.
//!
//! The controller owns two signals: the list parameters/phase and the fetched
//! collection. The visible page is a memo over both, so client-side parameter
//! changes re-derive synchronously. Loads are tagged with the generation from
//! `ListState::begin_load`; a response for an older generation is dropped.

use contracts::domain::common::ListRecord;
use contracts::shared::api::ApiError;
use contracts::shared::list::{FilterValue, ListCommand, ListState, Page, SortSpec};
use contracts::shared::notification::ToastCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::flag_literal;
use crate::shared::toast::{use_toast, ToastService};
use crate::system::auth::context::{expire_session, use_auth, AuthState};

pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState>,
    pub records: RwSignal<Vec<T>>,
    name: &'static str,
    category: ToastCategory,
    toasts: ToastService,
    set_auth_state: WriteSignal<AuthState>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: ListRecord + Clone + PartialEq + Send + Sync + 'static,
{
    /// Must be called inside a component: picks up toast and auth context.
    pub fn new(name: &'static str, category: ToastCategory, state: ListState) -> Self {
        let (_, set_auth_state) = use_auth();
        Self {
            state: RwSignal::new(state),
            records: RwSignal::new(Vec::new()),
            name,
            category,
            toasts: use_toast(),
            set_auth_state,
        }
    }

    /// filter → sort → paginate, recomputed when parameters or data change
    pub fn page(&self) -> Memo<Page<T>> {
        let state = self.state;
        let records = self.records;
        Memo::new(move |_| state.with(|s| records.with(|r| s.derive(r))))
    }

    /// Fetch the collection. The fetch closure runs immediately; its result is
    /// applied only if no newer load started meanwhile.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let this = *self;
        let Some(generation) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        log::debug!("{}: loading (generation {})", self.name, generation);

        spawn_local(async move {
            let result = fetch().await;

            // Список мог быть закрыт, пока шёл запрос
            let Some(is_current) = this.state.try_with_untracked(|s| s.is_current(generation))
            else {
                return;
            };
            if !is_current {
                log::debug!("{}: dropped stale response (generation {})", this.name, generation);
                return;
            }

            match result {
                Ok(records) => {
                    log::debug!("{}: loaded {} records", this.name, records.len());
                    this.records.set(records);
                    this.records.with_untracked(|records| {
                        this.state.update(|s| {
                            s.finish_load(generation);
                            s.derive_clamped(records);
                        })
                    });
                }
                Err(err) => {
                    this.state.update(|s| {
                        s.fail_load(generation, err.message.clone());
                    });
                    this.report(&format!("{}: load failed", this.name), &err);
                }
            }
        });
    }

    /// Toast + log; an authentication failure also ends the session.
    pub fn report(&self, context: &str, err: &ApiError) {
        self.toasts.report(self.category, context, err);
        if err.is_authentication() {
            expire_session(self.set_auth_state);
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.toasts.success(self.category, message);
    }

    /// Row mutation (delete, status change, assign). `busy` is held while the
    /// request runs; `on_success` (usually a reload) runs only after success.
    pub fn mutate<Fut, S>(&self, busy: RwSignal<bool>, request: Fut, success_message: String, on_success: S)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
        S: FnOnce() + 'static,
    {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let this = *self;
        spawn_local(async move {
            let result = request.await;
            if busy.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(()) => {
                    this.notify_success(success_message);
                    on_success();
                }
                Err(err) => this.report(&format!("{}: update failed", this.name), &err),
            }
        });
    }

    fn apply(&self, change: impl FnOnce(&mut ListState) -> ListCommand) -> ListCommand {
        self.state.try_update(change).unwrap_or(ListCommand::None)
    }

    pub fn set_search(&self, search: &str) -> ListCommand {
        self.apply(|s| s.set_search(search))
    }

    pub fn set_filter(&self, field: &str, value: FilterValue) -> ListCommand {
        self.apply(|s| s.set_filter(field, value))
    }

    pub fn clear_filters(&self) -> ListCommand {
        self.apply(|s| s.clear_filters())
    }

    pub fn toggle_sort(&self, field: &str) -> ListCommand {
        self.apply(|s| s.toggle_sort(field))
    }

    pub fn go_to_page(&self, page: usize) -> ListCommand {
        self.apply(|s| s.go_to_page(page))
    }

    pub fn set_page_size(&self, page_size: usize) -> ListCommand {
        self.apply(|s| s.set_page_size(page_size))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn sort(&self) -> Signal<SortSpec> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort.clone()))
    }

    pub fn search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters.search().to_string()))
    }

    /// Literal of an `Is` filter, for binding a select box
    pub fn filter_literal(&self, field: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters.literal(field)))
    }

    /// "true" / "false" / "" for a boolean filter select
    pub fn flag_literal(&self, field: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| flag_literal(&s.filters, field).to_string()))
    }

    pub fn active_filters(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters.active_count()))
    }

    /// Pagination bound to the derived page
    pub fn pagination(&self, page: Memo<Page<T>>) -> impl IntoView {
        let this = *self;
        view! {
            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                range_label=Signal::derive(move || page.with(|p| p.range_label()))
                page_size=Signal::derive(move || page.with(|p| p.page_size))
                on_page_change=Callback::new(move |p: usize| {
                    this.go_to_page(p);
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    this.set_page_size(size);
                })
            />
        }
    }
}
