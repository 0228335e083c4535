use super::{CrudService, FormContext, ReadService, TableActions};
use crate::domain::a001_category::api as category_api;
use crate::shared::config::config;
use crate::shared::confirm::ConfirmState;
use crate::shared::form_state::FormPhase;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::{EntityId, Resource};
use contracts::shared::envelope::Page;
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::{clamp_page, needs_pagination, total_pages};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Server-paginated list state of one admin tab or public page. Pages are
/// 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminListState<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub search: String,
    /// Fixed filters sent with every page request
    pub scope: ListQuery,
    pub is_loading: bool,
    pub is_loaded: bool,
}

impl<T> AdminListState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total: 0,
            search: String::new(),
            scope: ListQuery::new(),
            is_loading: false,
            is_loaded: false,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    pub fn show_pagination(&self) -> bool {
        needs_pagination(self.total, self.page_size)
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.page),
            page_size: Some(self.page_size),
            ..self.scope.clone()
        }
        .search(&self.search)
    }

    pub fn apply(&mut self, page: Page<T>) {
        self.items = page.data;
        self.total = page.total;
        self.is_loading = false;
        self.is_loaded = true;
    }

    /// After a delete: step back when the current page just became empty
    pub fn after_delete(&mut self) {
        let remaining = self.total.saturating_sub(1);
        self.page = clamp_page(self.page, total_pages(remaining, self.page_size));
    }
}

/// ViewModel of a server-paginated list: paging, search and, on admin
/// tabs, the inline delete confirmation.
pub struct PagedListVm<E: ReadService> {
    pub state: RwSignal<AdminListState<E>>,
    pub confirm: RwSignal<ConfirmState<EntityId>>,
    /// Lookup for the category column
    pub categories: RwSignal<Vec<Category>>,
    /// Phase of the form currently open from this list
    pub form_phase: RwSignal<FormPhase>,
    request_seq: StoredValue<u64>,
    toasts: ToastService,
}

impl<E: ReadService> Clone for PagedListVm<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ReadService> Copy for PagedListVm<E> {}

impl<E: ReadService> PagedListVm<E> {
    pub fn new(toasts: ToastService) -> Self {
        Self::scoped(toasts, ListQuery::new(), config().lists.page_size)
    }

    /// List restricted by `scope` (e.g. published records only)
    pub fn scoped(toasts: ToastService, scope: ListQuery, page_size: u32) -> Self {
        let mut state = AdminListState::new(page_size);
        state.scope = scope;
        Self {
            state: RwSignal::new(state),
            confirm: RwSignal::new(ConfirmState::Idle),
            categories: RwSignal::new(Vec::new()),
            form_phase: RwSignal::new(FormPhase::Idle),
            request_seq: StoredValue::new(0),
            toasts,
        }
    }

    /// Fetch the current page; responses to superseded requests are dropped
    pub fn load(&self) {
        let Some((seq, query)) = self.begin_load() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            let result = E::list(&query).await;
            vm.finish_load(seq, result);
        });
    }

    /// Number the request and mark the list loading. `None` once the view
    /// owning the list has been unmounted.
    fn begin_load(&self) -> Option<(u64, ListQuery)> {
        let query = self.state.try_with_untracked(|s| s.query())?;
        let seq = self.request_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        })?;
        self.state.try_update(|s| s.is_loading = true)?;
        Some((seq, query))
    }

    /// Apply a finished request unless a newer one was started or the list
    /// was unmounted meanwhile (a tab switch). Returns whether it was applied.
    fn finish_load(&self, seq: u64, result: Result<Page<E>, ApiError>) -> bool {
        if self.request_seq.try_get_value() != Some(seq) {
            return false;
        }
        self.state
            .try_update(|s| match result {
                Ok(page) => s.apply(page),
                Err(_) => s.is_loading = false,
            })
            .is_some()
    }

    /// Category names for the table; only the category tab itself skips this
    pub fn load_categories(&self) {
        let vm = *self;
        spawn_local(async move {
            if let Ok(categories) = category_api::list_all().await {
                let _ = vm.categories.try_set(categories);
            }
        });
    }

    pub fn set_page(&self, page: u32) {
        let changed = self.state.try_update(|s| {
            let page = clamp_page(page, s.total_pages());
            let changed = s.page != page;
            s.page = page;
            changed
        });
        if changed.unwrap_or(false) {
            self.load();
        }
    }

    pub fn set_search(&self, text: String) {
        self.state.update(|s| {
            s.search = text;
            s.page = 1;
        });
        self.load();
    }

    pub fn set_category(&self, category_id: Option<EntityId>) {
        self.state.update(|s| {
            s.scope.category_id = category_id;
            s.page = 1;
        });
        self.load();
    }

    pub fn request_delete(&self, id: EntityId) {
        self.confirm.update(|c| c.request(id));
    }

    pub fn cancel_delete(&self) {
        self.confirm.update(|c| c.cancel());
    }
}

impl<E: CrudService> PagedListVm<E> {
    /// Open the entity form in a modal. The modal refuses to close while a
    /// submit is in flight; a successful save closes it and reloads the page.
    pub fn open_form(&self, modal_stack: ModalStackService, id: Option<EntityId>, render: fn(FormContext) -> AnyView) {
        let vm = *self;
        let phase = self.form_phase;
        modal_stack.push_guarded(
            Some("details-modal"),
            move || !phase.get_untracked().is_busy(),
            move |handle| {
                render(FormContext {
                    id,
                    phase,
                    on_saved: Callback::new(move |_| {
                        handle.close();
                        vm.load();
                    }),
                    on_cancel: Callback::new(move |_| handle.close()),
                })
            },
        );
    }

    /// Create/edit/delete wiring for `admin_table`
    pub fn table_actions(&self, modal_stack: ModalStackService, render: fn(FormContext) -> AnyView) -> TableActions {
        let vm = *self;
        TableActions {
            on_create: Callback::new(move |_| vm.open_form(modal_stack, None, render)),
            on_edit: Callback::new(move |id| vm.open_form(modal_stack, Some(id), render)),
            on_confirm_delete: Callback::new(move |_| vm.confirm_delete()),
        }
    }

    /// Run the confirmed delete, then reload the page
    pub fn confirm_delete(&self) {
        let Some(id) = self.take_confirmed() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            let deleted = E::delete(id).await.is_ok();
            if deleted {
                log::info!("Deleted {} #{}", E::collection_name(), id);
                vm.toasts.success(format!("Đã xóa {}", E::element_name().to_lowercase()));
            }
            if vm.finish_delete(deleted) {
                vm.load();
            }
        });
    }
}

impl<E: ReadService> PagedListVm<E> {
    /// Target of the pending confirmation, handed out once; nothing while a
    /// delete is already running
    fn take_confirmed(&self) -> Option<EntityId> {
        self.confirm.try_update(|c| c.confirm()).flatten()
    }

    /// Release the confirmation once the DELETE returned. True when the list
    /// is still mounted and should reload.
    fn finish_delete(&self, deleted: bool) -> bool {
        if self.confirm.try_update(|c| c.finish()).is_none() {
            return false;
        }
        deleted && self.state.try_update(|s| s.after_delete()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_accommodation::aggregate::Accommodation;
    use leptos::reactive::owner::Owner;

    fn mounted_list() -> (Owner, PagedListVm<Accommodation>) {
        let owner = Owner::new();
        let vm = owner.with(|| PagedListVm::scoped(ToastService::new(), ListQuery::new(), 20));
        (owner, vm)
    }

    fn empty_page(total: u64) -> Result<Page<Accommodation>, ApiError> {
        Ok(Page { data: Vec::new(), total })
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let (owner, vm) = mounted_list();
        let (seq, _) = vm.begin_load().unwrap();
        owner.cleanup();
        assert!(!vm.finish_load(seq, empty_page(3)));
        assert!(vm.begin_load().is_none());
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let (_owner, vm) = mounted_list();
        let (first, _) = vm.begin_load().unwrap();
        let (second, _) = vm.begin_load().unwrap();
        assert!(!vm.finish_load(first, empty_page(99)));
        assert!(vm.finish_load(second, empty_page(7)));
        assert_eq!(vm.state.with_untracked(|s| s.total), 7);
        assert!(vm.state.with_untracked(|s| !s.is_loading && s.is_loaded));
    }

    #[test]
    fn test_second_confirm_while_busy_is_ignored() {
        let (_owner, vm) = mounted_list();
        vm.request_delete(5);
        assert_eq!(vm.take_confirmed(), Some(5));
        assert_eq!(vm.take_confirmed(), None);

        vm.request_delete(6);
        assert_eq!(vm.take_confirmed(), None);

        assert!(vm.finish_delete(true));
        assert_eq!(vm.take_confirmed(), None);
    }

    #[test]
    fn test_failed_delete_does_not_reload() {
        let (_owner, vm) = mounted_list();
        vm.request_delete(5);
        vm.take_confirmed();
        assert!(!vm.finish_delete(false));
        assert!(vm.confirm.with_untracked(|c| !c.is_busy()));
    }

    #[test]
    fn test_delete_finishing_after_unmount() {
        let (owner, vm) = mounted_list();
        vm.request_delete(5);
        vm.take_confirmed();
        owner.cleanup();
        assert!(!vm.finish_delete(true));
    }

    fn page_of(n: usize, total: u64) -> Page<String> {
        Page {
            data: (0..n).map(|i| format!("row {}", i)).collect(),
            total,
        }
    }

    #[test]
    fn test_single_row_has_no_pagination() {
        let mut state = AdminListState::new(20);
        state.apply(page_of(1, 1));
        assert_eq!(state.items.len(), 1);
        assert!(!state.show_pagination());
        assert!(state.is_loaded);
    }

    #[test]
    fn test_query_carries_page_and_search() {
        let mut state: AdminListState<String> = AdminListState::new(20);
        state.page = 3;
        state.search = "  ".into();
        let query = state.query();
        assert_eq!(query.page, Some(3));
        assert_eq!(query.page_size, Some(20));
        assert_eq!(query.search, None);
    }

    #[test]
    fn test_scope_is_merged_into_query() {
        let mut state: AdminListState<String> = AdminListState::new(9);
        state.scope = ListQuery::new().published(true).category(Some(4));
        state.search = "phở".into();
        let query = state.query();
        assert_eq!(query.page, Some(1));
        assert_eq!(query.page_size, Some(9));
        assert_eq!(query.is_published, Some(true));
        assert_eq!(query.category_id, Some(4));
        assert_eq!(query.search.as_deref(), Some("phở"));
    }

    #[test]
    fn test_many_rows_paginate() {
        let mut state = AdminListState::new(20);
        state.apply(page_of(20, 45));
        assert_eq!(state.total_pages(), 3);
        assert!(state.show_pagination());
    }

    #[test]
    fn test_after_delete_steps_back_from_emptied_page() {
        let mut state = AdminListState::new(20);
        state.apply(page_of(1, 41));
        state.page = 3;
        state.after_delete();
        assert_eq!(state.page, 2);

        state.total = 1;
        state.page = 1;
        state.after_delete();
        assert_eq!(state.page, 1);
    }
}
