use super::CrudService;
use crate::domain::a001_category::api as category_api;
use crate::shared::form_state::{FormPhase, SubmitBlocked};
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::{slugify, Editable, EntityId, ImageLink, ImageSet, Resource};
use contracts::shared::error::ApiError;
use futures_util::future::join;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// What a list hands to the form it opens
#[derive(Clone, Copy)]
pub struct FormContext {
    /// `None` opens the form in create mode
    pub id: Option<EntityId>,
    pub phase: RwSignal<FormPhase>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// ViewModel behind every admin create/edit form.
///
/// `id == None` is create mode. Phase handling, hydration and the service
/// calls live here; the per-entity views only bind draft fields.
pub struct DetailsViewModel<E: CrudService> {
    pub id: Option<EntityId>,
    pub form: RwSignal<E::Draft>,
    pub images: RwSignal<ImageSet>,
    pub categories: RwSignal<Vec<Category>>,
    pub phase: RwSignal<FormPhase>,
    pub is_loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    original_images: StoredValue<Vec<ImageLink>>,
    slug_touched: RwSignal<bool>,
    toasts: ToastService,
}

impl<E: CrudService> Clone for DetailsViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: CrudService> Copy for DetailsViewModel<E> {}

impl<E: CrudService> DetailsViewModel<E> {
    /// The phase signal is owned by the list that opened the form, so the
    /// modal can refuse to close while a submit is in flight
    pub fn new(ctx: &FormContext, toasts: ToastService) -> Self {
        let FormContext { id, phase, .. } = *ctx;
        phase.set(FormPhase::Idle);
        Self {
            id,
            form: RwSignal::new(E::Draft::default()),
            images: RwSignal::new(ImageSet::new()),
            categories: RwSignal::new(Vec::new()),
            phase,
            is_loading: RwSignal::new(id.is_some()),
            load_error: RwSignal::new(None),
            original_images: StoredValue::new(Vec::new()),
            slug_touched: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            format!("Sửa {}", E::element_name().to_lowercase())
        } else {
            format!("Thêm {}", E::element_name().to_lowercase())
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }

    /// Inputs are locked while loading or submitting
    pub fn is_locked(&self) -> bool {
        self.is_loading.get() || self.phase.get().is_busy()
    }

    /// In create mode the slug follows the name until edited by hand
    pub fn slug_follows_name(&self) -> bool {
        !self.is_edit_mode() && !self.slug_touched.get_untracked()
    }

    /// Rewrite `slug` from a freshly typed name when it still follows it
    pub fn autofill_slug(&self, name: &str, slug: &mut String) {
        if self.slug_follows_name() {
            *slug = slugify(name);
        }
    }

    pub fn mark_slug_touched(&self) {
        self.slug_touched.set(true);
    }

    /// Fresh draft in create mode; in edit mode fetch the record and the
    /// category options in parallel and hydrate the draft from the record
    pub fn load_or_reset(&self) {
        let vm = *self;
        match self.id {
            None => {
                self.form.set(E::Draft::default());
                self.images.set(ImageSet::new());
                self.original_images.set_value(Vec::new());
                spawn_local(async move {
                    if let Ok(categories) = Self::fetch_categories().await {
                        vm.categories.set(categories);
                    }
                });
            }
            Some(id) => {
                self.is_loading.set(true);
                spawn_local(async move {
                    let (categories, record) = join(Self::fetch_categories(), E::get_by_id(id)).await;
                    if let Ok(categories) = categories {
                        vm.categories.set(categories);
                    }
                    match record {
                        Ok(record) => {
                            log::debug!("Loaded {} #{}", E::collection_name(), id);
                            vm.form.set(record.to_draft());
                            vm.images.set(ImageSet::from_links(record.image_links()));
                            vm.original_images.set_value(record.image_links().to_vec());
                            vm.load_error.set(None);
                        }
                        Err(e) => vm.load_error.set(Some(e.to_string())),
                    }
                    vm.is_loading.set(false);
                });
            }
        }
    }

    async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
        match E::CATEGORY_KIND {
            Some(kind) => category_api::list_for(kind).await,
            None => Ok(Vec::new()),
        }
    }

    /// Validate and submit. Invalid drafts are reported as a warning toast
    /// and never reach the service; `on_saved` runs only on success.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let draft = self.form.get_untracked();
        let next = match self.phase.get_untracked().begin_submit(&draft) {
            Ok(next) => next,
            Err(SubmitBlocked::Invalid(e)) => {
                self.toasts.warning(e.to_string());
                return;
            }
            Err(blocked) => {
                log::debug!("Submit ignored: {:?}", blocked);
                return;
            }
        };
        self.phase.set(next);

        let vm = *self;
        let images = self.images.get_untracked();
        let original = self.original_images.get_value();
        spawn_local(async move {
            let result = match vm.id {
                Some(id) => E::update(id, &draft, &images, &original).await,
                None => E::create(&draft, &images).await,
            };
            let ok = result.is_ok();
            vm.phase.update(|phase| *phase = phase.finish(ok));
            if ok {
                log::info!("Saved {} {:?}", E::collection_name(), vm.id);
                vm.toasts.success(format!("Đã lưu {}", E::element_name().to_lowercase()));
                on_saved.run(());
            }
        });
    }
}
