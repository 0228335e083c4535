//! Service traits every entity module implements, plus the generic view
//! models built on them.

pub mod admin_list;
pub mod admin_table;
pub mod details_vm;

pub use admin_list::{AdminListState, PagedListVm};
pub use admin_table::{admin_table, published_badge, Column, TableActions};
pub use details_vm::{DetailsViewModel, FormContext};

use crate::shared::config::config;
use crate::shared::http;
use contracts::domain::a001_category::aggregate::CategoryKind;
use contracts::domain::common::{CreatePayload, Editable, EntityId, ImageLink, ImageSet, Resource, UpdatePayload};
use contracts::shared::envelope::Page;
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;

/// Read side of an entity's REST collection.
#[allow(async_fn_in_trait)]
pub trait ReadService: Resource {
    async fn list(query: &ListQuery) -> Result<Page<Self>, ApiError> {
        http::get_page(&Self::list_path(), query).await
    }

    async fn get_by_id(id: EntityId) -> Result<Self, ApiError> {
        http::get_data(&Self::get_path(id)).await
    }
}

/// Full create/update/delete service of an editable entity.
#[allow(async_fn_in_trait)]
pub trait CrudService: ReadService + Editable {
    /// Categories offered by the form's category select, `None` when the
    /// form has no such select
    const CATEGORY_KIND: Option<CategoryKind>;

    async fn create(draft: &Self::Draft, images: &ImageSet) -> Result<(), ApiError>;

    /// `original` holds the links the record had when the form was opened
    async fn update(
        id: EntityId,
        draft: &Self::Draft,
        images: &ImageSet,
        original: &[ImageLink],
    ) -> Result<(), ApiError>;

    async fn delete(id: EntityId) -> Result<(), ApiError> {
        http::delete(&Self::delete_path(id)).await
    }

    /// Image links of a loaded record, empty for entities without images
    fn image_links(&self) -> &[ImageLink] {
        &[]
    }
}

/// `create` of an entity whose payload is the draft plus its full image list
pub async fn create_with_images<E: Editable>(draft: &E::Draft, images: &ImageSet) -> Result<(), ApiError> {
    http::post::<_, serde_json::Value>(&E::create_path(), &CreatePayload::new(draft, images))
        .await
        .map(|_| ())
}

/// `update` of an entity whose payload is the draft plus an image diff
pub async fn update_with_images<E: Editable>(
    id: EntityId,
    draft: &E::Draft,
    images: &ImageSet,
    original: &[ImageLink],
) -> Result<(), ApiError> {
    let payload = UpdatePayload::new(draft, images.diff(original));
    http::put::<_, serde_json::Value>(&E::update_path(id), &payload)
        .await
        .map(|_| ())
}

/// Every record matching `query` in one call (up to `lists.load_all_limit`).
/// Backs the client-side filtered public lists and the select options.
pub async fn load_all<E: ReadService>(query: ListQuery) -> Result<Vec<E>, ApiError> {
    let query = ListQuery {
        page: Some(1),
        page_size: Some(config().lists.load_all_limit),
        ..query
    };
    E::list(&query).await.map(|page| page.data)
}
