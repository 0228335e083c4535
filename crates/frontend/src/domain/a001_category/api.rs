use crate::shared::config::config;
use crate::shared::crud::{CrudService, ReadService};
use crate::shared::http;
use contracts::domain::a001_category::aggregate::{Category, CategoryDraft, CategoryKind};
use contracts::domain::common::{EntityId, ImageLink, ImageSet, Resource};
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;

impl ReadService for Category {}

impl CrudService for Category {
    const CATEGORY_KIND: Option<CategoryKind> = None;

    async fn create(draft: &CategoryDraft, _images: &ImageSet) -> Result<(), ApiError> {
        http::post::<_, serde_json::Value>(&Category::create_path(), draft)
            .await
            .map(|_| ())
    }

    async fn update(
        id: EntityId,
        draft: &CategoryDraft,
        _images: &ImageSet,
        _original: &[ImageLink],
    ) -> Result<(), ApiError> {
        http::put::<_, serde_json::Value>(&Category::update_path(id), draft)
            .await
            .map(|_| ())
    }
}

/// Every category in one call (up to `lists.load_all_limit`)
pub async fn list_all() -> Result<Vec<Category>, ApiError> {
    let query = ListQuery::paged(1, config().lists.load_all_limit);
    Category::list(&query).await.map(|page| page.data)
}

/// Categories offered by the filter of a public list
pub async fn list_for(kind: CategoryKind) -> Result<Vec<Category>, ApiError> {
    Ok(list_all()
        .await?
        .into_iter()
        .filter(|c| c.fits(kind))
        .collect())
}
