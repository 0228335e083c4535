use crate::shared::crud::{create_with_images, load_all, update_with_images, CrudService, ReadService};
use contracts::domain::a001_category::aggregate::CategoryKind;
use contracts::domain::a002_place::aggregate::{Place, PlaceDraft};
use contracts::domain::common::{EntityId, ImageLink, ImageSet};
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;

impl ReadService for Place {}

impl CrudService for Place {
    const CATEGORY_KIND: Option<CategoryKind> = Some(CategoryKind::Place);

    async fn create(draft: &PlaceDraft, images: &ImageSet) -> Result<(), ApiError> {
        create_with_images::<Place>(draft, images).await
    }

    async fn update(id: EntityId, draft: &PlaceDraft, images: &ImageSet, original: &[ImageLink]) -> Result<(), ApiError> {
        update_with_images::<Place>(id, draft, images, original).await
    }

    fn image_links(&self) -> &[ImageLink] {
        &self.images
    }
}

/// All places, optionally only the published ones
pub async fn list_all(published_only: bool) -> Result<Vec<Place>, ApiError> {
    let query = if published_only {
        ListQuery::new().published(true)
    } else {
        ListQuery::new()
    };
    load_all(query).await
}
