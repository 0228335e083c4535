use crate::shared::crud::{create_with_images, load_all, update_with_images, CrudService, ReadService};
use contracts::domain::a001_category::aggregate::CategoryKind;
use contracts::domain::a005_accommodation::aggregate::{Accommodation, AccommodationDraft};
use contracts::domain::common::{EntityId, ImageLink, ImageSet};
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;

impl ReadService for Accommodation {}

impl CrudService for Accommodation {
    const CATEGORY_KIND: Option<CategoryKind> = Some(CategoryKind::Accommodation);

    async fn create(draft: &AccommodationDraft, images: &ImageSet) -> Result<(), ApiError> {
        create_with_images::<Accommodation>(draft, images).await
    }

    async fn update(id: EntityId, draft: &AccommodationDraft, images: &ImageSet, original: &[ImageLink]) -> Result<(), ApiError> {
        update_with_images::<Accommodation>(id, draft, images, original).await
    }

    fn image_links(&self) -> &[ImageLink] {
        &self.images
    }
}

/// Published records for the client-side filtered public list
pub async fn list_published() -> Result<Vec<Accommodation>, ApiError> {
    load_all(ListQuery::new().published(true)).await
}
