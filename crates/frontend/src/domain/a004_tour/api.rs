use crate::shared::crud::{create_with_images, load_all, update_with_images, CrudService, ReadService};
use contracts::domain::a001_category::aggregate::CategoryKind;
use contracts::domain::a004_tour::aggregate::{Tour, TourDraft};
use contracts::domain::common::{EntityId, ImageLink, ImageSet};
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;

impl ReadService for Tour {}

impl CrudService for Tour {
    const CATEGORY_KIND: Option<CategoryKind> = Some(CategoryKind::Tour);

    async fn create(draft: &TourDraft, images: &ImageSet) -> Result<(), ApiError> {
        create_with_images::<Tour>(draft, images).await
    }

    async fn update(id: EntityId, draft: &TourDraft, images: &ImageSet, original: &[ImageLink]) -> Result<(), ApiError> {
        update_with_images::<Tour>(id, draft, images, original).await
    }

    fn image_links(&self) -> &[ImageLink] {
        &self.images
    }
}

/// Published records for the client-side filtered public list
pub async fn list_published() -> Result<Vec<Tour>, ApiError> {
    load_all(ListQuery::new().published(true)).await
}
