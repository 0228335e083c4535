use crate::shared::crud::{create_with_images, update_with_images, CrudService, ReadService};
use contracts::domain::a001_category::aggregate::CategoryKind;
use contracts::domain::a003_event::aggregate::{Event, EventDraft};
use contracts::domain::common::{EntityId, ImageLink, ImageSet};
use contracts::shared::error::ApiError;

impl ReadService for Event {}

impl CrudService for Event {
    const CATEGORY_KIND: Option<CategoryKind> = Some(CategoryKind::Event);

    async fn create(draft: &EventDraft, images: &ImageSet) -> Result<(), ApiError> {
        create_with_images::<Event>(draft, images).await
    }

    async fn update(id: EntityId, draft: &EventDraft, images: &ImageSet, original: &[ImageLink]) -> Result<(), ApiError> {
        update_with_images::<Event>(id, draft, images, original).await
    }

    fn image_links(&self) -> &[ImageLink] {
        &self.images
    }
}
