use crate::shared::crud::{create_with_images, update_with_images, CrudService, ReadService};
use contracts::domain::a001_category::aggregate::CategoryKind;
use contracts::domain::a006_restaurant::aggregate::{Restaurant, RestaurantDraft};
use contracts::domain::common::{EntityId, ImageLink, ImageSet};
use contracts::shared::error::ApiError;

impl ReadService for Restaurant {}

impl CrudService for Restaurant {
    const CATEGORY_KIND: Option<CategoryKind> = Some(CategoryKind::Restaurant);

    async fn create(draft: &RestaurantDraft, images: &ImageSet) -> Result<(), ApiError> {
        create_with_images::<Restaurant>(draft, images).await
    }

    async fn update(id: EntityId, draft: &RestaurantDraft, images: &ImageSet, original: &[ImageLink]) -> Result<(), ApiError> {
        update_with_images::<Restaurant>(id, draft, images, original).await
    }

    fn image_links(&self) -> &[ImageLink] {
        &self.images
    }
}
