use crate::domain::a005_accommodation::aggregate::validate_price_band;
use crate::domain::common::{
    require, require_selected, Editable, EntityId, EntityMetadata, Illustrated, ImageLink,
    Publishable, Resource, Validate,
};
use crate::shared::error::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Restaurant {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub address: String,
    pub phone: Option<String>,
    pub cuisine: String,
    pub opening_hours: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub place_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
    pub images: Vec<ImageLink>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Resource for Restaurant {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "restaurants"
    }

    fn element_name() -> &'static str {
        "Nhà hàng"
    }

    fn list_name() -> &'static str {
        "Ẩm thực"
    }
}

impl Illustrated for Restaurant {
    fn images(&self) -> &[ImageLink] {
        &self.images
    }
}

impl Publishable for Restaurant {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn category_id(&self) -> Option<EntityId> {
        self.category_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub address: String,
    pub phone: Option<String>,
    pub cuisine: String,
    pub opening_hours: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub place_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
}

impl Validate for RestaurantDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "tên nhà hàng")?;
        require(&self.slug, "slug")?;
        require(&self.summary, "mô tả ngắn")?;
        require(&self.address, "địa chỉ")?;
        require(&self.cuisine, "loại ẩm thực")?;
        require_selected(&self.category_id, "danh mục")?;
        validate_price_band(self.min_price, self.max_price)
    }
}

impl Editable for Restaurant {
    type Draft = RestaurantDraft;

    fn to_draft(&self) -> RestaurantDraft {
        RestaurantDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            cuisine: self.cuisine.clone(),
            opening_hours: self.opening_hours.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            place_id: self.place_id,
            category_id: self.category_id,
            is_published: self.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RestaurantDraft {
        RestaurantDraft {
            name: "Bún chả Hương Liên".into(),
            slug: "bun-cha-huong-lien".into(),
            summary: "Bún chả Hà Nội".into(),
            address: "24 Lê Văn Hưu".into(),
            cuisine: "Việt Nam".into(),
            min_price: 50_000.0,
            max_price: 150_000.0,
            category_id: Some(9),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_restaurant() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_price_band_shared_with_accommodation() {
        let mut draft = valid();
        draft.max_price = draft.min_price;
        assert_eq!(draft.validate(), Err(ValidationError::PriceRange));
    }

    #[test]
    fn test_cuisine_required() {
        let mut draft = valid();
        draft.cuisine.clear();
        assert_eq!(draft.validate(), Err(ValidationError::Required("loại ẩm thực")));
    }

    #[test]
    fn test_each_required_field_blocks() {
        let cases: [(fn(&mut RestaurantDraft), ValidationError); 6] = [
            (|d| d.name.clear(), ValidationError::Required("tên nhà hàng")),
            (|d| d.slug.clear(), ValidationError::Required("slug")),
            (|d| d.summary.clear(), ValidationError::Required("mô tả ngắn")),
            (|d| d.address.clear(), ValidationError::Required("địa chỉ")),
            (|d| d.cuisine = "  ".into(), ValidationError::Required("loại ẩm thực")),
            (|d| d.category_id = None, ValidationError::NotSelected("danh mục")),
        ];
        for (clear, expected) in cases {
            let mut draft = valid();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(expected));
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(Restaurant::update_path(2), "/restaurants/update/2");
    }
}
