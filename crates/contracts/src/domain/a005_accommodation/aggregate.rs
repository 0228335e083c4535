use crate::domain::common::{
    require, require_selected, Editable, EntityId, EntityMetadata, Illustrated, ImageLink,
    Publishable, Resource, Validate,
};
use crate::shared::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Hotel, homestay or resort
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accommodation {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub star_rating: Option<u8>,
    pub min_price: f64,
    pub max_price: f64,
    pub place_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
    pub images: Vec<ImageLink>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Resource for Accommodation {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "accommodations"
    }

    fn element_name() -> &'static str {
        "Cơ sở lưu trú"
    }

    fn list_name() -> &'static str {
        "Lưu trú"
    }
}

impl Illustrated for Accommodation {
    fn images(&self) -> &[ImageLink] {
        &self.images
    }
}

impl Publishable for Accommodation {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn category_id(&self) -> Option<EntityId> {
        self.category_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationDraft {
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub star_rating: Option<u8>,
    pub min_price: f64,
    pub max_price: f64,
    pub place_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
}

/// Price band rule shared by accommodations and restaurants:
/// the lower bound must be positive and strictly below the upper bound.
pub fn validate_price_band(min_price: f64, max_price: f64) -> Result<(), ValidationError> {
    if min_price.is_nan() || min_price <= 0.0 {
        return Err(ValidationError::NonPositiveMinPrice);
    }
    if max_price.is_nan() || min_price >= max_price {
        return Err(ValidationError::PriceRange);
    }
    Ok(())
}

impl Validate for AccommodationDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "tên cơ sở lưu trú")?;
        require(&self.slug, "slug")?;
        require(&self.summary, "mô tả ngắn")?;
        require(&self.address, "địa chỉ")?;
        require_selected(&self.category_id, "danh mục")?;

        if let Some(stars) = self.star_rating {
            if !(1..=5).contains(&stars) {
                return Err(ValidationError::StarRating);
            }
        }
        validate_price_band(self.min_price, self.max_price)
    }
}

impl Editable for Accommodation {
    type Draft = AccommodationDraft;

    fn to_draft(&self) -> AccommodationDraft {
        AccommodationDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            star_rating: self.star_rating,
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

    fn valid() -> AccommodationDraft {
        AccommodationDraft {
            name: "Mường Thanh Luxury".into(),
            slug: "muong-thanh-luxury".into(),
            summary: "Khách sạn 5 sao".into(),
            address: "Bãi Cháy, Hạ Long".into(),
            star_rating: Some(5),
            min_price: 1_200_000.0,
            max_price: 4_500_000.0,
            category_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_accommodation() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_min_price_not_positive_blocks() {
        let mut draft = valid();
        draft.min_price = 0.0;
        assert_eq!(draft.validate(), Err(ValidationError::NonPositiveMinPrice));
        draft.min_price = -10.0;
        assert_eq!(draft.validate(), Err(ValidationError::NonPositiveMinPrice));
    }

    #[test]
    fn test_min_price_not_below_max_blocks() {
        let mut draft = valid();
        draft.min_price = draft.max_price;
        assert_eq!(draft.validate(), Err(ValidationError::PriceRange));
        draft.min_price = draft.max_price + 1.0;
        assert_eq!(draft.validate(), Err(ValidationError::PriceRange));
    }

    #[test]
    fn test_star_rating_range() {
        let mut draft = valid();
        draft.star_rating = Some(6);
        assert_eq!(draft.validate(), Err(ValidationError::StarRating));
        draft.star_rating = None;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field_blocks() {
        let cases: [(fn(&mut AccommodationDraft), ValidationError); 5] = [
            (|d| d.name.clear(), ValidationError::Required("tên cơ sở lưu trú")),
            (|d| d.slug.clear(), ValidationError::Required("slug")),
            (|d| d.summary.clear(), ValidationError::Required("mô tả ngắn")),
            (|d| d.address = " ".into(), ValidationError::Required("địa chỉ")),
            (|d| d.category_id = None, ValidationError::NotSelected("danh mục")),
        ];
        for (clear, expected) in cases {
            let mut draft = valid();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(expected));
        }
    }

    #[test]
    fn test_unparsed_prices_block() {
        let mut draft = valid();
        draft.min_price = f64::NAN;
        assert_eq!(draft.validate(), Err(ValidationError::NonPositiveMinPrice));

        let mut draft = valid();
        draft.max_price = f64::NAN;
        assert_eq!(draft.validate(), Err(ValidationError::PriceRange));
    }

    #[test]
    fn test_required_fields_checked_before_prices() {
        let mut draft = valid();
        draft.address.clear();
        draft.min_price = 0.0;
        assert_eq!(draft.validate(), Err(ValidationError::Required("địa chỉ")));
    }
}
