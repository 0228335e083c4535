use crate::domain::common::{
    require, require_selected, Editable, EntityId, EntityMetadata, Illustrated, ImageLink,
    Publishable, Resource, Validate,
};
use crate::shared::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Packaged trip sold by a partner operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tour {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub itinerary: String,
    pub duration_days: u32,
    pub price: f64,
    pub departure_point: String,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
    pub images: Vec<ImageLink>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Resource for Tour {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "tours"
    }

    fn element_name() -> &'static str {
        "Tour"
    }

    fn list_name() -> &'static str {
        "Tour du lịch"
    }
}

impl Illustrated for Tour {
    fn images(&self) -> &[ImageLink] {
        &self.images
    }
}

impl Publishable for Tour {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn category_id(&self) -> Option<EntityId> {
        self.category_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub itinerary: String,
    pub duration_days: u32,
    pub price: f64,
    pub departure_point: String,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
}

impl Validate for TourDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "tên tour")?;
        require(&self.slug, "slug")?;
        require(&self.summary, "mô tả ngắn")?;
        require(&self.departure_point, "điểm khởi hành")?;
        require_selected(&self.category_id, "danh mục")?;

        if self.duration_days == 0 {
            return Err(ValidationError::Duration);
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        Ok(())
    }
}

impl Editable for Tour {
    type Draft = TourDraft;

    fn to_draft(&self) -> TourDraft {
        TourDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            itinerary: self.itinerary.clone(),
            duration_days: self.duration_days,
            price: self.price,
            departure_point: self.departure_point.clone(),
            category_id: self.category_id,
            is_published: self.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TourDraft {
        TourDraft {
            name: "Hà Giang 3 ngày 2 đêm".into(),
            slug: "ha-giang-3n2d".into(),
            summary: "Cung đường đèo Mã Pí Lèng".into(),
            duration_days: 3,
            price: 2_990_000.0,
            departure_point: "Hà Nội".into(),
            category_id: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_tour() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_zero_duration_blocks() {
        let mut draft = valid();
        draft.duration_days = 0;
        assert_eq!(draft.validate(), Err(ValidationError::Duration));
    }

    #[test]
    fn test_negative_price_blocks_but_free_is_allowed() {
        let mut draft = valid();
        draft.price = -1.0;
        assert_eq!(draft.validate(), Err(ValidationError::NegativePrice));
        draft.price = 0.0;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field_blocks() {
        let cases: [(fn(&mut TourDraft), ValidationError); 5] = [
            (|d| d.name.clear(), ValidationError::Required("tên tour")),
            (|d| d.slug.clear(), ValidationError::Required("slug")),
            (|d| d.summary = "\t".into(), ValidationError::Required("mô tả ngắn")),
            (|d| d.departure_point.clear(), ValidationError::Required("điểm khởi hành")),
            (|d| d.category_id = None, ValidationError::NotSelected("danh mục")),
        ];
        for (clear, expected) in cases {
            let mut draft = valid();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(expected));
        }
    }

    #[test]
    fn test_empty_draft_reports_first_required_field() {
        assert_eq!(TourDraft::default().validate(), Err(ValidationError::Required("tên tour")));
    }
}
