use crate::domain::common::{
    require, require_selected, Editable, EntityId, EntityMetadata, Illustrated, ImageLink,
    Publishable, Resource, Validate,
};
use crate::shared::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Sight, landmark or area promoted on the site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Place {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
    pub images: Vec<ImageLink>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Resource for Place {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "places"
    }

    fn element_name() -> &'static str {
        "Địa điểm"
    }

    fn list_name() -> &'static str {
        "Địa điểm du lịch"
    }
}

impl Illustrated for Place {
    fn images(&self) -> &[ImageLink] {
        &self.images
    }
}

impl Publishable for Place {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn category_id(&self) -> Option<EntityId> {
        self.category_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDraft {
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
}

impl Validate for PlaceDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "tên địa điểm")?;
        require(&self.slug, "slug")?;
        require(&self.summary, "mô tả ngắn")?;
        require(&self.address, "địa chỉ")?;
        require_selected(&self.category_id, "danh mục")?;

        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::Coordinates);
            }
        }
        if let Some(lng) = self.longitude {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(ValidationError::Coordinates);
            }
        }
        Ok(())
    }
}

impl Editable for Place {
    type Draft = PlaceDraft;

    fn to_draft(&self) -> PlaceDraft {
        PlaceDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            category_id: self.category_id,
            is_published: self.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PlaceDraft {
        PlaceDraft {
            name: "Phố cổ Hội An".into(),
            slug: "pho-co-hoi-an".into(),
            summary: "Di sản văn hóa thế giới".into(),
            content: String::new(),
            address: "Hội An, Quảng Nam".into(),
            latitude: Some(15.88),
            longitude: Some(108.33),
            category_id: Some(1),
            is_published: true,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    fn with(mutate: impl FnOnce(&mut PlaceDraft)) -> PlaceDraft {
        let mut draft = valid();
        mutate(&mut draft);
        draft
    }

    #[test]
    fn test_each_required_field_blocks() {
        assert_eq!(
            with(|d| d.name.clear()).validate(),
            Err(ValidationError::Required("tên địa điểm"))
        );
        assert_eq!(
            with(|d| d.slug = "  ".into()).validate(),
            Err(ValidationError::Required("slug"))
        );
        assert_eq!(
            with(|d| d.summary.clear()).validate(),
            Err(ValidationError::Required("mô tả ngắn"))
        );
        assert_eq!(
            with(|d| d.address.clear()).validate(),
            Err(ValidationError::Required("địa chỉ"))
        );
        assert_eq!(
            with(|d| d.category_id = None).validate(),
            Err(ValidationError::NotSelected("danh mục"))
        );
    }

    #[test]
    fn test_coordinates_range() {
        let mut draft = valid();
        draft.latitude = Some(91.0);
        assert_eq!(draft.validate(), Err(ValidationError::Coordinates));
    }

    #[test]
    fn test_paths_use_get_segment() {
        assert_eq!(Place::get_path(5), "/places/get/5");
        assert_eq!(Place::list_path(), "/places/list");
    }

    #[test]
    fn test_round_trip_to_draft() {
        let place = Place {
            id: 4,
            name: "Vịnh Hạ Long".into(),
            category_id: Some(2),
            is_published: true,
            ..Default::default()
        };
        let draft = place.to_draft();
        assert_eq!(draft.name, "Vịnh Hạ Long");
        assert_eq!(draft.category_id, Some(2));
        assert!(draft.is_published);
    }
}
