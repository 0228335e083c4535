use crate::domain::common::{require, EntityId, EntityMetadata, Editable, Resource, Validate};
use crate::shared::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Content type a category groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Place,
    Event,
    Tour,
    Accommodation,
    Restaurant,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::Place,
        CategoryKind::Event,
        CategoryKind::Tour,
        CategoryKind::Accommodation,
        CategoryKind::Restaurant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Place => "place",
            CategoryKind::Event => "event",
            CategoryKind::Tour => "tour",
            CategoryKind::Accommodation => "accommodation",
            CategoryKind::Restaurant => "restaurant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Place => "Địa điểm",
            CategoryKind::Event => "Sự kiện",
            CategoryKind::Tour => "Tour",
            CategoryKind::Accommodation => "Lưu trú",
            CategoryKind::Restaurant => "Nhà hàng",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

// ============================================================================
// Entity
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub kind: Option<CategoryKind>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Category {
    /// Categories usable for a given content type; untyped ones fit everywhere
    pub fn fits(&self, kind: CategoryKind) -> bool {
        self.kind.map(|k| k == kind).unwrap_or(true)
    }
}

impl Resource for Category {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Danh mục"
    }

    fn list_name() -> &'static str {
        "Danh mục"
    }

    // Categories are read without the `/get` segment
    fn get_path(id: EntityId) -> String {
        format!("/categories/{}", id)
    }
}

/// Look up a category name by id, "—" when unknown
pub fn category_name(categories: &[Category], id: Option<EntityId>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "—".to_string())
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub kind: Option<CategoryKind>,
}

impl Validate for CategoryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "tên danh mục")?;
        require(&self.slug, "slug")?;
        Ok(())
    }
}

impl Editable for Category {
    type Draft = CategoryDraft;

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_record_decodes() {
        let c: Category = serde_json::from_value(json!({ "id": 1, "name": "Beach" })).unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "Beach");
        assert!(c.kind.is_none());
        assert!(c.fits(CategoryKind::Tour));
    }

    #[test]
    fn test_paths() {
        assert_eq!(Category::list_path(), "/categories/list");
        assert_eq!(Category::get_path(3), "/categories/3");
        assert_eq!(Category::create_path(), "/categories/create");
        assert_eq!(Category::update_path(3), "/categories/update/3");
        assert_eq!(Category::delete_path(3), "/categories/delete/3");
    }

    #[test]
    fn test_required_fields() {
        let mut draft = CategoryDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::Required("tên danh mục")));
        draft.name = "Biển".into();
        assert_eq!(draft.validate(), Err(ValidationError::Required("slug")));
        draft.slug = "bien".into();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field_blocks() {
        let valid = CategoryDraft {
            name: "Biển đảo".into(),
            slug: "bien-dao".into(),
            ..Default::default()
        };
        assert_eq!(valid.validate(), Ok(()));

        let mut draft = valid.clone();
        draft.name = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::Required("tên danh mục")));

        let mut draft = valid;
        draft.slug.clear();
        assert_eq!(draft.validate(), Err(ValidationError::Required("slug")));
    }

    #[test]
    fn test_category_name_lookup() {
        let categories = vec![Category {
            id: 2,
            name: "Núi".into(),
            ..Default::default()
        }];
        assert_eq!(category_name(&categories, Some(2)), "Núi");
        assert_eq!(category_name(&categories, Some(9)), "—");
        assert_eq!(category_name(&categories, None), "—");
    }
}
