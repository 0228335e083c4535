use super::{EntityId, ImageLink};
use crate::shared::error::ValidationError;
use serde::{de::DeserializeOwned, Serialize};

/// A record type exposed by the REST API under its own collection.
///
/// Instance methods describe a concrete record; the static methods carry the
/// class-level metadata (collection path segment and UI names) used by the
/// HTTP services and the admin screens.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Server-assigned identifier
    fn id(&self) -> EntityId;

    /// Display name (name or title)
    fn title(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Path segment of the collection, e.g. "places"
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Địa điểm"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Danh sách địa điểm"
    fn list_name() -> &'static str;

    // ============================================================================
    // REST paths
    // ============================================================================

    fn list_path() -> String {
        format!("/{}/list", Self::collection_name())
    }

    fn get_path(id: EntityId) -> String {
        format!("/{}/get/{}", Self::collection_name(), id)
    }

    fn create_path() -> String {
        format!("/{}/create", Self::collection_name())
    }

    fn update_path(id: EntityId) -> String {
        format!("/{}/update/{}", Self::collection_name(), id)
    }

    fn delete_path(id: EntityId) -> String {
        format!("/{}/delete/{}", Self::collection_name(), id)
    }
}

/// Client-side validation of a draft before it is sent anywhere
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A resource that can be created and edited through a draft
pub trait Editable: Resource {
    type Draft: Validate + Clone + Default + PartialEq + Serialize + Send + Sync + 'static;

    /// Hydrate a draft from the current server record
    fn to_draft(&self) -> Self::Draft;
}

/// A resource carrying an ordered collection of image links
pub trait Illustrated {
    fn images(&self) -> &[ImageLink];

    /// Image flagged as cover, falling back to the first by position
    fn cover(&self) -> Option<&ImageLink> {
        let images = self.images();
        images
            .iter()
            .find(|img| img.is_cover)
            .or_else(|| images.iter().min_by_key(|img| img.position))
    }

    fn cover_url(&self) -> Option<&str> {
        self.cover().map(|img| img.url.as_str())
    }

    /// Images ordered by position
    fn gallery(&self) -> Vec<&ImageLink> {
        let mut images: Vec<&ImageLink> = self.images().iter().collect();
        images.sort_by_key(|img| img.position);
        images
    }
}

/// A resource with a publish flag and a category
pub trait Publishable {
    fn is_published(&self) -> bool;

    fn category_id(&self) -> Option<EntityId>;
}

/// Trimmed non-empty check shared by every draft
pub fn require(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(())
    }
}

pub fn require_selected<T>(value: &Option<T>, label: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::NotSelected(label)),
    }
}
