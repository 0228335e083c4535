use crate::domain::common::{DraftImage, EntityId, EntityMetadata, Resource};
use serde::{Deserialize, Serialize};

/// Media library item. Read-only from the client: the API exposes only
/// `list` and `get` for images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    pub id: EntityId,
    pub url: String,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Media {
    /// Draft image referencing this library item
    pub fn to_draft_image(&self) -> DraftImage {
        DraftImage::from_media(self.id, self.url.clone(), self.alt_text.clone())
            .with_caption(self.caption.clone())
    }

    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}×{}", w, h)),
            _ => None,
        }
    }
}

impl Resource for Media {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.file_name
    }

    fn collection_name() -> &'static str {
        "images"
    }

    fn element_name() -> &'static str {
        "Hình ảnh"
    }

    fn list_name() -> &'static str {
        "Thư viện ảnh"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_draft_image_is_unlinked_library_item() {
        let media = Media {
            id: 42,
            url: "https://cdn.example/42.jpg".into(),
            alt_text: Some("Cầu Rồng".into()),
            ..Default::default()
        };
        let img = media.to_draft_image();
        assert_eq!(img.media_id, Some(42));
        assert_eq!(img.link_id, None);
        assert!(!img.is_cover);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Media::list_path(), "/images/list");
        assert_eq!(Media::get_path(42), "/images/get/42");
    }
}
