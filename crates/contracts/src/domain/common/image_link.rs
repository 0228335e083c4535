use super::EntityId;
use serde::{Deserialize, Serialize};

/// Image attached to an entity, as returned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageLink {
    /// Id of the entity ↔ media link row
    pub link_id: EntityId,
    /// Id of the media library item
    pub media_id: EntityId,
    pub url: String,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub position: u32,
    pub is_cover: bool,
}

/// Image inside a form draft.
///
/// `link_id == None` means the image is not attached on the server yet.
/// `media_id == None` means it is referenced by URL only and has no media
/// library record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<EntityId>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub is_cover: bool,
}

impl DraftImage {
    /// New URL-only image
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Existing media library item, not yet linked to this entity
    pub fn from_media(media_id: EntityId, url: impl Into<String>, alt_text: Option<String>) -> Self {
        Self {
            media_id: Some(media_id),
            url: url.into(),
            alt_text,
            ..Default::default()
        }
    }

    pub fn with_cover(mut self, is_cover: bool) -> Self {
        self.is_cover = is_cover;
        self
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    pub fn is_linked(&self) -> bool {
        self.link_id.is_some()
    }
}

impl From<&ImageLink> for DraftImage {
    fn from(link: &ImageLink) -> Self {
        Self {
            link_id: Some(link.link_id),
            media_id: Some(link.media_id),
            url: link.url.clone(),
            alt_text: link.alt_text.clone(),
            caption: link.caption.clone(),
            position: link.position,
            is_cover: link.is_cover,
        }
    }
}
