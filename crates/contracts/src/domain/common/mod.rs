//! Common types and traits shared by every entity

pub mod entity_metadata;
pub mod image_link;
pub mod image_set;
pub mod payload;
pub mod resource;
pub mod slug;

// Re-exports
pub use entity_metadata::EntityMetadata;
pub use image_link::{DraftImage, ImageLink};
pub use image_set::{ImageDiff, ImageReorder, ImageSet};
pub use payload::{CreatePayload, UpdatePayload};
pub use resource::{require, require_selected, Editable, Illustrated, Publishable, Resource, Validate};
pub use slug::slugify;

/// Server-assigned numeric identifier of every entity
pub type EntityId = i64;
