use super::{DraftImage, EntityId, ImageLink};
use serde::{Deserialize, Serialize};

/// Ordered image collection of a form draft.
///
/// Keeps at most one entry flagged as cover: every operation that sets a
/// cover clears the flag on all other entries first. Positions are 0-based and
/// renumbered after every structural change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSet(Vec<DraftImage>);

impl ImageSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Hydrate from the links of a server record.
    ///
    /// Links are ordered by position and renumbered; if the server returned
    /// several covers only the first one keeps the flag.
    pub fn from_links(links: &[ImageLink]) -> Self {
        let mut sorted: Vec<&ImageLink> = links.iter().collect();
        sorted.sort_by_key(|link| link.position);

        let mut set = Self(sorted.into_iter().map(DraftImage::from).collect());
        if let Some(first_cover) = set.0.iter().position(|img| img.is_cover) {
            set.set_cover(first_cover);
        }
        set.renumber();
        set
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DraftImage] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraftImage> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<DraftImage> {
        self.0
    }

    /// Append an image. A cover image takes the flag from every other entry.
    pub fn add(&mut self, mut image: DraftImage) {
        if image.is_cover {
            self.clear_cover();
        }
        image.position = self.0.len() as u32;
        self.0.push(image);
    }

    /// Remove the image at `index`; out-of-range indexes are ignored
    pub fn remove(&mut self, index: usize) -> Option<DraftImage> {
        if index >= self.0.len() {
            return None;
        }
        let removed = self.0.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Flag the image at `index` as the only cover
    pub fn set_cover(&mut self, index: usize) {
        if index >= self.0.len() {
            return;
        }
        for (i, img) in self.0.iter_mut().enumerate() {
            img.is_cover = i == index;
        }
    }

    pub fn clear_cover(&mut self) {
        for img in self.0.iter_mut() {
            img.is_cover = false;
        }
    }

    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.0.len() {
            return;
        }
        self.0.swap(index - 1, index);
        self.renumber();
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 >= self.0.len() {
            return;
        }
        self.0.swap(index, index + 1);
        self.renumber();
    }

    pub fn update_caption(&mut self, index: usize, caption: Option<String>) {
        if let Some(img) = self.0.get_mut(index) {
            img.caption = caption;
        }
    }

    pub fn cover(&self) -> Option<&DraftImage> {
        self.0.iter().find(|img| img.is_cover)
    }

    pub fn cover_count(&self) -> usize {
        self.0.iter().filter(|img| img.is_cover).count()
    }

    /// Whether a media library item is already in the collection
    pub fn contains_media(&self, media_id: EntityId) -> bool {
        self.0.iter().any(|img| img.media_id == Some(media_id))
    }

    fn renumber(&mut self) {
        for (i, img) in self.0.iter_mut().enumerate() {
            img.position = i as u32;
        }
    }

    /// Differential update against the links the record had when the form
    /// was opened.
    pub fn diff(&self, original: &[ImageLink]) -> ImageDiff {
        let mut diff = ImageDiff::default();

        for img in &self.0 {
            match (img.link_id, img.media_id) {
                (Some(link_id), _) => {
                    let moved = original
                        .iter()
                        .find(|link| link.link_id == link_id)
                        .map(|link| link.position != img.position)
                        .unwrap_or(false);
                    if moved {
                        diff.reorders.push(ImageReorder {
                            image_link_id: link_id,
                            position: img.position,
                        });
                    }
                }
                (None, Some(media_id)) => diff.attach_media_ids.push(media_id),
                (None, None) => diff.add_images.push(img.clone()),
            }
        }

        diff.remove_link_ids = original
            .iter()
            .filter(|link| !self.0.iter().any(|img| img.link_id == Some(link.link_id)))
            .map(|link| link.link_id)
            .collect();

        diff.cover_image_id = self.cover().and_then(|img| img.media_id);
        diff
    }
}

/// New position of an already linked image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReorder {
    pub image_link_id: EntityId,
    pub position: u32,
}

/// Image part of an update payload; the server applies it as a diff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDiff {
    pub add_images: Vec<DraftImage>,
    pub attach_media_ids: Vec<EntityId>,
    pub remove_link_ids: Vec<EntityId>,
    pub reorders: Vec<ImageReorder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_id: Option<EntityId>,
}

impl ImageDiff {
    pub fn is_empty(&self) -> bool {
        self.add_images.is_empty()
            && self.attach_media_ids.is_empty()
            && self.remove_link_ids.is_empty()
            && self.reorders.is_empty()
            && self.cover_image_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(link_id: EntityId, media_id: EntityId, position: u32, is_cover: bool) -> ImageLink {
        ImageLink {
            link_id,
            media_id,
            url: format!("https://cdn.example/{}.jpg", media_id),
            alt_text: None,
            caption: None,
            position,
            is_cover,
        }
    }

    #[test]
    fn test_add_cover_clears_previous_covers() {
        let mut set = ImageSet::new();
        set.add(DraftImage::from_url("a.jpg").with_cover(true));
        set.add(DraftImage::from_url("b.jpg"));
        set.add(DraftImage::from_url("c.jpg").with_cover(true));

        assert_eq!(set.cover_count(), 1);
        assert_eq!(set.cover().map(|img| img.url.as_str()), Some("c.jpg"));
        assert!(!set.as_slice()[0].is_cover);
    }

    #[test]
    fn test_add_assigns_positions() {
        let mut set = ImageSet::new();
        set.add(DraftImage::from_url("a.jpg"));
        set.add(DraftImage::from_url("b.jpg"));
        let positions: Vec<u32> = set.iter().map(|img| img.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn test_set_cover_on_empty_is_noop() {
        let mut set = ImageSet::new();
        set.set_cover(0);
        assert!(set.is_empty());
        assert_eq!(set.cover_count(), 0);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut set = ImageSet::new();
        for url in ["a.jpg", "b.jpg", "c.jpg"] {
            set.add(DraftImage::from_url(url));
        }
        let removed = set.remove(0);
        assert_eq!(removed.map(|img| img.url), Some("a.jpg".to_string()));
        let positions: Vec<u32> = set.iter().map(|img| img.position).collect();
        assert_eq!(positions, vec![0, 1]);
        assert!(set.remove(10).is_none());
    }

    #[test]
    fn test_cover_invariant_holds_over_operation_sequence() {
        let mut set = ImageSet::new();
        let ops: [(u8, usize); 14] = [
            (0, 1),
            (0, 0),
            (0, 1),
            (2, 0),
            (0, 1),
            (3, 2),
            (1, 0),
            (2, 2),
            (4, 0),
            (0, 1),
            (1, 1),
            (2, 5),
            (3, 0),
            (1, 0),
        ];
        for (i, (op, arg)) in ops.iter().enumerate() {
            match op {
                0 => set.add(DraftImage::from_url(format!("{}.jpg", i)).with_cover(*arg == 1)),
                1 => {
                    set.remove(*arg);
                }
                2 => set.set_cover(*arg),
                3 => set.move_down(*arg),
                _ => set.move_up(*arg),
            }
            assert!(set.cover_count() <= 1, "after op #{}", i);
            for (pos, img) in set.iter().enumerate() {
                assert_eq!(img.position as usize, pos);
            }
        }
    }

    #[test]
    fn test_from_links_sorts_and_keeps_first_cover() {
        let links = vec![link(11, 101, 2, true), link(10, 100, 1, true), link(12, 102, 3, false)];
        let set = ImageSet::from_links(&links);

        let ids: Vec<Option<EntityId>> = set.iter().map(|img| img.link_id).collect();
        assert_eq!(ids, vec![Some(10), Some(11), Some(12)]);
        assert_eq!(set.cover_count(), 1);
        assert_eq!(set.cover().and_then(|img| img.link_id), Some(10));
    }

    #[test]
    fn test_diff_unchanged_is_empty_apart_from_cover() {
        let links = vec![link(10, 100, 0, true), link(11, 101, 1, false)];
        let set = ImageSet::from_links(&links);
        let diff = set.diff(&links);

        assert!(diff.add_images.is_empty());
        assert!(diff.attach_media_ids.is_empty());
        assert!(diff.remove_link_ids.is_empty());
        assert!(diff.reorders.is_empty());
        assert_eq!(diff.cover_image_id, Some(100));
    }

    #[test]
    fn test_diff_collects_every_kind_of_change() {
        let links = vec![link(10, 100, 0, true), link(11, 101, 1, false), link(12, 102, 2, false)];
        let mut set = ImageSet::from_links(&links);

        set.remove(0);
        set.move_down(0);
        set.add(DraftImage::from_media(200, "lib.jpg", None));
        set.add(DraftImage::from_url("new.jpg").with_cover(true));

        let diff = set.diff(&links);
        assert_eq!(diff.remove_link_ids, vec![10]);
        assert_eq!(diff.attach_media_ids, vec![200]);
        assert_eq!(diff.add_images.len(), 1);
        assert_eq!(diff.add_images[0].url, "new.jpg");
        assert!(diff.add_images[0].is_cover);
        // 11 ends up back at position 1, only 12 moved
        assert_eq!(
            diff.reorders,
            vec![ImageReorder { image_link_id: 12, position: 0 }]
        );
        // URL-only cover has no media id
        assert_eq!(diff.cover_image_id, None);
    }

    #[test]
    fn test_diff_serializes_camel_case() {
        let mut set = ImageSet::new();
        set.add(DraftImage::from_media(7, "x.jpg", None).with_cover(true));
        let json = serde_json::to_value(set.diff(&[])).unwrap();

        assert_eq!(json["attachMediaIds"], serde_json::json!([7]));
        assert_eq!(json["coverImageId"], serde_json::json!(7));
        assert!(json.get("removeLinkIds").is_some());
        assert!(json.get("addImages").is_some());
    }
}
