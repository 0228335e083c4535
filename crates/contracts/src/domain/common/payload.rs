use super::{DraftImage, ImageDiff, ImageSet};
use serde::Serialize;

/// Body of a `create` call for an image-bearing entity
#[derive(Debug, Serialize)]
pub struct CreatePayload<'a, D: Serialize> {
    #[serde(flatten)]
    pub fields: &'a D,
    pub images: Vec<DraftImage>,
}

impl<'a, D: Serialize> CreatePayload<'a, D> {
    pub fn new(fields: &'a D, images: &ImageSet) -> Self {
        Self {
            fields,
            images: images.as_slice().to_vec(),
        }
    }
}

/// Body of an `update` call: the draft's fields plus the image diff
#[derive(Debug, Serialize)]
pub struct UpdatePayload<'a, D: Serialize> {
    #[serde(flatten)]
    pub fields: &'a D,
    #[serde(flatten)]
    pub images: ImageDiff,
}

impl<'a, D: Serialize> UpdatePayload<'a, D> {
    pub fn new(fields: &'a D, images: ImageDiff) -> Self {
        Self { fields, images }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ImageLink;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Fields {
        name: String,
        category_id: i64,
    }

    #[test]
    fn test_update_payload_flattens_fields_and_diff() {
        let fields = Fields {
            name: "Bãi Sao".into(),
            category_id: 3,
        };
        let original = vec![ImageLink {
            link_id: 5,
            media_id: 50,
            url: "a.jpg".into(),
            ..Default::default()
        }];
        let images = ImageSet::new();

        let value = serde_json::to_value(UpdatePayload::new(&fields, images.diff(&original))).unwrap();
        assert_eq!(value["name"], json!("Bãi Sao"));
        assert_eq!(value["categoryId"], json!(3));
        assert_eq!(value["removeLinkIds"], json!([5]));
        assert!(value.get("coverImageId").is_none());
    }

    #[test]
    fn test_create_payload_carries_images() {
        let fields = Fields {
            name: "Chùa Một Cột".into(),
            category_id: 1,
        };
        let mut images = ImageSet::new();
        images.add(DraftImage::from_url("cover.jpg").with_cover(true));

        let value = serde_json::to_value(CreatePayload::new(&fields, &images)).unwrap();
        assert_eq!(value["images"][0]["url"], json!("cover.jpg"));
        assert_eq!(value["images"][0]["isCover"], json!(true));
        assert!(value["images"][0].get("linkId").is_none());
    }
}
