use crate::domain::common::{
    require, require_selected, Editable, EntityId, EntityMetadata, Illustrated, ImageLink,
    Publishable, Resource, Validate,
};
use crate::shared::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Festival, exhibition or any dated happening
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub location: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub place_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
    pub images: Vec<ImageLink>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Event {
    /// Not finished yet at `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        match (self.start_time, self.end_time) {
            (_, Some(end)) => end >= now,
            (Some(start), None) => start >= now,
            (None, None) => false,
        }
    }
}

impl Resource for Event {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn collection_name() -> &'static str {
        "events"
    }

    fn element_name() -> &'static str {
        "Sự kiện"
    }

    fn list_name() -> &'static str {
        "Sự kiện & lễ hội"
    }
}

impl Illustrated for Event {
    fn images(&self) -> &[ImageLink] {
        &self.images
    }
}

impl Publishable for Event {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn category_id(&self) -> Option<EntityId> {
        self.category_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub location: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub place_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub is_published: bool,
}

impl Validate for EventDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "tên sự kiện")?;
        require(&self.slug, "slug")?;
        require(&self.summary, "mô tả ngắn")?;
        require(&self.location, "địa điểm tổ chức")?;
        require_selected(&self.category_id, "danh mục")?;

        let start = self.start_time.ok_or(ValidationError::Required("thời gian bắt đầu"))?;
        let end = self.end_time.ok_or(ValidationError::Required("thời gian kết thúc"))?;
        if start >= end {
            return Err(ValidationError::TimeRange);
        }
        Ok(())
    }
}

impl Editable for Event {
    type Draft = EventDraft;

    fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            location: self.location.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            place_id: self.place_id,
            category_id: self.category_id,
            is_published: self.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 12, hour, 0, 0).unwrap()
    }

    fn valid() -> EventDraft {
        EventDraft {
            title: "Lễ hội hoa Đà Lạt".into(),
            slug: "le-hoi-hoa-da-lat".into(),
            summary: "Festival hoa".into(),
            location: "Quảng trường Lâm Viên".into(),
            start_time: Some(at(8)),
            end_time: Some(at(22)),
            category_id: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_event() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_start_after_end_blocks() {
        let mut draft = valid();
        draft.start_time = Some(at(23));
        assert_eq!(draft.validate(), Err(ValidationError::TimeRange));
    }

    #[test]
    fn test_equal_times_block() {
        let mut draft = valid();
        draft.end_time = draft.start_time;
        assert_eq!(draft.validate(), Err(ValidationError::TimeRange));
    }

    #[test]
    fn test_missing_times_are_required() {
        let mut draft = valid();
        draft.start_time = None;
        assert_eq!(draft.validate(), Err(ValidationError::Required("thời gian bắt đầu")));
        let mut draft = valid();
        draft.end_time = None;
        assert_eq!(draft.validate(), Err(ValidationError::Required("thời gian kết thúc")));
    }

    #[test]
    fn test_required_title() {
        let mut draft = valid();
        draft.title = " ".into();
        assert_eq!(draft.validate(), Err(ValidationError::Required("tên sự kiện")));
    }

    #[test]
    fn test_each_required_field_blocks() {
        let cases: [(fn(&mut EventDraft), ValidationError); 7] = [
            (|d| d.title.clear(), ValidationError::Required("tên sự kiện")),
            (|d| d.slug = "  ".into(), ValidationError::Required("slug")),
            (|d| d.summary.clear(), ValidationError::Required("mô tả ngắn")),
            (|d| d.location.clear(), ValidationError::Required("địa điểm tổ chức")),
            (|d| d.category_id = None, ValidationError::NotSelected("danh mục")),
            (|d| d.start_time = None, ValidationError::Required("thời gian bắt đầu")),
            (|d| d.end_time = None, ValidationError::Required("thời gian kết thúc")),
        ];
        for (clear, expected) in cases {
            let mut draft = valid();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(expected));
        }
    }

    #[test]
    fn test_is_upcoming() {
        let event = Event {
            start_time: Some(at(8)),
            end_time: Some(at(22)),
            ..Default::default()
        };
        assert!(event.is_upcoming(at(10)));
        assert!(!event.is_upcoming(at(23)));
        assert!(!Event::default().is_upcoming(at(0)));
    }
}
