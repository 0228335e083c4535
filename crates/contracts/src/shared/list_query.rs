use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Options of a `list` call.
///
/// Every present key is sent as-is, absent keys are omitted; nothing is
/// defaulted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paged(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn category(mut self, category_id: Option<EntityId>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn place(mut self, place_id: Option<EntityId>) -> Self {
        self.place_id = place_id;
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    /// Search text as typed; a blank string means "no search"
    pub fn search(mut self, text: &str) -> Self {
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_keys_are_omitted() {
        let value = serde_json::to_value(ListQuery::paged(1, 20)).unwrap();
        assert_eq!(value, json!({ "page": 1, "pageSize": 20 }));
    }

    #[test]
    fn test_present_keys_use_api_names() {
        let query = ListQuery::paged(2, 9)
            .category(Some(4))
            .place(Some(8))
            .published(true)
            .search("hội an");
        let value = serde_json::to_value(query).unwrap();
        assert_eq!(
            value,
            json!({
                "page": 2,
                "pageSize": 9,
                "categoryId": 4,
                "placeId": 8,
                "isPublished": true,
                "search": "hội an"
            })
        );
    }

    #[test]
    fn test_blank_search_is_dropped() {
        assert_eq!(ListQuery::new().search("   ").search, None);
    }
}
