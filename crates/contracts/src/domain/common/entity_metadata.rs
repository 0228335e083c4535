use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-owned lifecycle timestamps of a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Set by the server on `create`
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Set by the server on every `update`
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    /// Latest known modification time
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}
