use super::error::ApiError;
use serde::{Deserialize, Serialize};

/// Uniform wrapper returned by every API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl<T> ApiEnvelope<T> {
    /// Servers answer either `0` or an HTTP-like `2xx` code on success
    pub fn is_success(&self) -> bool {
        self.code == 0 || (200..300).contains(&self.code)
    }

    /// Turn a failure code into an error, keep the envelope otherwise
    pub fn check(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Api {
                code: self.code,
                message: self.message,
            })
        }
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.check()?.data.ok_or(ApiError::MissingData)
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// List envelope → page; a missing `data` is an empty page and a missing
    /// `total` falls back to the number of returned rows
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        let envelope = self.check()?;
        let data = envelope.data.unwrap_or_default();
        let total = envelope.total.unwrap_or(data.len() as u64);
        Ok(Page { data, total })
    }
}

/// One page of a list call
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_list_envelope_with_total() {
        let raw = json!({
            "code": 200,
            "message": "OK",
            "data": [{ "id": 1, "name": "Beach" }],
            "total": 1,
            "page": 1,
            "pageSize": 20
        });
        let env: ApiEnvelope<Vec<Row>> = serde_json::from_value(raw).unwrap();
        assert_eq!(env.page_size, Some(20));

        let page = env.into_page().unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "Beach");
    }

    #[test]
    fn test_list_envelope_without_total_counts_rows() {
        let raw = json!({ "code": 0, "message": "", "data": [
            { "id": 1, "name": "a" }, { "id": 2, "name": "b" }
        ]});
        let env: ApiEnvelope<Vec<Row>> = serde_json::from_value(raw).unwrap();
        assert_eq!(env.into_page().unwrap().total, 2);
    }

    #[test]
    fn test_failure_code_becomes_api_error() {
        let raw = json!({ "code": 400, "message": "Tên đã tồn tại", "data": null });
        let env: ApiEnvelope<Row> = serde_json::from_value(raw).unwrap();
        assert_eq!(
            env.into_data(),
            Err(ApiError::Api {
                code: 400,
                message: "Tên đã tồn tại".into()
            })
        );
    }

    #[test]
    fn test_missing_data_on_detail() {
        let raw = json!({ "code": 200, "message": "OK" });
        let env: ApiEnvelope<Row> = serde_json::from_value(raw).unwrap();
        assert_eq!(env.into_data(), Err(ApiError::MissingData));
    }
}
