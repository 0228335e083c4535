//! Thin wrapper over `gloo-net` that speaks the API envelope.
//!
//! Every call goes to `api_base() + path`, decodes `ApiEnvelope<T>` and maps
//! failures to `ApiError`. Failures are also handed to the interceptor, which
//! logs them and raises an error toast, so callers only decide what to do with
//! the `Err` value.

use crate::shared::api_utils::api_url;
use crate::shared::toast::{ToastLevel, ToastService};
use contracts::shared::envelope::{ApiEnvelope, Page};
use contracts::shared::error::ApiError;
use contracts::shared::list_query::ListQuery;
use gloo_net::http::{Request, RequestBuilder, Response};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;

static INTERCEPTOR: OnceCell<ToastService> = OnceCell::new();

/// Route API failures to the toast queue. Called once from `start()`;
/// later calls are ignored.
pub fn install_interceptor(toasts: ToastService) {
    if INTERCEPTOR.set(toasts).is_err() {
        log::warn!("HTTP interceptor already installed");
    }
}

fn intercept<T>(method: &str, path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        log::error!("{} {} failed: {}", method, path, err);
        if let Some(toasts) = INTERCEPTOR.get() {
            // Lost connectivity stays on screen until dismissed
            let sticky = matches!(err, ApiError::Network(_));
            toasts.push(ToastLevel::Error, err.to_string(), sticky);
        }
    }
    result
}

// ============================================================================
// Request helpers
// ============================================================================

/// `path?query`, or bare `path` when no key is set
pub fn with_query(path: &str, query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("Query for {} not encoded: {}", path, e);
            path.to_string()
        }
    }
}

/// Decode a response body into an envelope.
///
/// Non-2xx statuses become `NotFound`/`Http` with the server's `message` when
/// the body carries one. An empty 2xx body is a success without data.
pub fn parse_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .map(|envelope| envelope.message);
        return Err(ApiError::from_status(status, message, status_text));
    }

    if body.trim().is_empty() {
        return Ok(ApiEnvelope {
            code: 0,
            message: String::new(),
            data: None,
            total: None,
            page: None,
            page_size: None,
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_response(status, &status_text, &body)
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<ApiEnvelope<T>, ApiError> {
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<ApiEnvelope<T>, ApiError> {
    let request: Request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

// ============================================================================
// Public API
// ============================================================================

/// Reachability probe for the status bar. Bypasses the interceptor: an
/// offline API is reported by the status bar, not by a toast.
pub async fn ping(path: &str) -> bool {
    match Request::get(&api_url(path)).header("Accept", "application/json").send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

/// GET returning the checked envelope
pub async fn get_envelope<T: DeserializeOwned>(
    path: &str,
    query: Option<&ListQuery>,
) -> Result<ApiEnvelope<T>, ApiError> {
    let path = match query {
        Some(query) => with_query(path, query),
        None => path.to_string(),
    };
    let result = async {
        send::<T>(Request::get(&api_url(&path)))
            .await?
            .check()
    }
    .await;
    intercept("GET", &path, result)
}

/// GET returning `data`; a success without `data` is `MissingData`
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let result = async { send::<T>(Request::get(&api_url(path))).await?.into_data() }.await;
    intercept("GET", path, result)
}

/// GET of a list endpoint
pub async fn get_page<T: DeserializeOwned>(path: &str, query: &ListQuery) -> Result<Page<T>, ApiError> {
    let path = with_query(path, query);
    let result = async {
        send::<Vec<T>>(Request::get(&api_url(&path)))
            .await?
            .into_page()
    }
    .await;
    intercept("GET", &path, result)
}

/// POST with a JSON body; returns `data` when the server sends one
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<Option<T>, ApiError> {
    let result = async {
        send_json::<T, B>(Request::post(&api_url(path)), body)
            .await?
            .check()
            .map(|envelope| envelope.data)
    }
    .await;
    intercept("POST", path, result)
}

/// PUT with a JSON body; returns `data` when the server sends one
pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<Option<T>, ApiError> {
    let result = async {
        send_json::<T, B>(Request::put(&api_url(path)), body)
            .await?
            .check()
            .map(|envelope| envelope.data)
    }
    .await;
    intercept("PUT", path, result)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let result = async {
        send::<serde_json::Value>(Request::delete(&api_url(path)))
            .await?
            .check()
            .map(|_| ())
    }
    .await;
    intercept("DELETE", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_with_query_omits_absent_keys() {
        assert_eq!(with_query("/places/list", &ListQuery::new()), "/places/list");

        let query = ListQuery::paged(2, 20).published(true);
        let url = with_query("/events/list", &query);
        assert!(url.starts_with("/events/list?"));
        assert!(url.contains("page=2"));
        assert!(url.contains("pageSize=20"));
        assert!(url.contains("isPublished=true"));
        assert!(!url.contains("categoryId"));
        assert!(!url.contains("search"));
    }

    #[test]
    fn test_parse_success_envelope() {
        let envelope: ApiEnvelope<Vec<Row>> =
            parse_response(200, "OK", r#"{"code":0,"message":"ok","data":[{"id":1}],"total":5}"#).unwrap();
        let page = envelope.into_page().unwrap();
        assert_eq!(page.data, vec![Row { id: 1 }]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_parse_not_found() {
        let err = parse_response::<Row>(404, "Not Found", "").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_http_error_prefers_server_message() {
        let err = parse_response::<Row>(500, "Internal Server Error", r#"{"code":500,"message":"DB down"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "DB down".to_string()
            }
        );

        let err = parse_response::<Row>(502, "Bad Gateway", "<html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_parse_envelope_failure_code() {
        let envelope: ApiEnvelope<Row> =
            parse_response(200, "OK", r#"{"code":409,"message":"Slug đã tồn tại"}"#).unwrap();
        assert!(matches!(envelope.check(), Err(ApiError::Api { code: 409, .. })));
    }

    #[test]
    fn test_parse_empty_body_is_success() {
        let envelope: ApiEnvelope<serde_json::Value> = parse_response(204, "No Content", "").unwrap();
        assert!(envelope.is_success());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_parse_garbage_is_decode_error() {
        let err = parse_response::<Row>(200, "OK", "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
