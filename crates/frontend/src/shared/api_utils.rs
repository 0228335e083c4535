//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise builds it from the current
/// window location and `api.port`. The configured prefix is appended.
///
/// # Returns
/// - API base URL like "http://localhost:8080/api"
/// - Just the prefix if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return join_base(&api.base_url, &api.prefix);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return api.prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    join_base(&format!("{}//{}:{}", protocol, hostname, api.port), &api.prefix)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/places/get/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn join_base(origin: &str, prefix: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        origin.to_string()
    } else {
        format!("{}/{}", origin, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("http://localhost:8080", "/api"), "http://localhost:8080/api");
        assert_eq!(join_base("https://api.example.vn/", "api/"), "https://api.example.vn/api");
        assert_eq!(join_base("https://api.example.vn", ""), "https://api.example.vn");
    }
}
