//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::Serialize;

/// Get the base URL for API requests
///
/// `PREVIEW_API_BASE` set at build time wins (e.g. `https://api.example.com`).
/// Otherwise the URL is built from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("PREVIEW_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/u601/generate-preview");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// POST JSON and return the raw response body
///
/// The HTTP status is not checked: failures come as 4xx/5xx with a JSON
/// envelope that the caller decodes.
/// `Err` means no usable response arrived (network error, CORS, unreadable body).
pub async fn post_json<T: Serialize>(path: &str, payload: &T) -> Result<String, String> {
    let response = Request::post(&api_url(path))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    log::debug!("POST {} -> HTTP {} ({} bytes)", path, status, body.len());
    Ok(body)
}
