//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend base URL baked in at build time, e.g.
/// `BEYOND_TALEEM_API_URL=https://api.beyondtaleem.pk trunk build`.
const CONFIGURED_API_URL: Option<&str> = option_env!("BEYOND_TALEEM_API_URL");

/// Get the base URL for API requests
///
/// Uses `BEYOND_TALEEM_API_URL` when it was set at build time, otherwise
/// the current window location with port 3000 for the backend server.
pub fn api_base() -> String {
    if let Some(url) = CONFIGURED_API_URL.filter(|u| !u.trim().is_empty()) {
        return url.trim_end_matches('/').to_string();
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

/// Build a full API URL from a path and an optional query string.
///
/// ```rust,ignore
/// let url = api_url("/admissions", &request.to_query());
/// ```
pub fn api_url(path: &str, query: &str) -> String {
    join_url(&api_base(), path, query)
}

fn join_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/get-tests", "page=2&limit=10"),
            "http://localhost:3000/get-tests?page=2&limit=10"
        );
        assert_eq!(
            join_url("http://localhost:3000", "/admissions/4", ""),
            "http://localhost:3000/admissions/4"
        );
    }
}
