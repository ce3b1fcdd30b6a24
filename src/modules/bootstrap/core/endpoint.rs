// Endpoint resolution.
//
// Local development talks to the production API directly; every other host is
// expected to reverse-proxy `/api/` to it.

use regex::Regex;
use std::sync::LazyLock;

pub const PRODUCTION_API_ENDPOINT: &str = "https://api.track.toggl.com/api/v9/";
pub const PROXIED_API_ENDPOINT: &str = "/api/";

// Unanchored on purpose: `localhost.lan` counts as local.
static LOOPBACK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)localhost|127\.0\.0\.1|::1").expect("LOOPBACK_REGEX should compile - this is a bug")
});

pub fn is_loopback(hostname: &str) -> bool {
    LOOPBACK_REGEX.is_match(hostname)
}

/// Base URL of the backend API for the page served from `hostname`.
pub fn resolve_api_endpoint(hostname: &str) -> &'static str {
    if is_loopback(hostname) {
        PRODUCTION_API_ENDPOINT
    } else {
        PROXIED_API_ENDPOINT
    }
}
