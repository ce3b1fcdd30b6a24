// Flags handed to the application component at start-up.
//
// Purpose
// - Hold the configuration record built once per page load.
// - Parse the workspace id without ever failing.
//
// Boundaries
// - No input or output here. The build_flags use case gathers the inputs.

use serde::Serialize;

/// Immutable start-up configuration. Serialized with the camelCase keys the
/// component expects; absent optional strings are left out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    api_endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_auth: Option<String>,
    api_workspace_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
    time: i64,
}

impl Flags {
    pub fn new(
        api_endpoint: impl Into<String>,
        api_auth: Option<String>,
        api_workspace_id: Option<i64>,
        timezone: Option<String>,
        time: i64,
    ) -> Self {
        Self { api_endpoint: api_endpoint.into(), api_auth, api_workspace_id, timezone, time }
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn api_auth(&self) -> Option<&str> {
        self.api_auth.as_deref()
    }

    /// `None` is the non-numeric sentinel: unset or unparseable.
    pub fn api_workspace_id(&self) -> Option<i64> {
        self.api_workspace_id
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Epoch milliseconds captured when the flags were built.
    pub fn time(&self) -> i64 {
        self.time
    }
}

/// Integer-prefix parse of the workspace id.
///
/// Skips leading whitespace and byte order marks, accepts one sign and an
/// optional `0x` prefix, then consumes the longest run of digits. Anything
/// else, including an absent value or an overflow, yields `None`.
pub fn parse_workspace_id(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let magnitude = i64::from_str_radix(&s[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
