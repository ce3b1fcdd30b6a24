// Favicon signals and the pure href transition.
//
// The icon state is never tracked: it is read back from the marker substring
// in the current href on every message.

use serde::Deserialize;

pub const RUNNING_MARKER: &str = "favicon-run";
pub const STOPPED_MARKER: &str = "favicon-stop";

/// Message emitted by the application component on its favicon channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FaviconSignal {
    Running,
    Stopped,
    Other(String),
}

impl From<&str> for FaviconSignal {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for FaviconSignal {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Running" => FaviconSignal::Running,
            "Stopped" => FaviconSignal::Stopped,
            _ => FaviconSignal::Other(value),
        }
    }
}

/// What the icon currently shows, inferred from its href.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    ShowsRunning,
    ShowsStopped,
    Unrecognized,
}

impl IconState {
    pub fn from_href(href: &str) -> Self {
        if href.contains(STOPPED_MARKER) {
            IconState::ShowsStopped
        } else if href.contains(RUNNING_MARKER) {
            IconState::ShowsRunning
        } else {
            IconState::Unrecognized
        }
    }
}

/// Result of presenting one signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaviconOutcome {
    Updated { from: String, to: String },
    Unchanged,
    Ignored,
    ElementMissing,
}

/// The href the icon should have after `signal`, or `None` when nothing changes.
/// Only the first marker occurrence is swapped.
pub fn next_icon_href(current: &str, signal: &FaviconSignal) -> Option<String> {
    let (from, to) = match signal {
        FaviconSignal::Running => (STOPPED_MARKER, RUNNING_MARKER),
        FaviconSignal::Stopped => (RUNNING_MARKER, STOPPED_MARKER),
        FaviconSignal::Other(_) => return None,
    };
    current.contains(from).then(|| current.replacen(from, to, 1))
}
