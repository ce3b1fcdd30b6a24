use crate::shared::infrastructure::location::Location;

/// `window.location.hostname`. An unreadable location reads as an empty
/// hostname, which resolves to the proxied endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowLocation;

impl Location for WindowLocation {
    fn hostname(&self) -> String {
        web_sys::window().and_then(|window| window.location().hostname().ok()).unwrap_or_default()
    }
}
