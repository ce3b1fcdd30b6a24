// Flag builder.
//
// Responsibilities
// - Resolve the API endpoint for the hostname.
// - Read the credential, workspace id and timezone from the config source.
// - Stamp the record with the current time.
// - Warn about suspicious values, never reject them.

use crate::modules::bootstrap::core::endpoint::resolve_api_endpoint;
use crate::modules::bootstrap::core::flags::{Flags, parse_workspace_id};
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::config::{ConfigKey, ConfigSource};
use chrono_tz::Tz;

pub struct BuildFlagsHandler<'a> {
    config: &'a dyn ConfigSource,
    clock: &'a dyn Clock,
}

impl<'a> BuildFlagsHandler<'a> {
    pub fn new(config: &'a dyn ConfigSource, clock: &'a dyn Clock) -> Self {
        Self { config, clock }
    }

    pub fn handle(&self, hostname: &str) -> Flags {
        let api_endpoint = resolve_api_endpoint(hostname);

        let raw_workspace_id = self.config.get(ConfigKey::ApiWorkspaceId);
        let api_workspace_id = parse_workspace_id(raw_workspace_id.as_deref());
        if api_workspace_id.is_none() {
            tracing::debug!(raw = ?raw_workspace_id, "workspace id unset or not numeric");
        }

        let timezone = self.config.get(ConfigKey::Timezone);
        if let Some(zone) = timezone.as_deref() {
            if zone.parse::<Tz>().is_err() {
                tracing::warn!(timezone = zone, "timezone is not a known IANA zone, passing it through");
            }
        }

        tracing::debug!(hostname, api_endpoint, "built flags");
        Flags::new(
            api_endpoint,
            self.config.get(ConfigKey::ApiAuth),
            api_workspace_id,
            timezone,
            self.clock.now_millis(),
        )
    }
}
