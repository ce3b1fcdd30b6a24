use crate::modules::bootstrap::core::endpoint::PRODUCTION_API_ENDPOINT;
use crate::modules::bootstrap::core::flags::Flags;
use crate::shared::infrastructure::config::ConfigKey;
use crate::shared::infrastructure::config::in_memory::InMemoryConfig;
use rstest::fixture;

pub const NOW: i64 = 1_700_000_000_000;

/// Config with every key set to a valid value.
#[fixture]
pub fn full_config() -> InMemoryConfig {
    InMemoryConfig::new()
        .with(ConfigKey::ApiAuth, "secret-token")
        .with(ConfigKey::ApiWorkspaceId, "123")
        .with(ConfigKey::Timezone, "Europe/Amsterdam")
}

/// Flags as `full_config` builds them on localhost at `NOW`.
pub fn make_flags() -> Flags {
    Flags::new(
        PRODUCTION_API_ENDPOINT,
        Some("secret-token".to_string()),
        Some(123),
        Some("Europe/Amsterdam".to_string()),
        NOW,
    )
}
