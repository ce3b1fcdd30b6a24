// Configuration source port.
//
// Purpose
// - Name the configuration values the flags are built from and hide where they
//   come from: compile-time environment for the browser bundle, the process
//   environment for native tools, a map in tests.

pub mod build_time;
pub mod in_memory;
#[cfg(not(target_arch = "wasm32"))]
pub mod process_env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ApiAuth,
    ApiWorkspaceId,
    Timezone,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::ApiAuth, ConfigKey::ApiWorkspaceId, ConfigKey::Timezone];

    pub fn env_name(self) -> &'static str {
        match self {
            ConfigKey::ApiAuth => "APP_API_AUTH",
            ConfigKey::ApiWorkspaceId => "APP_API_WORKSPACE_ID",
            ConfigKey::Timezone => "APP_TIMEZONE",
        }
    }
}

pub trait ConfigSource {
    /// Raw value for `key`, `None` when unset.
    fn get(&self, key: ConfigKey) -> Option<String>;
}
