// Values inlined when the bundle is compiled. The browser has no process
// environment, so these are frozen for the lifetime of the build.

use crate::shared::infrastructure::config::{ConfigKey, ConfigSource};

#[derive(Debug, Default, Clone, Copy)]
pub struct BuildTimeConfig;

impl ConfigSource for BuildTimeConfig {
    fn get(&self, key: ConfigKey) -> Option<String> {
        // option_env! needs literals, keep in sync with ConfigKey::env_name.
        let value = match key {
            ConfigKey::ApiAuth => option_env!("APP_API_AUTH"),
            ConfigKey::ApiWorkspaceId => option_env!("APP_API_WORKSPACE_ID"),
            ConfigKey::Timezone => option_env!("APP_TIMEZONE"),
        };
        value.map(str::to_string)
    }
}

#[cfg(test)]
mod build_time_config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_expose_the_values_present_at_compile_time() {
        assert_eq!(BuildTimeConfig.get(ConfigKey::ApiAuth).as_deref(), option_env!("APP_API_AUTH"));
        assert_eq!(BuildTimeConfig.get(ConfigKey::ApiWorkspaceId).as_deref(), option_env!("APP_API_WORKSPACE_ID"));
        assert_eq!(BuildTimeConfig.get(ConfigKey::Timezone).as_deref(), option_env!("APP_TIMEZONE"));
    }
}
