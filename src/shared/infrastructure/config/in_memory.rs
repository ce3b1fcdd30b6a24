use crate::shared::infrastructure::config::{ConfigKey, ConfigSource};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct InMemoryConfig {
    values: HashMap<ConfigKey, String>,
}

impl InMemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }
}

impl ConfigSource for InMemoryConfig {
    fn get(&self, key: ConfigKey) -> Option<String> {
        self.values.get(&key).cloned()
    }
}
