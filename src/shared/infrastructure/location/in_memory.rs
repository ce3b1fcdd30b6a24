use crate::shared::infrastructure::location::Location;

#[derive(Debug, Clone)]
pub struct StaticLocation {
    hostname: String,
}

impl StaticLocation {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self { hostname: hostname.into() }
    }
}

impl Location for StaticLocation {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}
