use crate::shared::infrastructure::config::{ConfigKey, ConfigSource};
use std::path::{Path, PathBuf};

/// Reads the process environment on every lookup. Call `load_dotenv` first to
/// pick up a local `.env` file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvConfig;

impl ProcessEnvConfig {
    /// Loads `.env` from the working directory if there is one. Existing
    /// variables win over the file.
    pub fn load_dotenv() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?;
        Self::load_dotenv_from(&dir)
    }

    /// Loads `dir/.env`. Returns the file path when it was applied; a missing
    /// or malformed file is skipped.
    pub fn load_dotenv_from(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(".env");
        match dotenvy::from_path(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "loaded .env");
                Some(path)
            }
            Err(e) if e.not_found() => None,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable .env");
                None
            }
        }
    }
}

impl ConfigSource for ProcessEnvConfig {
    fn get(&self, key: ConfigKey) -> Option<String> {
        std::env::var(key.env_name()).ok()
    }
}
