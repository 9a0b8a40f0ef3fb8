// src/config/credentials.rs
use std::{fs, path::{Path, PathBuf}};

use super::consts::{ROUTING_KEY_FILE, WEBHOOK_KEY_FILE};
use crate::error::{FinderError, Result};

/// Secrets read once at startup from the keys directory.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub routing_key: String,
    /// Absent only when the run will not post anything.
    pub webhook_url: Option<String>,
}

// Keep secrets out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("routing_key", &"***")
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Credentials {
    /// `dir/maps` is always required; `dir/discord` only when `need_webhook`.
    pub fn load(dir: &Path, need_webhook: bool) -> Result<Self> {
        let routing_key = read_key(&dir.join(ROUTING_KEY_FILE))?;
        let webhook_path = dir.join(WEBHOOK_KEY_FILE);
        let webhook_url = if need_webhook {
            Some(read_key(&webhook_path)?)
        } else {
            read_key(&webhook_path).ok()
        };
        logd!(
            "Credentials: loaded from {} (webhook: {})",
            dir.display(),
            if webhook_url.is_some() { "yes" } else { "no" }
        );
        Ok(Self { routing_key, webhook_url })
    }
}

/// Read a key file, trimming the trailing newline editors like to add.
pub fn read_key(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| FinderError::KeyFile {
        path: PathBuf::from(path),
        source,
    })?;
    let key = text.trim();
    if key.is_empty() {
        return Err(FinderError::EmptyKey { path: PathBuf::from(path) });
    }
    Ok(key.to_string())
}
