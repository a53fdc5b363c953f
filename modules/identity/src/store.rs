use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Persisted record for one registered user. Only the argon2 hash is
/// stored; federated users carry no password material at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub is_social: bool,
}

/// JSON-file-backed list of registered users.
///
/// Mirrors the profile store's failure posture: a missing, unreadable, or
/// corrupt file behaves as an empty list, and every insert rewrites the
/// whole file under a coarse lock.
pub struct UserStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn load_users(&self) -> Vec<StoredUser> {
        if !self.path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("User store {} is corrupt: {}", self.path.display(), e);
                Vec::new()
            }),
            Err(e) => {
                warn!("Failed to read user store {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub fn find_by_email(&self, email: &str) -> Option<StoredUser> {
        self.load_users().into_iter().find(|u| u.email == email)
    }

    pub fn insert(&self, user: StoredUser) -> anyhow::Result<()> {
        let _guard = self.write_guard.lock();

        let mut users = self.load_users();
        users.push(user);

        let json = serde_json::to_string_pretty(&users)
            .context("Failed to serialize user store")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory {}", parent.display())
                })?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to move {} into place", tmp.display()))?;
        Ok(())
    }
}
