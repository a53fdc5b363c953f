use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use profiles::api::rest::dto::ProfileDto;
use tracing::warn;

/// Local file-backed mirror of profiles the consumer has seen.
///
/// Last-resort fallback only: entries may be stale and the cache is never
/// authoritative while the store is reachable. Like the store itself, a
/// missing or corrupt file behaves as an empty cache and every put
/// rewrites the whole document via a sibling temp file.
pub struct CardCache {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl CardCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    fn load(&self) -> HashMap<String, ProfileDto> {
        if !self.path.exists() {
            return HashMap::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Card cache {} is corrupt: {}", self.path.display(), e);
                HashMap::new()
            }),
            Err(e) => {
                warn!("Failed to read card cache {}: {}", self.path.display(), e);
                HashMap::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<ProfileDto> {
        let mut entries = self.load();
        entries.remove(id)
    }

    pub fn all(&self) -> Vec<ProfileDto> {
        self.load().into_values().collect()
    }

    /// Mirror a profile into the cache, overwriting any prior entry for
    /// the same id. Failures are logged, never surfaced: losing a cache
    /// write must not fail the operation that triggered it.
    pub fn put(&self, profile: &ProfileDto) {
        let _guard = self.write_guard.lock();

        let mut entries = self.load();
        entries.insert(profile.id.clone(), profile.clone());

        let json = match serde_json::to_string_pretty(&entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize card cache: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("Failed to create cache directory {}: {}", parent.display(), e);
                    return;
                }
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            warn!("Failed to write card cache {}: {}", self.path.display(), e);
        }
    }
}
