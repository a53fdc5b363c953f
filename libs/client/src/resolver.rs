use profiles::api::rest::dto::ProfileDto;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::ProfileClient;
use crate::cache::CardCache;

/// Resolution failures surfaced to the UI.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("Profile store unreachable; the profile was not saved")]
    BackendUnavailable,
}

/// Presents a single read/write API that hides whether data came from the
/// store or the local cache.
///
/// Policies, fixed by design:
/// - writes fail loudly when the store is unreachable (a cache-only write
///   can be silently lost, so it is never offered),
/// - reads are remote-wins with cache fallback and no timestamp
///   reconciliation: a stale remote record shadows a fresher local one,
///   accepted behavior rather than a bug,
/// - listings never merge remote and local sets.
pub struct ProfileResolver {
    client: ProfileClient,
    cache: CardCache,
}

impl ProfileResolver {
    pub fn new(client: ProfileClient, cache: CardCache) -> Self {
        Self { client, cache }
    }

    /// Save through to the store; mirrors the record into the local cache
    /// on success. This mirror is what makes an id "synced" for offline
    /// reads later.
    pub async fn save(&self, profile: &ProfileDto) -> Result<(), ResolveError> {
        if !self.client.save(profile).await {
            warn!("Remote save failed for profile {}", profile.id);
            return Err(ResolveError::BackendUnavailable);
        }

        self.cache.put(profile);
        Ok(())
    }

    /// Remote answer wins and refreshes the mirror; a remote miss falls
    /// back to the cache.
    pub async fn get(&self, id: &str) -> Option<ProfileDto> {
        if let Some(profile) = self.client.get(id).await {
            self.cache.put(&profile);
            return Some(profile);
        }

        debug!("Store had no answer for {}; trying local cache", id);
        self.cache.get(id)
    }

    /// A non-empty remote listing is returned verbatim; an empty one falls
    /// back to every cached record.
    pub async fn get_all_public(&self) -> Vec<ProfileDto> {
        let remote = self.client.get_all().await;
        if !remote.is_empty() {
            return remote;
        }

        debug!("Store listing empty or unreachable; serving local cache");
        self.cache.all()
    }
}
