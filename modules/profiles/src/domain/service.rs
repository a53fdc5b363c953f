use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::contract::model::{placeholder_avatar, Profile};
use crate::domain::error::DomainError;
use crate::domain::repo::ProfilesRepository;

/// Domain service with the save/resolve rules for profiles.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ProfilesRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn ProfilesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "profiles.service.get_profile", skip(self), fields(profile_id = %id))]
    pub async fn get_profile(&self, id: &str) -> Result<Profile, DomainError> {
        debug!("Getting profile by id");

        let profile = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::profile_not_found(id))?;
        debug!("Successfully retrieved profile");
        Ok(profile)
    }

    /// List every profile, newest first (the public directory).
    #[instrument(name = "profiles.service.list_public", skip(self))]
    pub async fn list_public(&self) -> Result<Vec<Profile>, DomainError> {
        debug!("Listing public profiles");

        let profiles = self
            .repo
            .list_all()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        debug!("Successfully listed {} profiles", profiles.len());
        Ok(profiles)
    }

    /// Insert or fully replace the profile stored under `profile.id`.
    ///
    /// Stamps `created_at` on every save and fills an empty avatar with the
    /// deterministic placeholder. A save with an existing id replaces the
    /// prior record entirely; there is no partial merge.
    #[instrument(
        name = "profiles.service.save_profile",
        skip(self, profile),
        fields(profile_id = %profile.id)
    )]
    pub async fn save_profile(&self, mut profile: Profile) -> Result<Profile, DomainError> {
        info!("Saving profile");

        if profile.id.trim().is_empty() {
            return Err(DomainError::missing_id());
        }

        profile.created_at = Utc::now();
        if profile.avatar_url.trim().is_empty() {
            profile.avatar_url = placeholder_avatar(&profile.id);
        }

        self.repo
            .upsert(profile.clone())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully saved profile with id={}", profile.id);
        Ok(profile)
    }
}
