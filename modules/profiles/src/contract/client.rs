use async_trait::async_trait;

use crate::contract::model::Profile;

/// Public API trait for the profiles module that other components can use
#[async_trait]
pub trait ProfilesApi: Send + Sync {
    /// Get a profile by id
    async fn get_profile(&self, id: &str) -> anyhow::Result<Profile>;

    /// List all profiles, newest first
    async fn list_public(&self) -> anyhow::Result<Vec<Profile>>;

    /// Insert or fully replace the profile stored under `profile.id`
    async fn save_profile(&self, profile: Profile) -> anyhow::Result<Profile>;
}
