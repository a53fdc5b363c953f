use async_trait::async_trait;

use crate::contract::model::Profile;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    /// Load a profile by id.
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Profile>>;
    /// List every stored profile, sorted by `created_at` descending.
    ///
    /// The descending order is a stable contract; ties break on `id` so
    /// the result is deterministic.
    async fn list_all(&self) -> anyhow::Result<Vec<Profile>>;
    /// Insert or fully replace the record stored under `profile.id`.
    ///
    /// Service computes timestamps/defaults; repo persists.
    async fn upsert(&self, profile: Profile) -> anyhow::Result<()>;
}
