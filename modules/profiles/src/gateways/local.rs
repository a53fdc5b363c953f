use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{client::ProfilesApi, error::ProfilesError, model::Profile};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the ProfilesApi trait that delegates to the
/// domain service (same-process callers, no HTTP hop).
pub struct ProfilesLocalClient {
    service: Arc<Service>,
}

impl ProfilesLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ProfilesApi for ProfilesLocalClient {
    async fn get_profile(&self, id: &str) -> anyhow::Result<Profile> {
        self.service
            .get_profile(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn list_public(&self) -> anyhow::Result<Vec<Profile>> {
        self.service
            .list_public()
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn save_profile(&self, profile: Profile) -> anyhow::Result<Profile> {
        self.service
            .save_profile(profile)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::ProfileNotFound { id } => ProfilesError::not_found(id),
        DomainError::MissingId => ProfilesError::validation("Profile ID required"),
        DomainError::Storage { .. } => ProfilesError::internal(),
    };

    anyhow::Error::new(contract_error)
}
