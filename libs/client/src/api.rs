use profiles::api::rest::dto::{ProfileDto, SaveProfileResp};
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// HTTP client for the profile store.
///
/// Contract: operations never return `Err`. Any network error, timeout, or
/// non-success status collapses to a "no data" sentinel (`None`, an empty
/// vector, or `false`), so callers can layer fallback logic without
/// exception handling. Failures are logged at warn.
#[derive(Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one profile; `None` covers not-found and unreachable alike.
    pub async fn get(&self, id: &str) -> Option<ProfileDto> {
        let url = format!("{}/api/profiles/{}", self.base_url, id);
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.json::<ProfileDto>().await {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Malformed profile response from {}: {}", url, e);
                    None
                }
            },
            Ok(resp) => {
                debug!("Profile fetch {} returned {}", url, resp.status());
                None
            }
            Err(e) => {
                warn!("Failed to fetch profile from {}: {}", url, e);
                None
            }
        }
    }

    /// Fetch the public directory; empty covers failure as well.
    pub async fn get_all(&self) -> Vec<ProfileDto> {
        let url = format!("{}/api/profiles", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                resp.json::<Vec<ProfileDto>>().await.unwrap_or_else(|e| {
                    warn!("Malformed profile listing from {}: {}", url, e);
                    Vec::new()
                })
            }
            Ok(resp) => {
                debug!("Profile listing {} returned {}", url, resp.status());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to fetch profiles from {}: {}", url, e);
                Vec::new()
            }
        }
    }

    /// Save a profile; `false` on any failure.
    pub async fn save(&self, profile: &ProfileDto) -> bool {
        let url = format!("{}/api/profiles", self.base_url);
        match self.http.post(&url).json(profile).send().await {
            Ok(resp) if resp.status().is_success() => {
                // The envelope is checked so a proxy answering 200 with
                // junk does not count as a persisted write.
                match resp.json::<SaveProfileResp>().await {
                    Ok(envelope) => envelope.success,
                    Err(e) => {
                        warn!("Malformed save response from {}: {}", url, e);
                        false
                    }
                }
            }
            Ok(resp) => {
                warn!("Profile save {} returned {}", url, resp.status());
                false
            }
            Err(e) => {
                warn!("Failed to save profile to {}: {}", url, e);
                false
            }
        }
    }

    /// Liveness probe; `false` on any failure.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("Health check against {} failed: {}", url, e);
                false
            }
        }
    }
}
