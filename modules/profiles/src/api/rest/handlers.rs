use axum::{
    extract::Path,
    http::StatusCode,
    response::Json,
    Extension,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::api::rest::dto::{ErrorBody, HealthDto, ProfileDto, SaveProfileResp};
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// Listening port exposed through the health probe.
#[derive(Debug, Clone, Copy)]
pub struct ServerInfo {
    pub port: u16,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// Get a specific profile by id
pub async fn get_profile(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<ProfileDto>, ApiError> {
    info!("Getting profile with id: {}", id);

    match svc.get_profile(&id).await {
        Ok(profile) => Ok(Json(ProfileDto::from(profile))),
        Err(DomainError::ProfileNotFound { .. }) => {
            info!("Profile not found: {}", id);
            Err(error_body(StatusCode::NOT_FOUND, "Profile not found"))
        }
        Err(e) => {
            error!("Failed to get profile {}: {}", id, e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load profile",
            ))
        }
    }
}

/// List all profiles, newest first (the public directory)
pub async fn list_profiles(
    Extension(svc): Extension<std::sync::Arc<Service>>,
) -> Result<Json<Vec<ProfileDto>>, ApiError> {
    info!("Listing public profiles");

    match svc.list_public().await {
        Ok(profiles) => Ok(Json(
            profiles.into_iter().map(ProfileDto::from).collect(),
        )),
        Err(e) => {
            error!("Failed to list profiles: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load profiles",
            ))
        }
    }
}

/// Insert or fully replace a profile
pub async fn save_profile(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(dto): Json<ProfileDto>,
) -> Result<Json<SaveProfileResp>, ApiError> {
    info!("Saving profile with id: {:?}", dto.id);

    match svc.save_profile(dto.into()).await {
        Ok(stored) => Ok(Json(SaveProfileResp {
            success: true,
            profile: ProfileDto::from(stored),
        })),
        Err(DomainError::MissingId) => {
            Err(error_body(StatusCode::BAD_REQUEST, "Profile ID required"))
        }
        Err(e) => {
            error!("Failed to save profile: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save profile",
            ))
        }
    }
}

/// Liveness probe; side-effect-free
pub async fn health(Extension(info): Extension<ServerInfo>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        port: info.port,
    })
}

/// Service banner listing the available endpoints
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Taply API",
        "endpoints": {
            "health": "/api/health",
            "getProfile": "/api/profiles/:id",
            "allProfiles": "/api/profiles",
            "saveProfile": "POST /api/profiles",
        }
    }))
}

/// Catch-all for unknown routes
pub async fn not_found() -> ApiError {
    error_body(StatusCode::NOT_FOUND, "Endpoint not found")
}
