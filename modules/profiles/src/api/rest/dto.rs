use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{Profile, Socials};

/// Wire representation of a profile (camelCase JSON).
///
/// Doubles as the POST body: every field except `id` defaults when absent,
/// and a missing `id` is rejected by the domain layer with a 400 rather
/// than by the deserializer, so the caller gets the documented error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub socials: SocialsDto,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SocialsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

/// Response envelope for a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProfileResp {
    pub success: bool,
    pub profile: ProfileDto,
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub port: u16,
}

/// Error payload shared by all failure responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            job_title: profile.job_title,
            company: profile.company,
            industry: profile.industry,
            skills: profile.skills,
            email: profile.email,
            phone: profile.phone,
            website: profile.website,
            bio: profile.bio,
            socials: profile.socials.into(),
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
        }
    }
}

impl From<ProfileDto> for Profile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            id: dto.id,
            full_name: dto.full_name,
            job_title: dto.job_title,
            company: dto.company,
            industry: dto.industry,
            skills: dto.skills,
            email: dto.email,
            phone: dto.phone,
            website: dto.website,
            bio: dto.bio,
            socials: dto.socials.into(),
            avatar_url: dto.avatar_url,
            created_at: dto.created_at,
        }
    }
}

impl From<Socials> for SocialsDto {
    fn from(socials: Socials) -> Self {
        Self {
            linkedin: socials.linkedin,
            twitter: socials.twitter,
            github: socials.github,
            instagram: socials.instagram,
            facebook: socials.facebook,
        }
    }
}

impl From<SocialsDto> for Socials {
    fn from(dto: SocialsDto) -> Self {
        Self {
            linkedin: dto.linkedin,
            twitter: dto.twitter,
            github: dto.github,
            instagram: dto.instagram,
            facebook: dto.facebook,
        }
    }
}
