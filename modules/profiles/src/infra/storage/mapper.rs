use crate::contract::model::{Profile, Socials};
use crate::infra::storage::entity::{ProfileRecord, SocialsRecord};

// Conversions between storage records and the contract model.

impl From<ProfileRecord> for Profile {
    fn from(rec: ProfileRecord) -> Self {
        Self {
            id: rec.id,
            full_name: rec.full_name,
            job_title: rec.job_title,
            company: rec.company,
            industry: rec.industry,
            skills: rec.skills,
            email: rec.email,
            phone: rec.phone,
            website: rec.website,
            bio: rec.bio,
            socials: rec.socials.into(),
            avatar_url: rec.avatar_url,
            created_at: rec.created_at,
        }
    }
}

impl From<Profile> for ProfileRecord {
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

impl From<SocialsRecord> for Socials {
    fn from(rec: SocialsRecord) -> Self {
        Self {
            linkedin: rec.linkedin,
            twitter: rec.twitter,
            github: rec.github,
            instagram: rec.instagram,
            facebook: rec.facebook,
        }
    }
}

impl From<Socials> for SocialsRecord {
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
