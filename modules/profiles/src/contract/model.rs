use chrono::{DateTime, Utc};

/// Pure profile model for inter-module communication (no serde).
/// Serialization lives on the storage record and the REST DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub job_title: String,
    pub company: String,
    pub industry: String,
    pub skills: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub bio: String,
    pub socials: Socials,
    pub avatar_url: String,
    /// Stamped by the store on every save; doubles as last-modified marker.
    pub created_at: DateTime<Utc>,
}

/// Optional links to a fixed set of social platforms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Socials {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
}

impl Profile {
    /// An empty profile for `id` with the deterministic placeholder avatar.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let avatar_url = placeholder_avatar(&id);
        Self {
            id,
            full_name: String::new(),
            job_title: String::new(),
            company: String::new(),
            industry: String::new(),
            skills: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            bio: String::new(),
            socials: Socials::default(),
            avatar_url,
            created_at: Utc::now(),
        }
    }
}

/// Deterministic avatar placeholder derived from the profile id.
pub fn placeholder_avatar(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/400")
}
