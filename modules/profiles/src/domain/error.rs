use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Profile not found: {id}")]
    ProfileNotFound { id: String },

    #[error("Profile ID required")]
    MissingId,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn profile_not_found(id: impl Into<String>) -> Self {
        Self::ProfileNotFound { id: id.into() }
    }

    pub fn missing_id() -> Self {
        Self::MissingId
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
