use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum ProfilesError {
    #[error("Profile not found: {id}")]
    NotFound { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl ProfilesError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
