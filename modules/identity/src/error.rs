use thiserror::Error;

/// Identity-specific errors using thiserror
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("User already exists with this email: {email}")]
    AlreadyExists { email: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl IdentityError {
    pub fn already_exists(email: impl Into<String>) -> Self {
        Self::AlreadyExists {
            email: email.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
