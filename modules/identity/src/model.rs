/// An authenticated session identity. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque id (`usr_`/`goog_` prefixed); conventionally reused as the
    /// profile id for the account.
    pub id: String,
    pub email: String,
    /// Always true once constructed; there is no expiry.
    pub is_authenticated: bool,
}
