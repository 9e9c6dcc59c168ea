#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret with the identity provider.
    pub secret_key: String,
    /// `sub` claim of the only account allowed through the admin gate.
    pub owner_subject: String,
}

impl JwtConfig {
    pub fn new(secret_key: impl Into<String>, owner_subject: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            owner_subject: owner_subject.into(),
        }
    }
}
