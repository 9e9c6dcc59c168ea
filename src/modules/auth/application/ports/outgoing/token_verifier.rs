use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::OwnerIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token subject is not the site owner")]
    NotOwner,
}

/// Claims issued by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

pub trait TokenVerifier: Send + Sync {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Verifies the token, then requires its subject to be the owner.
    fn verify_owner(&self, token: &str) -> Result<OwnerIdentity, TokenError>;
}
