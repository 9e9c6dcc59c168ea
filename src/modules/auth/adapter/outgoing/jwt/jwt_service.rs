use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::fmt;

use crate::auth::application::{
    domain::entities::OwnerIdentity,
    ports::outgoing::token_verifier::{TokenClaims, TokenError, TokenVerifier},
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenVerifier {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("owner_subject", &self.config.owner_subject)
            .finish()
    }
}

impl JwtTokenVerifier {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    /// Signs a token the way the identity provider would. Production code never issues tokens.
    #[cfg(test)]
    pub fn sign_for_tests(&self, sub: &str, valid_from_offset: i64, ttl_seconds: i64) -> String {
        use chrono::Utc;
        use jsonwebtoken::{encode, EncodingKey, Header};

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: sub.to_string(),
            iat: now,
            nbf: now + valid_from_offset,
            exp: now + ttl_seconds,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret_key.as_bytes()),
        )
        .expect("test token should encode")
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }

    fn verify_owner(&self, token: &str) -> Result<OwnerIdentity, TokenError> {
        let claims = self.verify_token(token)?;

        if claims.sub != self.config.owner_subject {
            tracing::warn!("Admin access denied for subject '{}'", claims.sub);
            return Err(TokenError::NotOwner);
        }

        Ok(OwnerIdentity::new(claims.sub))
    }
}
