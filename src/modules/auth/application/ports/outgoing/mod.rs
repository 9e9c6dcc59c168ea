pub mod token_verifier;

pub use token_verifier::{TokenClaims, TokenError, TokenVerifier};
