use actix_web::web;
use std::sync::Arc;

use crate::auth::{
    adapter::outgoing::jwt::{JwtConfig, JwtTokenVerifier},
    application::ports::outgoing::token_verifier::TokenVerifier,
};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_OWNER: &str = "owner-test-subject";

pub fn test_verifier() -> JwtTokenVerifier {
    JwtTokenVerifier::new(JwtConfig::new(TEST_SECRET, TEST_OWNER))
}

/// App data the `AdminUser` extractor reads.
pub fn test_token_verifier() -> web::Data<Arc<dyn TokenVerifier + Send + Sync>> {
    let verifier: Arc<dyn TokenVerifier + Send + Sync> = Arc::new(test_verifier());
    web::Data::new(verifier)
}

fn bearer(subject: &str) -> (&'static str, String) {
    let token = test_verifier().sign_for_tests(subject, 0, 3600);
    ("Authorization", format!("Bearer {token}"))
}

pub fn owner_bearer() -> (&'static str, String) {
    bearer(TEST_OWNER)
}

/// Valid signature, wrong subject.
pub fn stranger_bearer() -> (&'static str, String) {
    bearer("someone-else")
}
