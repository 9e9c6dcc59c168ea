use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_verifier::{TokenError, TokenVerifier};
use crate::shared::api::ApiResponse;

/// The site owner, authenticated by bearer token. Guards every admin route.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("Token verifier is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match verifier.verify_owner(&token) {
            Ok(identity) => ready(Ok(AdminUser {
                subject: identity.subject,
            })),
            Err(TokenError::NotOwner) => ready(Err(create_api_error(ApiResponse::forbidden(
                "NOT_OWNER",
                "Only the site owner may do this",
            )))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "REAUTHENTICATE",
                "Please re-authenticate",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenVerifier};

    const SECRET: &str = "test_secret_key_for_testing_only_0123456789";

    #[get("/guarded")]
    async fn guarded(admin: AdminUser) -> impl Responder {
        ApiResponse::success(admin.subject)
    }

    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(JwtConfig::new(SECRET, "owner-123"))
    }

    async fn call(auth_header: Option<String>) -> actix_web::dev::ServiceResponse {
        let verifier: Arc<dyn TokenVerifier + Send + Sync> = Arc::new(verifier());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(verifier))
                .service(guarded),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/guarded");
        if let Some(value) = auth_header {
            req = req.insert_header(("Authorization", value));
        }
        test::call_service(&app, req.to_request()).await
    }

    async fn error_code(resp: actix_web::dev::ServiceResponse) -> String {
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["error"]["code"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn owner_token_is_admitted() {
        let token = verifier().sign_for_tests("owner-123", 0, 3600);

        let resp = call(Some(format!("Bearer {token}"))).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"], "owner-123");
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let resp = call(None).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn non_bearer_header_is_unauthorized() {
        let resp = call(Some("Basic dXNlcjpwYXNz".to_string())).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn expired_token_asks_to_reauthenticate() {
        let token = verifier().sign_for_tests("owner-123", -7200, -3600);

        let resp = call(Some(format!("Bearer {token}"))).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "REAUTHENTICATE");
    }

    #[actix_web::test]
    async fn other_subject_is_forbidden() {
        let token = verifier().sign_for_tests("visitor-9", 0, 3600);

        let resp = call(Some(format!("Bearer {token}"))).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(error_code(resp).await, "NOT_OWNER");
    }

    #[actix_web::test]
    async fn missing_verifier_is_internal_error() {
        let app = test::init_service(App::new().service(guarded)).await;
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer whatever"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
