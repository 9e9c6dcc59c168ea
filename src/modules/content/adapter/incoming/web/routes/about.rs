use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    content::application::{
        domain::entities::{AboutContent, AboutPage, Credential},
        ports::incoming::use_cases::{
            GetAboutError, SaveAboutCommand, SaveAboutCommandError, SaveAboutError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveAboutRequest {
    pub content: AboutContent,
    /// Replaces every stored credential; order is kept.
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// About page: bio and credentials
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "content",
    responses(
        (status = 200, description = "About page", body = inline(SuccessResponse<AboutPage>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_about.execute().await {
        Ok(page) => ApiResponse::success(page),
        Err(GetAboutError::RepositoryError(msg)) => {
            tracing::error!("Loading about page failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Replace the about page
#[utoipa::path(
    put,
    path = "/api/admin/about",
    tag = "admin",
    request_body = SaveAboutRequest,
    responses(
        (status = 200, description = "About page saved", body = inline(SuccessResponse<AboutPage>)),
        (status = 400, description = "Blank name or credential title", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/about")]
pub async fn save_about_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SaveAboutRequest>,
) -> impl Responder {
    let SaveAboutRequest {
        content,
        credentials,
    } = payload.into_inner();

    let command = match SaveAboutCommand::new(content, credentials) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    let (content, credentials) = (command.content().clone(), command.credentials().to_vec());

    match data.content.save_about.execute(command).await {
        Ok(()) => ApiResponse::success(AboutPage {
            content: Some(content),
            credentials,
        }),
        Err(SaveAboutError::RepositoryError(msg)) => {
            tracing::error!("Saving about page failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SaveAboutCommandError) -> HttpResponse {
    let code = match err {
        SaveAboutCommandError::EmptyName => "EMPTY_NAME",
        SaveAboutCommandError::EmptyCredentialTitle(_) => "EMPTY_CREDENTIAL_TITLE",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::content::application::services::{GetAboutService, SaveAboutService};
    use crate::shared::api::custom_json_config;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{owner_bearer, test_token_verifier},
        content_fakes::InMemoryContentStore,
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    macro_rules! init_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_get_about(GetAboutService::new($store.clone()))
                            .with_save_about(SaveAboutService::new($store.clone()))
                            .build(),
                    )
                    .app_data(test_token_verifier())
                    .app_data(custom_json_config())
                    .service(get_about_handler)
                    .service(save_about_handler),
            )
            .await
        };
    }

    fn body(name: &str, titles: &[&str]) -> serde_json::Value {
        let credentials: Vec<_> = titles
            .iter()
            .map(|t| serde_json::json!({ "category": "award", "title": t }))
            .collect();
        serde_json::json!({
            "content": {
                "name": name,
                "bio_p1": "Fotograf i Stockholm",
                "bio_p2": "",
                "email": "anna@example.se",
                "phone": "070-000 00 00"
            },
            "credentials": credentials
        })
    }

    #[actix_web::test]
    async fn empty_about_page_has_null_content() {
        let store = InMemoryContentStore::default();
        let app = init_app!(store);

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert!(json["data"]["content"].is_null());
        assert_eq!(json["data"]["credentials"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn saved_page_is_served_back_in_order() {
        let store = InMemoryContentStore::default();
        let app = init_app!(store);

        let req = test::TestRequest::put()
            .uri("/api/admin/about")
            .insert_header(owner_bearer())
            .set_json(body("Anna", &["Second", "First"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let json = read_json(test::call_service(&app, req).await).await;

        assert_eq!(json["data"]["content"]["name"], "Anna");
        assert_eq!(json["data"]["credentials"][0]["title"], "Second");
        assert_eq!(json["data"]["credentials"][1]["title"], "First");
        assert_eq!(json["data"]["credentials"][1]["subtitle"], "");
    }

    #[actix_web::test]
    async fn blank_name_is_rejected_without_writing() {
        let store = InMemoryContentStore::default();
        let app = init_app!(store);

        let req = test::TestRequest::put()
            .uri("/api/admin/about")
            .insert_header(owner_bearer())
            .set_json(body(" ", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "EMPTY_NAME");
        assert_eq!(store.about_content(), None);
    }

    #[actix_web::test]
    async fn save_without_token_is_unauthorized() {
        let store = InMemoryContentStore::default();
        let app = init_app!(store);

        let req = test::TestRequest::put()
            .uri("/api/admin/about")
            .set_json(body("Anna", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(read_json(resp).await["error"]["code"], "MISSING_AUTH_HEADER");
    }
}
