use actix_web::{delete, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::ports::incoming::use_cases::{
        DeletePhotoCommand, DeletePhotoError, PhotoDeleted,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::common::invalid_photo_id;

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Delete a photo
///
/// Removes the photo's order record and blacklists its id permanently, in one
/// transaction. Works for photos that were never curated.
#[utoipa::path(
    delete,
    path = "/api/admin/photos/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Media host public id")),
    responses(
        (status = 200, description = "Photo blacklisted", body = inline(SuccessResponse<PhotoDeleted>)),
        (status = 400, description = "Blank id", body = ErrorResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/photos/{id}")]
pub async fn delete_photo_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match DeletePhotoCommand::new(&path.into_inner()) {
        Ok(cmd) => cmd,
        Err(_) => return invalid_photo_id(),
    };

    match data.gallery.delete_photo.execute(command).await {
        Ok(deleted) => {
            tracing::info!(
                "Photo {} blacklisted (had order record: {})",
                deleted.photo_id,
                deleted.had_order_record
            );
            ApiResponse::success(deleted)
        }
        Err(err) => map_delete_photo_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_photo_error(err: DeletePhotoError) -> HttpResponse {
    match err {
        DeletePhotoError::RepositoryError(msg) => {
            tracing::error!("Deleting photo failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::gallery::application::{
        domain::entities::GalleryTag, services::DeletePhotoService,
    };
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{owner_bearer, test_token_verifier},
        gallery_fakes::InMemoryGalleryStore,
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    async fn delete(store: &InMemoryGalleryStore, uri: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_delete_photo(DeletePhotoService::new(store.clone()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_verifier())
                .service(delete_photo_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header(owner_bearer())
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn deletes_curated_photo_and_blacklists_it() {
        let store = InMemoryGalleryStore::default();
        store.seed_order(GalleryTag::Portfolio, &["A", "B"]);

        let resp = delete(&store, "/api/admin/photos/A").await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["photo_id"], "A");
        assert_eq!(json["data"]["blacklisted"], true);
        assert_eq!(json["data"]["had_order_record"], true);
        assert!(store.is_blacklisted("A"));
        assert_eq!(store.positions(GalleryTag::Portfolio), vec![("B".to_string(), 1)]);
    }

    #[actix_web::test]
    async fn remote_only_photo_is_still_blacklisted() {
        let store = InMemoryGalleryStore::default();

        let resp = delete(&store, "/api/admin/photos/remote-1").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["data"]["had_order_record"], false);
        assert!(store.is_blacklisted("remote-1"));
    }

    #[actix_web::test]
    async fn blank_id_is_rejected() {
        let store = InMemoryGalleryStore::default();

        let resp = delete(&store, "/api/admin/photos/%20%20").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "INVALID_PHOTO_ID");
        assert_eq!(store.write_calls(), 0);
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let store = InMemoryGalleryStore::default();
        store.fail_writes();

        let resp = delete(&store, "/api/admin/photos/A").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!store.is_blacklisted("A"));
    }
}
