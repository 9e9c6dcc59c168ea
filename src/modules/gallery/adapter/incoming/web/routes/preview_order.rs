use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::{
        domain::draft::{DraftEdit, DraftItem, OrderEntry},
        ports::incoming::use_cases::{PreviewOrderCommand, PreviewOrderError},
    },
    shared::api::ApiResponse,
    AppState,
};

use super::common::{map_draft_error, parse_tag};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PreviewOrderRequest {
    pub items: Vec<DraftItem>,
    /// Applied in order to the draft built from `items`.
    #[serde(default)]
    pub edits: Vec<DraftEdit>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Preview a reordering
///
/// Replays editor gestures against the submitted items and returns the
/// positions a save would write. Nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/admin/galleries/{tag}/preview",
    tag = "admin",
    params(("tag" = String, Path, description = "Gallery tag")),
    request_body = PreviewOrderRequest,
    responses(
        (status = 200, description = "Resulting order", body = inline(SuccessResponse<Vec<OrderEntry>>)),
        (status = 400, description = "Invalid items or edit", body = ErrorResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/galleries/{tag}/preview")]
pub async fn preview_order_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<PreviewOrderRequest>,
) -> impl Responder {
    let tag = match parse_tag(&path.into_inner()) {
        Ok(tag) => tag,
        Err(resp) => return resp,
    };

    let PreviewOrderRequest { items, edits } = payload.into_inner();
    let command = match PreviewOrderCommand::new(tag, items, edits) {
        Ok(cmd) => cmd,
        Err(err) => return map_draft_error(err),
    };

    match data.gallery.preview_order.execute(command) {
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => map_preview_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_preview_error(err: PreviewOrderError) -> HttpResponse {
    match err {
        PreviewOrderError::InvalidEdit { .. } => {
            ApiResponse::bad_request("INVALID_EDIT", &err.to_string())
        }
    }
}
