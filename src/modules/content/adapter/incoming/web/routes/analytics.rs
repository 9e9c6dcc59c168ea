use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    content::application::{
        domain::entities::VisitSummary,
        ports::incoming::use_cases::{
            RecordVisitCommand, RecordVisitCommandError, RecordVisitError, VisitSummaryError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordVisitRequest {
    /// Route path as seen by the browser, e.g. `/weddings`.
    pub page_path: String,
    /// Opaque browser fingerprint, at most 64 characters.
    pub visitor_hash: String,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Record a page visit
#[utoipa::path(
    post,
    path = "/api/visits",
    tag = "content",
    request_body = RecordVisitRequest,
    responses(
        (status = 204, description = "Visit recorded"),
        (status = 400, description = "Invalid page path or visitor hash", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/visits")]
pub async fn record_visit_handler(
    data: web::Data<AppState>,
    payload: web::Json<RecordVisitRequest>,
) -> impl Responder {
    let command = match RecordVisitCommand::new(&payload.page_path, &payload.visitor_hash) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.content.record_visit.execute(command).await {
        Ok(()) => ApiResponse::no_content(),
        Err(RecordVisitError::RepositoryError(msg)) => {
            tracing::error!("Recording visit failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Visit counters for the owner dashboard
#[utoipa::path(
    get,
    path = "/api/admin/analytics/summary",
    tag = "admin",
    responses(
        (status = 200, description = "Totals, unique visitors and visits in the last 24 hours", body = inline(SuccessResponse<VisitSummary>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/analytics/summary")]
pub async fn visit_summary_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.visit_summary.execute().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(VisitSummaryError::RepositoryError(msg)) => {
            tracing::error!("Loading visit summary failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RecordVisitCommandError) -> HttpResponse {
    let code = match err {
        RecordVisitCommandError::EmptyPagePath => "EMPTY_PAGE_PATH",
        RecordVisitCommandError::InvalidPagePath => "INVALID_PAGE_PATH",
        RecordVisitCommandError::PagePathTooLong => "PAGE_PATH_TOO_LONG",
        RecordVisitCommandError::EmptyVisitorHash => "EMPTY_VISITOR_HASH",
        RecordVisitCommandError::VisitorHashTooLong => "VISITOR_HASH_TOO_LONG",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
