use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    gallery::application::{
        domain::entities::{GalleryPhoto, GalleryTag},
        ports::incoming::use_cases::{ResolveGalleryCommand, ResolveGalleryError},
    },
    shared::api::ApiResponse,
    AppState,
};

use super::common::parse_tag;

#[derive(Debug, Serialize, ToSchema)]
pub struct GalleryView {
    /// `null` when the request named no tag.
    pub tag: Option<GalleryTag>,
    pub photos: Vec<GalleryPhoto>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Resolve a gallery
///
/// Curated photos first in their saved order, then any other photos the media
/// host lists for the tag. Deleted photos never appear.
#[utoipa::path(
    get,
    path = "/api/galleries/{tag}",
    tag = "galleries",
    params(
        ("tag" = String, Path, description = "portfolio | portraits | weddings | about | articles | reportage")
    ),
    responses(
        (status = 200, description = "Merged gallery; empty when the tag is blank", body = inline(SuccessResponse<GalleryView>)),
        (status = 400, description = "Unknown tag", body = ErrorResponse),
        (status = 503, description = "Blacklist could not be read", body = ErrorResponse)
    )
)]
#[get("/api/galleries/{tag}")]
pub async fn get_gallery_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();
    let tag = if raw.trim().is_empty() {
        None
    } else {
        match parse_tag(&raw) {
            Ok(tag) => Some(tag),
            Err(resp) => return resp,
        }
    };

    let command = ResolveGalleryCommand::new(tag);

    match data.gallery.resolve.execute(command).await {
        Ok(photos) => ApiResponse::success(GalleryView { tag, photos }),
        Err(err) => map_resolve_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_resolve_error(err: ResolveGalleryError) -> HttpResponse {
    match err {
        ResolveGalleryError::BlacklistUnavailable(msg) => {
            tracing::error!("Gallery unavailable: {}", msg);
            ApiResponse::service_unavailable(
                "GALLERY_UNAVAILABLE",
                "The gallery is temporarily unavailable",
            )
        }
    }
}
