use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Gallery
use crate::gallery::adapter::incoming::web::routes::{
    GalleryView, PreviewOrderRequest, SaveOrderRequest, UpdateDescriptionRequest,
};
use crate::gallery::application::{
    domain::{
        draft::{DraftEdit, DraftItem, OrderEntry},
        entities::{GalleryPhoto, GalleryTag, PhotoVariant},
    },
    ports::incoming::use_cases::{
        AddedVariant, PhotoDeleted, PhotoDescription, SavedOrder, UploadedPhoto,
    },
};

// Content
use crate::content::adapter::incoming::web::routes::{
    CreateArticleRequest, RecordVisitRequest, SaveAboutRequest, SaveWeddingPackagesRequest,
};
use crate::content::application::{
    domain::entities::{
        AboutContent, AboutPage, Article, Credential, VisitSummary, WeddingPackage,
    },
    ports::incoming::use_cases::WeddingPackageInput,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Gallery API",
        version = "1.0.0",
        description = "Curated photo galleries and site content, with an owner-only admin surface",
    ),
    paths(
        // Public gallery
        crate::gallery::adapter::incoming::web::routes::get_gallery_handler,

        // Gallery curation
        crate::gallery::adapter::incoming::web::routes::save_order_handler,
        crate::gallery::adapter::incoming::web::routes::preview_order_handler,
        crate::gallery::adapter::incoming::web::routes::delete_photo_handler,
        crate::gallery::adapter::incoming::web::routes::upload_photo_handler,
        crate::gallery::adapter::incoming::web::routes::add_variant_handler,
        crate::gallery::adapter::incoming::web::routes::delete_variant_handler,
        crate::gallery::adapter::incoming::web::routes::update_description_handler,

        // Content
        crate::content::adapter::incoming::web::routes::list_articles_handler,
        crate::content::adapter::incoming::web::routes::get_article_handler,
        crate::content::adapter::incoming::web::routes::create_article_handler,
        crate::content::adapter::incoming::web::routes::delete_article_handler,
        crate::content::adapter::incoming::web::routes::get_about_handler,
        crate::content::adapter::incoming::web::routes::save_about_handler,
        crate::content::adapter::incoming::web::routes::list_wedding_packages_handler,
        crate::content::adapter::incoming::web::routes::save_wedding_packages_handler,
        crate::content::adapter::incoming::web::routes::record_visit_handler,

        // Analytics
        crate::content::adapter::incoming::web::routes::visit_summary_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            GalleryTag,
            GalleryPhoto,
            GalleryView,
            PhotoVariant,
            DraftItem,
            DraftEdit,
            OrderEntry,
            SaveOrderRequest,
            SavedOrder,
            PreviewOrderRequest,
            PhotoDeleted,
            UploadedPhoto,
            AddedVariant,
            UpdateDescriptionRequest,
            PhotoDescription,

            Article,
            CreateArticleRequest,
            AboutContent,
            Credential,
            AboutPage,
            SaveAboutRequest,
            WeddingPackage,
            WeddingPackageInput,
            SaveWeddingPackagesRequest,
            RecordVisitRequest,
            VisitSummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "galleries", description = "Public gallery reads"),
        (name = "content", description = "Public articles, about page, wedding packages and visit tracking"),
        (name = "admin", description = "Owner-only curation and content editing"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token issued by the identity provider for the owner account"))
                        .build(),
                ),
            )
        }
    }
}
