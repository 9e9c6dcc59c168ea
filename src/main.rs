pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;
pub use modules::gallery;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenVerifier};
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::config::AppConfig;
use crate::content::adapter::outgoing::db::{
    ContentQueryPostgres, ContentRepositoryPostgres, SiteVisitQueryPostgres,
    SiteVisitRepositoryPostgres,
};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::services::{
    CreateArticleService, DeleteArticleService, GetAboutService, GetArticleService,
    GetVisitSummaryService, ListArticlesService, ListWeddingPackagesService, RecordVisitService,
    SaveAboutService, SaveWeddingPackagesService,
};
use crate::gallery::adapter::outgoing::cloudinary::{
    CloudinaryConfig, CloudinaryMediaListing, CloudinaryMediaUploader,
};
use crate::gallery::adapter::outgoing::db::{PhotoOrderQueryPostgres, PhotoOrderRepositoryPostgres};
use crate::gallery::application::domain::policies::upload_policy::UploadPolicy;
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::services::{
    AddVariantService, DeletePhotoService, DeleteVariantService, PreviewOrderService,
    ResolveGalleryService, SaveOrderService, UpdateDescriptionService, UploadPhotoService,
};
use crate::shared::api::{custom_json_config, custom_query_config, upload_payload_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub gallery: GalleryUseCases,
    pub content: ContentUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    // One HTTP client for every media host call
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let cloudinary = CloudinaryConfig::new(
        config.cloudinary_cloud_name.clone(),
        config.cloudinary_upload_preset.clone(),
    );
    let media_listing = CloudinaryMediaListing::new(cloudinary.clone(), http_client.clone());
    let media_uploader = CloudinaryMediaUploader::new(cloudinary, http_client);

    // Gallery
    let order_query = PhotoOrderQueryPostgres::new(Arc::clone(&db_arc));
    let order_repo = PhotoOrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let upload_policy = UploadPolicy::default();

    let gallery = GalleryUseCases {
        resolve: Arc::new(ResolveGalleryService::new(
            order_query,
            media_listing,
            config.gallery_alt_byline.clone(),
        )),
        save_order: Arc::new(SaveOrderService::new(order_repo.clone())),
        preview_order: Arc::new(PreviewOrderService::new()),
        delete_photo: Arc::new(DeletePhotoService::new(order_repo.clone())),
        upload_photo: Arc::new(UploadPhotoService::new(
            media_uploader.clone(),
            order_repo.clone(),
        )),
        add_variant: Arc::new(AddVariantService::new(media_uploader, order_repo.clone())),
        delete_variant: Arc::new(DeleteVariantService::new(order_repo.clone())),
        update_description: Arc::new(UpdateDescriptionService::new(order_repo)),
        upload_policy: upload_policy.clone(),
    };

    // Content
    let content_query = ContentQueryPostgres::new(Arc::clone(&db_arc));
    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));

    let content = ContentUseCases {
        list_articles: Arc::new(ListArticlesService::new(content_query.clone())),
        get_article: Arc::new(GetArticleService::new(content_query.clone())),
        create_article: Arc::new(CreateArticleService::new(content_repo.clone())),
        delete_article: Arc::new(DeleteArticleService::new(content_repo.clone())),
        get_about: Arc::new(GetAboutService::new(content_query.clone())),
        save_about: Arc::new(SaveAboutService::new(content_repo.clone())),
        list_packages: Arc::new(ListWeddingPackagesService::new(content_query)),
        save_packages: Arc::new(SaveWeddingPackagesService::new(content_repo)),
        record_visit: Arc::new(RecordVisitService::new(SiteVisitRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        visit_summary: Arc::new(GetVisitSummaryService::new(SiteVisitQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    let state = AppState { gallery, content };

    let token_verifier: Arc<dyn TokenVerifier + Send + Sync> = Arc::new(JwtTokenVerifier::new(
        JwtConfig::new(config.jwt_secret.clone(), config.admin_subject.clone()),
    ));

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);
    let max_upload_bytes = upload_policy.max_file_size_bytes;

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(upload_payload_config(max_upload_bytes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::content::adapter::incoming::web::routes as content_routes;
    use crate::gallery::adapter::incoming::web::routes as gallery_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Gallery
    cfg.service(gallery_routes::get_gallery_handler);
    cfg.service(gallery_routes::save_order_handler);
    cfg.service(gallery_routes::preview_order_handler);
    cfg.service(gallery_routes::delete_photo_handler);
    cfg.service(gallery_routes::upload_photo_handler);
    cfg.service(gallery_routes::add_variant_handler);
    cfg.service(gallery_routes::delete_variant_handler);
    cfg.service(gallery_routes::update_description_handler);
    // Content
    cfg.service(content_routes::list_articles_handler);
    cfg.service(content_routes::get_article_handler);
    cfg.service(content_routes::create_article_handler);
    cfg.service(content_routes::delete_article_handler);
    cfg.service(content_routes::get_about_handler);
    cfg.service(content_routes::save_about_handler);
    cfg.service(content_routes::list_wedding_packages_handler);
    cfg.service(content_routes::save_wedding_packages_handler);
    cfg.service(content_routes::record_visit_handler);
    cfg.service(content_routes::visit_summary_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        tracing::error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
