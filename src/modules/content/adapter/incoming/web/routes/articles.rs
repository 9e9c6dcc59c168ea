use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    content::application::{
        domain::entities::Article,
        ports::incoming::use_cases::{
            ArticleFields, CreateArticleCommand, CreateArticleCommandError, CreateArticleError,
            DeleteArticleError, GetArticleError, ListArticlesError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[schema(example = "Bröllop på Fotografiska")]
    pub title: String,
    /// Generated from the title when omitted.
    #[schema(example = "brollop-pa-fotografiska")]
    pub slug: Option<String>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    #[schema(example = "maj 2024")]
    pub published_date: Option<String>,
    #[serde(default)]
    pub position: i32,
}

impl From<CreateArticleRequest> for ArticleFields {
    fn from(req: CreateArticleRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            publisher: req.publisher,
            description: req.description,
            image_url: req.image_url,
            link_url: req.link_url,
            published_date: req.published_date,
            position: req.position,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// List articles, newest first
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "content",
    responses(
        (status = 200, description = "All articles", body = inline(SuccessResponse<Vec<Article>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/articles")]
pub async fn list_articles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_articles.execute().await {
        Ok(articles) => ApiResponse::success(articles),
        Err(ListArticlesError::RepositoryError(msg)) => {
            tracing::error!("Listing articles failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Get one article by slug
#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    tag = "content",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article found", body = inline(SuccessResponse<Article>)),
        (status = 404, description = "No article with this slug", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/articles/{slug}")]
pub async fn get_article_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.content.get_article.execute(&slug).await {
        Ok(article) => ApiResponse::success(article),
        Err(GetArticleError::NotFound) => article_not_found(),
        Err(GetArticleError::RepositoryError(msg)) => {
            tracing::error!("Loading article '{}' failed: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}

/// Create an article
#[utoipa::path(
    post,
    path = "/api/admin/articles",
    tag = "admin",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created", body = inline(SuccessResponse<Article>)),
        (status = 400, description = "Missing title or invalid slug", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/articles")]
pub async fn create_article_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateArticleRequest>,
) -> impl Responder {
    let command = match CreateArticleCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.content.create_article.execute(command).await {
        Ok(article) => ApiResponse::created(article),
        Err(err) => map_create_error(err),
    }
}

/// Delete an article
#[utoipa::path(
    delete,
    path = "/api/admin/articles/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 400, description = "Id is not a UUID", body = ErrorResponse),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/articles/{id}")]
pub async fn delete_article_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(path.trim()) else {
        return ApiResponse::bad_request("INVALID_ARTICLE_ID", "Article id must be a UUID");
    };

    match data.content.delete_article.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteArticleError::NotFound) => article_not_found(),
        Err(DeleteArticleError::RepositoryError(msg)) => {
            tracing::error!("Deleting article {} failed: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn article_not_found() -> HttpResponse {
    ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
}

fn map_command_error(err: CreateArticleCommandError) -> HttpResponse {
    match err {
        CreateArticleCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", &err.to_string())
        }
        CreateArticleCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", &err.to_string())
        }
        CreateArticleCommandError::InvalidSlug(_) => {
            ApiResponse::bad_request("INVALID_SLUG", &err.to_string())
        }
    }
}

fn map_create_error(err: CreateArticleError) -> HttpResponse {
    match err {
        CreateArticleError::SlugTaken(slug) => ApiResponse::conflict(
            "SLUG_TAKEN",
            &format!("Slug '{}' is already used by another article", slug),
        ),
        CreateArticleError::RepositoryError(msg) => {
            tracing::error!("Creating article failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
