use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every 2xx body: `{ "success": true, "data": ... }`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every 4xx/5xx body produced by the handlers and the
/// extractor configs.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable, upper snake case; clients branch on this.
    #[schema(example = "GALLERY_UNAVAILABLE")]
    pub code: String,

    #[schema(example = "Gallery is temporarily unavailable")]
    pub message: String,
}
