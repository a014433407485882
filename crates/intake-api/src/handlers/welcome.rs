use axum::{response::IntoResponse, Json};

/// Root welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Welcome message"))
)]
pub async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to Patient Registration API" }))
}
