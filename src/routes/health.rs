use crate::models::api::ApiResponse;
use axum::Json;

pub async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok("UP"))
}
