use axum::Json;
use utoipa::OpenApi;

use crate::models::dto;

#[derive(OpenApi)]
#[openapi(info(
    title = "Bank Account API",
    description = "CRUD over bank accounts backed by PostgreSQL",
))]
struct Api;

/// Builds the OpenAPI document, merging in the DTO schemas and the paths
/// declared by each route module.
pub fn build_documentation() -> utoipa::openapi::OpenApi {
    let mut api_docs = Api::openapi();
    api_docs.merge(dto::OpenApiSchemas::openapi());
    api_docs.merge(super::health::HealthApi::openapi());
    api_docs.merge(super::account::AccountsApi::openapi());
    api_docs
}

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(build_documentation())
}
