use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{CreateAccountRequest, DeletedResponse},
        Account, Error, Result,
    },
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    get_accounts_handler,
    create_account_handler,
    get_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/account",
            get(get_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/account/:id",
            get(get_account_handler)
                .put(update_account_handler)
                .delete(delete_account_handler)
                .fallback(method_not_allowed_handler),
        )
}

/// Parses an account id path segment. Any integer literal is accepted.
pub fn parse_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|_| Error::Validation(format!("invalid id {raw}")))
}

/// Resolves the `{id}` segment, turning extractor rejections (bad percent-encoding
/// and the like) into the same validation error as a non-integer id.
fn account_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<i32> {
    let Path(raw) = path.map_err(|rejection| Error::Validation(rejection.body_text()))?;
    parse_id(&raw)
}

/// Decodes the request body as JSON whatever `Content-Type` the client sent.
fn decode_body(body: &Bytes) -> Result<CreateAccountRequest> {
    serde_json::from_slice(body)
        .map_err(|e| Error::Decode(format!("invalid request body: {e}")))
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All stored accounts", body = [Account]),
        (status = 500, description = "Database error", body = crate::models::dto::ErrorResponse),
    )
)]
pub async fn get_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>> {
    let accounts = state.db.get_accounts().await?;
    Ok(Json(accounts))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    request_body = CreateAccountRequest,
    responses(
        (status = 202, description = "Account successfully created", body = Account),
        (status = 400, description = "Malformed request body", body = crate::models::dto::ErrorResponse),
        (status = 422, description = "Invalid account details", body = crate::models::dto::ErrorResponse),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Account>)> {
    let body = decode_body(&body)?;
    body.validate()?;

    let account = state.db.create_account(&body.into_new_account()).await?;
    info!(
        "Created account {} (number {})",
        account.id, account.account_number
    );
    Ok((StatusCode::ACCEPTED, Json(account)))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = Account),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorResponse),
        (status = 422, description = "Invalid account ID", body = crate::models::dto::ErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Account>> {
    let id = account_id(id)?;
    let account = state.db.get_account_by_id(id).await?;
    Ok(Json(account))
}

/// Update account handler function
#[utoipa::path(
    put,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account successfully updated", body = Account),
        (status = 400, description = "Malformed request body", body = crate::models::dto::ErrorResponse),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorResponse),
        (status = 422, description = "Invalid account ID or details", body = crate::models::dto::ErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    id: std::result::Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Account>> {
    let id = account_id(id)?;
    let body = decode_body(&body)?;
    body.validate()?;

    let account = state.db.update_account(id, &body).await?;
    info!("Updated account {}", account.id);
    Ok(Json(account))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account deleted, or already absent", body = DeletedResponse),
        (status = 422, description = "Invalid account ID", body = crate::models::dto::ErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>> {
    let id = account_id(id)?;
    if state.db.delete_account(id).await? {
        info!("Deleted account {}", id);
    } else {
        debug!("Delete of absent account {}", id);
    }
    Ok(Json(DeletedResponse { deleted: id }))
}

async fn method_not_allowed_handler(method: Method) -> Error {
    Error::MethodNotAllowed(method)
}
