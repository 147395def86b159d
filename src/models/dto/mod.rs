pub mod account;
pub mod message;
pub use account::*;
pub use message::*;

use crate::models::Account;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    CreateAccountRequest,
    DeletedResponse,
    ErrorResponse,
    Message,
    Account,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
