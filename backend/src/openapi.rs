use axum::Json;
use utoipa::OpenApi;

use shared::{ErrorResponse, User, UserInput};

/// OpenAPI document for the user API, assembled from the handler
/// annotations in [`crate::rest`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "Uma api simples de usuários",
        version = "1.0.0"
    ),
    paths(
        crate::rest::create_user,
        crate::rest::list_users,
        crate::rest::get_user,
        crate::rest::update_user,
        crate::rest::delete_user,
    ),
    components(schemas(User, UserInput, ErrorResponse)),
    tags((name = "users", description = "Operações CRUD de usuários"))
)]
pub struct ApiDoc;

/// Axum handler for GET /api-docs
pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
