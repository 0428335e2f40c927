use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::openapi::api_docs;
use crate::store::{StoreError, UserStore};
use shared::{ErrorResponse, User, UserInput};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

/// Build the application router: the `/users` resource plus the OpenAPI
/// document at `/api-docs`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api-docs", get(api_docs))
        .with_state(state)
}

/// Axum handler for POST /users
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserInput,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Campo obrigatório ausente ou inválido", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(fields): Json<Map<String, Value>>,
) -> Response {
    info!("POST /users");

    match state.store.create(fields) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler for GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Lista de usuários", body = [User]),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Response {
    info!("GET /users");

    (StatusCode::OK, Json(state.store.list())).into_response()
}

/// Axum handler for GET /users/:id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = User),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse),
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    info!("GET /users/{}", id);

    match parse_id(&id).and_then(|id| state.store.get(id)) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler for PUT /users/:id
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "ID do usuário")),
    request_body = UserInput,
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 400, description = "Campo inválido", body = ErrorResponse),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Response {
    info!("PUT /users/{}", id);

    match parse_id(&id).and_then(|id| state.store.update(id, fields)) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler for DELETE /users/:id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário deletado"),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse),
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    info!("DELETE /users/{}", id);

    match parse_id(&id).and_then(|id| state.store.delete(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

// A non-numeric id never matches a record, so it reads as a plain miss.
fn parse_id(raw: &str) -> Result<u64, StoreError> {
    raw.parse().map_err(|_| StoreError::NotFound)
}

fn error_response(err: StoreError) -> Response {
    let status = match err {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
        }),
    )
        .into_response()
}
