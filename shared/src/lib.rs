use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-assigned identifier, unique and never reused
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Maria")]
    pub name: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
    /// Extra fields supplied by the client, stored verbatim
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Fields required when creating a user. Extra fields beyond these are
/// accepted and stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserInput {
    #[schema(example = "Maria")]
    pub name: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
}

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Usuário não encontrado")]
    pub message: String,
}
