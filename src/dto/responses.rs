use serde::Serialize;

/// Uniform error envelope: a stable code plus a locale-resolved message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
