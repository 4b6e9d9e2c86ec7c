use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::{
    dto::ErrorResponse,
    i18n::{MessageCatalog, requested_locales},
};

/// Stable error codes, doubling as message catalog keys.
pub mod codes {
    pub const POST_NOT_FOUND: &str = "error.post.notFound";
    pub const POST_TITLE_REQUIRED: &str = "error.post.title.required";
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(Cow<'static, str>),
}

impl ApiError {
    pub fn code(&self) -> &str {
        match self {
            ApiError::NotFound => codes::POST_NOT_FOUND,
            ApiError::Validation(code) => code,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        // The first violation's code names the message, like a constraint
        // message template.
        let code = errors
            .field_errors()
            .into_values()
            .flat_map(|violations| violations.iter())
            .next()
            .map_or(Cow::Borrowed(codes::POST_TITLE_REQUIRED), |violation| {
                violation.code.clone()
            });

        ApiError::Validation(code)
    }
}

/// Marker stashed in response extensions for [`translate_errors`] to pick up.
#[derive(Clone)]
struct ErrorCode(Cow<'static, str>);

/// Convert our custom errors to HTTP responses
///
/// Only the status and error code are set here; the localized body is
/// attached by the [`translate_errors`] layer, which knows the caller's
/// locale.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Cow::Borrowed(codes::POST_NOT_FOUND),
            ),
            ApiError::Validation(code) => (StatusCode::BAD_REQUEST, code),
        };

        let mut response = status.into_response();
        response.extensions_mut().insert(ErrorCode(code));
        response
    }
}

/// Cross-cutting error translation layer.
///
/// Responses carrying an [`ErrorCode`] are rewritten into the uniform
/// `{code, message}` envelope, with the message resolved against the catalog
/// for the locales requested via `Accept-Language`. Everything else passes
/// through untouched: unmapped failures (malformed JSON, bad path params,
/// panics) keep the runtime's own response. There is deliberately no
/// catch-all mapping to a generic error body.
pub async fn translate_errors(
    State(catalog): State<Arc<MessageCatalog>>,
    request: Request,
    next: Next,
) -> Response {
    let requested = requested_locales(request.headers());

    let mut response = next.run(request).await;

    let Some(ErrorCode(code)) = response.extensions_mut().remove::<ErrorCode>() else {
        return response;
    };

    let message = catalog.resolve(&code, &requested);

    (
        response.status(),
        Json(ErrorResponse {
            code: code.into_owned(),
            message,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct TitleOnly {
        #[validate(required(code = "error.post.title.required"))]
        title: Option<String>,
    }

    #[test]
    fn validation_errors_surface_the_violation_code() {
        let errors = TitleOnly { title: None }.validate().unwrap_err();
        let error = ApiError::from(errors);

        assert_eq!(error.code(), codes::POST_TITLE_REQUIRED);
    }

    #[test]
    fn not_found_maps_to_its_code() {
        assert_eq!(ApiError::NotFound.code(), codes::POST_NOT_FOUND);
    }

    #[test]
    fn responses_carry_status_and_code() {
        let response = ApiError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorCode>().is_some());
    }
}
