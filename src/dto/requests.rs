use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::codes;

#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(
        required(code = "error.post.title.required"),
        custom(function = title_not_blank)
    )]
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct UpdatePostRequest {
    #[validate(
        required(code = "error.post.title.required"),
        custom(function = title_not_blank)
    )]
    pub title: Option<String>,
    pub content: Option<String>,
}

fn title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new(codes::POST_TITLE_REQUIRED));
    }
    Ok(())
}
