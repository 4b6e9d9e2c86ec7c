mod requests;
mod responses;

pub use requests::{CreatePostRequest, UpdatePostRequest};
pub use responses::ErrorResponse;
