use crate::{i18n::MessageCatalog, repository::PostRepository, service::PostService};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
#[derive(Clone)]
pub struct AppState {
    pub service: PostService,
    pub catalog: Arc<MessageCatalog>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            service: PostService::new(PostRepository::new()),
            catalog: Arc::new(MessageCatalog::load()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
