use validator::Validate;

use crate::{
    dto::{CreatePostRequest, UpdatePostRequest},
    errors::ApiError,
    models::{NewPost, Post},
    repository::PostRepository,
};

/// Business rules for posts: a required title and an existence check. All
/// persistence goes through the repository.
#[derive(Clone)]
pub struct PostService {
    repository: PostRepository,
}

impl PostService {
    pub fn new(repository: PostRepository) -> Self {
        Self { repository }
    }

    pub fn create(&self, request: CreatePostRequest) -> Result<Post, ApiError> {
        request.validate()?;

        Ok(self.repository.insert(NewPost {
            // validate() guarantees a present, non-blank title
            title: request.title.unwrap_or_default(),
            content: request.content,
        }))
    }

    pub fn find_all(&self) -> Vec<Post> {
        self.repository.find_all()
    }

    pub fn find_by_id(&self, id: i64) -> Result<Post, ApiError> {
        self.repository.find_by_id(id).ok_or(ApiError::NotFound)
    }

    /// Overwrites title and content wholesale; content is cleared when the
    /// request carries none.
    pub fn update(&self, id: i64, request: UpdatePostRequest) -> Result<Post, ApiError> {
        request.validate()?;

        let existing = self.find_by_id(id)?;

        Ok(self.repository.save(Post {
            id: existing.id,
            title: request.title.unwrap_or_default(),
            content: request.content,
        }))
    }

    /// Deleting an unknown id is a silent success.
    pub fn delete(&self, id: i64) {
        self.repository.delete_by_id(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::codes;

    fn service() -> PostService {
        PostService::new(PostRepository::new())
    }

    fn create_request(title: Option<&str>, content: Option<&str>) -> CreatePostRequest {
        CreatePostRequest {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    fn update_request(title: Option<&str>, content: Option<&str>) -> UpdatePostRequest {
        UpdatePostRequest {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn create_persists_and_returns_the_post() {
        let service = service();

        let created = service
            .create(create_request(Some("Hello"), Some("World")))
            .unwrap();

        let found = service.find_by_id(created.id).unwrap();
        assert_eq!(found.title, "Hello");
        assert_eq!(found.content.as_deref(), Some("World"));
    }

    #[test]
    fn create_rejects_a_blank_title() {
        let service = service();

        let error = service
            .create(create_request(Some("  "), None))
            .unwrap_err();

        assert_eq!(error.code(), codes::POST_TITLE_REQUIRED);
    }

    #[test]
    fn create_rejects_an_absent_title() {
        let service = service();

        let error = service.create(create_request(None, Some("body"))).unwrap_err();

        assert_eq!(error.code(), codes::POST_TITLE_REQUIRED);
    }

    #[test]
    fn find_by_id_fails_for_unknown_ids() {
        let service = service();

        let error = service.find_by_id(999).unwrap_err();

        assert!(matches!(error, ApiError::NotFound));
    }

    #[test]
    fn find_all_on_an_empty_store_is_empty() {
        assert!(service().find_all().is_empty());
    }

    #[test]
    fn update_overwrites_title_and_clears_absent_content() {
        let service = service();
        let created = service
            .create(create_request(Some("Hello"), Some("World")))
            .unwrap();

        let updated = service
            .update(created.id, update_request(Some("Bye"), None))
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Bye");
        assert_eq!(updated.content, None);
        assert_eq!(service.find_by_id(created.id).unwrap(), updated);
    }

    #[test]
    fn update_fails_for_unknown_ids() {
        let service = service();

        let error = service
            .update(999, update_request(Some("Bye"), None))
            .unwrap_err();

        assert!(matches!(error, ApiError::NotFound));
    }

    #[test]
    fn update_rejects_a_blank_title() {
        let service = service();
        let created = service.create(create_request(Some("Hello"), None)).unwrap();

        let error = service
            .update(created.id, update_request(Some(""), None))
            .unwrap_err();

        assert_eq!(error.code(), codes::POST_TITLE_REQUIRED);
    }

    #[test]
    fn delete_is_idempotent() {
        let service = service();
        let created = service.create(create_request(Some("Hello"), None)).unwrap();

        service.delete(created.id);
        service.delete(created.id);

        assert!(matches!(
            service.find_by_id(created.id),
            Err(ApiError::NotFound)
        ));
    }
}
