use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use dashmap::DashMap;

use crate::models::{NewPost, Post};

/// Thin gateway over the post store.
///
/// Backed by a thread-safe map plus a store-assigned id sequence. The API is
/// the seam where a SQL-backed gateway would plug in; the service layer only
/// sees these five operations.
#[derive(Clone)]
pub struct PostRepository {
    posts: Arc<DashMap<i64, Post>>,
    next_id: Arc<AtomicI64>,
}

impl PostRepository {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Persist a new post under a freshly assigned id.
    pub fn insert(&self, new_post: NewPost) -> Post {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = Post {
            id,
            title: new_post.title,
            content: new_post.content,
        };
        self.posts.insert(id, post.clone());
        post
    }

    /// Overwrite the row stored under the post's id.
    pub fn save(&self, post: Post) -> Post {
        self.posts.insert(post.id, post.clone());
        post
    }

    /// All rows, in store-defined order.
    pub fn find_all(&self) -> Vec<Post> {
        self.posts.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn find_by_id(&self, id: i64) -> Option<Post> {
        self.posts.get(&id).map(|entry| entry.value().clone())
    }

    /// Remove the row if present; removing an unknown id is a no-op.
    pub fn delete_by_id(&self, id: i64) {
        self.posts.remove(&id);
    }
}

impl Default for PostRepository {
    fn default() -> Self {
        Self::new()
    }
}
