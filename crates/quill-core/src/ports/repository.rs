use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Generic repository trait defining the operations every entity supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// One page of posts plus the paginator counters needed to build page links.
#[derive(Debug, Clone)]
pub struct PostPage {
    /// Posts in descending-id order.
    pub posts: Vec<Post>,
    /// 1-based page that was fetched.
    pub current_page: u64,
    /// Highest page number; 1 even when the table is empty.
    pub last_page: u64,
    /// Total number of posts across all pages.
    pub total: u64,
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Insert a draft, returning the stored post with its assigned id.
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Replace the body of an existing post.
    async fn update_body(&self, id: i64, body: &str) -> Result<Post, RepoError>;

    /// Fetch one page of posts, newest id first. Pages are 1-based; a page
    /// past the end yields an empty `posts` vec.
    async fn page(&self, page: u64, per_page: u64) -> Result<PostPage, RepoError>;
}
