//! In-memory post repository - used as fallback when no database is
//! configured. Note: data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostPage, PostRepository};

/// Post store backed by a `BTreeMap` behind an async RwLock, with ids handed
/// out by an atomic counter. Each operation touches a single row under one
/// lock acquisition, matching the single-row atomicity the Postgres store
/// provides.
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title,
            body: draft.body,
            created_at: now,
            updated_at: now,
        };

        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_body(&self, id: i64, body: &str) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.body = body.to_string();
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn page(&self, page: u64, per_page: u64) -> Result<PostPage, RepoError> {
        let store = self.store.read().await;
        let total = store.len() as u64;
        let last_page = total.div_ceil(per_page).max(1);

        // Saturate: an absurd page number is an empty page, not a panic.
        let skip = page.saturating_sub(1).saturating_mul(per_page);
        let posts = store
            .values()
            .rev()
            .skip(skip as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(PostPage {
            posts,
            current_page: page,
            last_page,
            total,
        })
    }
}
