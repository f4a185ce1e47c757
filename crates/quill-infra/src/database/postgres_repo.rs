//! PostgreSQL repository implementation for posts.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
};

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::{PostPage, PostRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn query_err(e: sea_orm::DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            title: Set(draft.title),
            body: Set(draft.body),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(query_err)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update_body(&self, id: i64, body: &str) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.into_active_model();
        active.body = Set(body.to_string());
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn page(&self, page: u64, per_page: u64) -> Result<PostPage, RepoError> {
        let paginator = PostEntity::find()
            .order_by_desc(post::Column::Id)
            .paginate(&self.db, per_page);

        let counts = paginator.num_items_and_pages().await.map_err(query_err)?;
        // SeaORM pages are 0-based; the HTTP surface is 1-based. Clamp so an
        // absurd page number cannot overflow the offset arithmetic downstream.
        let fetch = page.saturating_sub(1).min(counts.number_of_pages);
        let models = paginator.fetch_page(fetch).await.map_err(query_err)?;

        Ok(PostPage {
            posts: models.into_iter().map(Into::into).collect(),
            current_page: page,
            last_page: counts.number_of_pages.max(1),
            total: counts.number_of_items,
        })
    }
}
