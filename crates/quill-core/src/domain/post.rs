use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - the single content unit of the blog.
///
/// `id` is assigned by persistence on insert and never changes afterwards;
/// `created_at` is fixed at creation. Only `body` is user-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post as submitted, before persistence has assigned an id.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(title: Option<String>, body: String) -> Self {
        Self {
            title: title.unwrap_or_default(),
            body,
        }
    }
}
