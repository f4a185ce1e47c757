//! Data Transfer Objects - request/response types for the post endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use quill_core::domain::Post;

/// Request to create a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
}

/// Request to update an existing post's body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub body: String,
}

/// A post as sent to the page renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

/// Field-scoped validation errors, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Validate a post submission. Returns the per-field error map; empty means
/// the input is acceptable.
pub fn validate_body(body: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if body.trim().is_empty() {
        errors.insert("body".to_string(), "The body field is required.".to_string());
    }
    errors
}
