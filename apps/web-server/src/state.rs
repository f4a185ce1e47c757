//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use quill_infra::database::{DatabaseConnections, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub deletion_enabled: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        Arc::new(PostgresPostRepository::new(connections.main))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!(
            deletion_enabled = config.deletion_enabled,
            "Application state initialized"
        );

        Self::with_repo(posts, config.deletion_enabled)
    }

    /// Assemble state around an already-built repository.
    pub fn with_repo(posts: Arc<dyn PostRepository>, deletion_enabled: bool) -> Self {
        Self {
            posts,
            deletion_enabled,
        }
    }
}
