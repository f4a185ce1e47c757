//! # Quill Infra
//!
//! Infrastructure adapters for the Quill blog: the Postgres repository and
//! the in-memory fallback used when no database is configured.

pub mod database;
