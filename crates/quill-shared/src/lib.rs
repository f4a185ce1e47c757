//! # Quill Shared
//!
//! Types shared between the server and the page renderer.
//! In a full-stack Rust setup, this crate is compiled for both server and WASM.

pub mod dto;
pub mod flash;
pub mod pagination;
pub mod props;
pub mod response;

pub use flash::{Flash, FlashKind};
pub use pagination::{PageMarker, Paginated, page_window};
pub use props::{Page, PageProps};
pub use response::ErrorResponse;
