//! Home page handler.

use quill_shared::props::PageProps;

use crate::outcome::Outcome;

/// GET /
///
/// The home page carries no server data; the clock it shows runs on a
/// client-side interval timer.
pub async fn home() -> Outcome {
    Outcome::render(PageProps::Home {})
}
