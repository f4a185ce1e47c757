//! Post resource handlers.
//!
//! Each operation ends in one of two ways: a page render or a redirect with
//! a flash. Persistence failures on these paths are caught here and turned
//! into a redirect back to the referring page with an error flash; the only
//! failure that propagates is a missing id, which surfaces as a 404.

use actix_web::{Either, HttpRequest, http::header, web};
use serde::Deserialize;

use quill_core::domain::PostDraft;
use quill_core::error::RepoError;
use quill_shared::dto::{PostResponse, StorePostRequest, UpdatePostRequest, validate_body};
use quill_shared::flash::Flash;
use quill_shared::pagination::{PER_PAGE, Paginated};
use quill_shared::props::{CreateProps, EditProps, IndexProps, PageProps, ShowProps};

use crate::middleware::error::{AppError, AppResult};
use crate::outcome::Outcome;
use crate::state::AppState;

/// Base path of the post listing; redirect target for every mutation.
const POSTS_PATH: &str = "/posts";

/// Submissions arrive as JSON from the page renderer, or urlencoded from a
/// plain HTML form.
type Submission<T> = Either<web::Json<T>, web::Form<T>>;

fn submitted<T>(submission: Submission<T>) -> T {
    match submission {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Redirect back to the referring page carrying the failure as an error
/// flash. The failure's message text is shown to the user as-is.
fn flash_back(req: &HttpRequest, err: RepoError) -> Outcome {
    tracing::warn!("Persistence failure on {}: {}", req.path(), err);
    Outcome::redirect(back_location(req), Flash::error(err.to_string()))
}

fn back_location(req: &HttpRequest) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| POSTS_PATH.to_string())
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

/// GET /posts
pub async fn index(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> Outcome {
    let page = query.page.unwrap_or(1).max(1);

    match state.posts.page(page, PER_PAGE).await {
        Ok(post_page) => Outcome::render(PageProps::Index(IndexProps {
            posts: Paginated::new(
                post_page.posts.iter().map(PostResponse::from).collect(),
                post_page.current_page,
                post_page.last_page,
                post_page.total,
                POSTS_PATH,
            ),
        })),
        Err(e) => flash_back(&req, e),
    }
}

/// GET /posts/create
pub async fn create() -> Outcome {
    Outcome::render(PageProps::Create(CreateProps::default()))
}

/// POST /posts
pub async fn store(
    state: web::Data<AppState>,
    req: HttpRequest,
    submission: Submission<StorePostRequest>,
) -> Outcome {
    let input = submitted(submission);

    let errors = validate_body(&input.body);
    if !errors.is_empty() {
        // Field errors go back to the form with the entered values intact.
        return Outcome::render(PageProps::Create(CreateProps {
            title: input.title,
            body: input.body,
            errors,
        }));
    }

    match state
        .posts
        .insert(PostDraft::new(input.title, input.body))
        .await
    {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created");
            Outcome::redirect(POSTS_PATH, Flash::success("Post created successfully."))
        }
        Err(e) => flash_back(&req, e),
    }
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> AppResult<Outcome> {
    let id = path.into_inner();

    match state.posts.find_by_id(id).await {
        Ok(Some(post)) => Ok(Outcome::render(PageProps::Show(ShowProps {
            post: (&post).into(),
        }))),
        Ok(None) => Err(AppError::NotFound(format!("Post with id {id} not found"))),
        Err(e) => Ok(flash_back(&req, e)),
    }
}

/// GET /posts/{id}/edit
pub async fn edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> AppResult<Outcome> {
    let id = path.into_inner();

    match state.posts.find_by_id(id).await {
        Ok(Some(post)) => {
            let body = post.body.clone();
            Ok(Outcome::render(PageProps::Edit(EditProps {
                post: (&post).into(),
                body,
                errors: Default::default(),
            })))
        }
        Ok(None) => Err(AppError::NotFound(format!("Post with id {id} not found"))),
        Err(e) => Ok(flash_back(&req, e)),
    }
}

/// PUT/PATCH /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    submission: Submission<UpdatePostRequest>,
) -> AppResult<Outcome> {
    let id = path.into_inner();
    let input = submitted(submission);

    let errors = validate_body(&input.body);
    if !errors.is_empty() {
        // Re-render the edit form with the rejected value still in place.
        return match state.posts.find_by_id(id).await {
            Ok(Some(post)) => Ok(Outcome::render(PageProps::Edit(EditProps {
                post: (&post).into(),
                body: input.body,
                errors,
            }))),
            Ok(None) => Err(AppError::NotFound(format!("Post with id {id} not found"))),
            Err(e) => Ok(flash_back(&req, e)),
        };
    }

    match state.posts.update_body(id, &input.body).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post updated");
            Ok(Outcome::redirect(
                POSTS_PATH,
                Flash::success("Post updated successfully."),
            ))
        }
        Err(RepoError::NotFound) => Err(AppError::NotFound(format!("Post with id {id} not found"))),
        Err(e) => Ok(flash_back(&req, e)),
    }
}

/// DELETE /posts/{id}
///
/// Deletion is gated behind `deletion_enabled`. With the flag off the record
/// stays in storage while the response still reports success, preserving the
/// behavior this application shipped with.
pub async fn destroy(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Outcome {
    let id = path.into_inner();

    if state.deletion_enabled {
        match state.posts.delete(id).await {
            Ok(()) => tracing::info!(post_id = id, "Post deleted"),
            Err(e) => return flash_back(&req, e),
        }
    } else {
        tracing::debug!(post_id = id, "Deletion disabled; record left in place");
    }

    Outcome::redirect(POSTS_PATH, Flash::success("Post deleted successfully."))
}
