//! Handler outcomes: render a page or redirect with a flash message.
//!
//! Every post handler resolves to one of these two shapes. A redirect carries
//! at most one flash, written as a one-shot cookie; the next rendered page
//! consumes the cookie, attaches the flash to its payload, and clears it so
//! an unrelated later navigation cannot re-display the message.

use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use quill_shared::flash::Flash;
use quill_shared::props::{Page, PageProps};

/// Cookie carrying the pending flash across one redirect.
pub const FLASH_COOKIE: &str = "quill_flash";

/// What a handler decided to do with the request.
#[derive(Debug)]
pub enum Outcome {
    /// Deliver a page payload to the renderer.
    Render(PageProps),
    /// Redirect (303 See Other) and hand the flash to the next render.
    Redirect { location: String, flash: Flash },
}

impl Outcome {
    pub fn render(props: PageProps) -> Self {
        Outcome::Render(props)
    }

    pub fn redirect(location: impl Into<String>, flash: Flash) -> Self {
        Outcome::Redirect {
            location: location.into(),
            flash,
        }
    }
}

impl Responder for Outcome {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Outcome::Render(props) => {
                let flash = take_flash(req);
                let consumed = flash.is_some();
                let mut builder = HttpResponse::Ok();
                if consumed {
                    let mut removal = Cookie::new(FLASH_COOKIE, "");
                    removal.set_path("/");
                    removal.make_removal();
                    builder.cookie(removal);
                }
                builder.json(Page::new(props).with_flash(flash))
            }
            Outcome::Redirect { location, flash } => {
                let mut builder = HttpResponse::SeeOther();
                builder.insert_header((header::LOCATION, location));
                match encode_flash(&flash) {
                    Ok(value) => {
                        builder.cookie(
                            Cookie::build(FLASH_COOKIE, value)
                                .path("/")
                                .http_only(true)
                                .finish(),
                        );
                    }
                    Err(e) => {
                        tracing::error!("Failed to encode flash cookie: {e}");
                    }
                }
                builder.finish()
            }
        }
    }
}

/// Pull the pending flash off the request, if any. Undecodable cookies are
/// treated as absent.
fn take_flash(req: &HttpRequest) -> Option<Flash> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    decode_flash(cookie.value())
}

fn encode_flash(flash: &Flash) -> Result<String, serde_json::Error> {
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(flash)?))
}

fn decode_flash(value: &str) -> Option<Flash> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}
