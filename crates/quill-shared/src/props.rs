//! The props bridge between handlers and the page renderer.
//!
//! Pages form a closed set: each variant names one client component and
//! carries the strongly-typed props that component expects. The serialized
//! shape is `{ component, props, flash? }`, which the client-side resolver
//! uses to mount the matching page.

use serde::Serialize;

use crate::dto::{FieldErrors, PostResponse};
use crate::flash::Flash;
use crate::pagination::Paginated;

/// Props for the post listing page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexProps {
    pub posts: Paginated<PostResponse>,
}

/// Props for the post detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ShowProps {
    pub post: PostResponse,
}

/// Props for the creation form: the entered values (retained across a failed
/// validation) plus any field errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProps {
    pub title: Option<String>,
    pub body: String,
    pub errors: FieldErrors,
}

/// Props for the edit form: the post under edit, the current form value for
/// `body`, and any field errors.
#[derive(Debug, Clone, Serialize)]
pub struct EditProps {
    pub post: PostResponse,
    pub body: String,
    pub errors: FieldErrors,
}

/// The closed set of renderable pages.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageProps {
    Home {},
    Index(IndexProps),
    Create(CreateProps),
    Show(ShowProps),
    Edit(EditProps),
}

impl PageProps {
    /// Client component name this page resolves to.
    pub fn component(&self) -> &'static str {
        match self {
            PageProps::Home {} => "home",
            PageProps::Index(_) => "index",
            PageProps::Create(_) => "create",
            PageProps::Show(_) => "show",
            PageProps::Edit(_) => "edit",
        }
    }
}

/// A complete page payload as delivered to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub component: &'static str,
    pub props: PageProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

impl Page {
    pub fn new(props: PageProps) -> Self {
        Self {
            component: props.component(),
            props,
            flash: None,
        }
    }

    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_serializes_with_empty_props() {
        let json = serde_json::to_value(Page::new(PageProps::Home {})).unwrap();
        assert_eq!(json["component"], "home");
        assert_eq!(json["props"], serde_json::json!({}));
        assert!(json.get("flash").is_none());
    }

    #[test]
    fn flash_rides_along_when_present() {
        let page = Page::new(PageProps::Home {}).with_flash(Some(Flash::success("done")));
        let json = serde_json::to_value(page).unwrap();
        assert_eq!(json["flash"]["type"], "success");
    }

    #[test]
    fn create_props_keep_entered_values_and_errors() {
        let props = PageProps::Create(CreateProps {
            title: Some("draft".into()),
            body: String::new(),
            errors: crate::dto::validate_body(""),
        });
        assert_eq!(props.component(), "create");

        let json = serde_json::to_value(Page::new(props)).unwrap();
        assert_eq!(json["props"]["title"], "draft");
        assert_eq!(json["props"]["errors"]["body"], "The body field is required.");
    }
}
