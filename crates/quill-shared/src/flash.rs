//! One-shot flash messages attached to redirect responses.

use serde::{Deserialize, Serialize};

/// Severity tag on a flash message; drives the banner styling client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Warning,
}

/// A single-use feedback message. Created by a handler on a mutating path,
/// carried on the redirect, displayed once by the page renderer, then gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: FlashKind,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FlashKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FlashKind::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FlashKind::Warning,
        }
    }
}
