// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response arrived but is not a usable page.
    #[error("unusable response: status {status}, content type {}", .content_type.as_deref().unwrap_or("<none>"))]
    BadResponse {
        status: u16,
        content_type: Option<String>,
    },

    /// The page parsed but has no game locations section.
    #[error("no game locations section on the page for {entity:?}")]
    SectionNotFound { entity: String },

    /// The locations section does not follow the nested-table convention.
    #[error("unexpected table layout: missing {expected}")]
    StructuralMismatch { expected: &'static str },

    #[error("empty input")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn mismatch(expected: &'static str) -> Self {
        ScrapeError::StructuralMismatch { expected }
    }

    /// True for failures that mean "no such page", as opposed to "page we can't read".
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Http(_) | ScrapeError::BadResponse { .. })
    }
}
