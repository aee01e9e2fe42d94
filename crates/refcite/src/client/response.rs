//! Resolver outcomes keyed by HTTP status.

use std::fmt;

/// What the resolver returned for one DOI.
///
/// `Display` renders the citation text, or a fixed sentinel when there is none.
/// Sentinels are written to output like any other citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitationResponse {
    /// 200: rendered citation text.
    Rendered(String),
    /// 204: the DOI exists but has no metadata.
    NoMetadata,
    /// 404: unknown DOI.
    NotFound,
    /// 406: the requested style or content type is unavailable.
    NotAcceptable,
    /// Any other status.
    Unexpected(u16),
}

impl CitationResponse {
    /// Map a status code and raw body to an outcome. The body is decoded as UTF-8.
    #[must_use]
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        match status {
            200 => Self::Rendered(String::from_utf8_lossy(body).into_owned()),
            204 => Self::NoMetadata,
            404 => Self::NotFound,
            406 => Self::NotAcceptable,
            other => Self::Unexpected(other),
        }
    }

    /// Check if the resolver produced a citation.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    /// Citation text or sentinel string.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Rendered(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CitationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rendered(text) => f.write_str(text),
            Self::NoMetadata => f.write_str("No metadata available."),
            Self::NotFound => f.write_str("DOI not found."),
            Self::NotAcceptable => f.write_str("Cannot serve any requested content type."),
            Self::Unexpected(status) => write!(f, "Unexpected response code: {status}"),
        }
    }
}
