//! Enumeration types for record classification.

/// Substring that marks a URL as a DOI link.
pub const DOI_HOST_MARKER: &str = "doi.org";

/// Which kind of locator a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    /// URL resolvable through doi.org.
    Doi,
    /// Any other non-empty URL.
    Url,
    /// Empty or missing URL.
    None,
}

impl LocatorKind {
    /// Classify a `URL` cell. Only an empty cell counts as missing; whitespace is a URL.
    #[must_use]
    pub fn of(url: Option<&str>) -> Self {
        match url {
            Some("") => Self::None,
            Some(u) if u.contains(DOI_HOST_MARKER) => Self::Doi,
            Some(_) => Self::Url,
            None => Self::None,
        }
    }

    /// Check if the record has no locator at all.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
