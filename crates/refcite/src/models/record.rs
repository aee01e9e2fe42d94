//! Reference record models matching the input table's columns.

use serde::Deserialize;

use super::LocatorKind;

/// One row of the reference table.
///
/// Optional columns that are absent from the file deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReferenceRecord {
    /// Zero-based position of the row in the source table.
    #[serde(skip)]
    pub row: usize,

    /// Author list, already formatted.
    #[serde(rename = "Authors", default)]
    pub authors: String,

    /// Publication year as written in the table.
    #[serde(rename = "Publication year", default)]
    pub publication_year: String,

    /// Title.
    #[serde(rename = "Title", default)]
    pub title: String,

    /// DOI link, generic URL, or nothing.
    #[serde(rename = "URL", default)]
    pub url: Option<String>,

    /// Volume and issue, or report number.
    #[serde(rename = "Vol(issue)/Report no", default)]
    pub volume_issue: String,

    /// Page range.
    #[serde(rename = "pagination", default)]
    pub pagination: String,

    /// Catalogue cross-reference, always carried into output.
    #[serde(rename = "catalogue link", default)]
    pub catalogue_link: String,

    /// Collection key for locator-less records.
    #[serde(rename = "Dataset", default)]
    pub dataset: String,
}

impl ReferenceRecord {
    /// Classify this record by its `URL` cell.
    #[must_use]
    pub fn locator(&self) -> LocatorKind {
        LocatorKind::of(self.url.as_deref())
    }

    /// URL cell, or an empty string.
    #[must_use]
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// A row whose `URL` points at doi.org.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoiRecord {
    /// Source row index.
    pub row: usize,
    /// The DOI link exactly as written in the table.
    pub url: String,
    /// Catalogue cross-reference.
    pub catalogue_link: String,
}

impl From<&ReferenceRecord> for DoiRecord {
    fn from(record: &ReferenceRecord) -> Self {
        Self {
            row: record.row,
            url: record.url_or_empty().to_string(),
            catalogue_link: record.catalogue_link.clone(),
        }
    }
}

/// A row with a non-DOI URL. Carries the fields needed to synthesize a citation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRecord {
    pub row: usize,
    pub authors: String,
    pub publication_year: String,
    pub title: String,
    pub url: String,
    pub volume_issue: String,
    pub pagination: String,
    pub catalogue_link: String,
}

impl From<&ReferenceRecord> for UrlRecord {
    fn from(record: &ReferenceRecord) -> Self {
        Self {
            row: record.row,
            authors: record.authors.clone(),
            publication_year: record.publication_year.clone(),
            title: record.title.clone(),
            url: record.url_or_empty().to_string(),
            volume_issue: record.volume_issue.clone(),
            pagination: record.pagination.clone(),
            catalogue_link: record.catalogue_link.clone(),
        }
    }
}
