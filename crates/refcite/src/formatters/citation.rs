//! Citation line formatting.
//!
//! Synthesized lines follow one template:
//!
//! ```text
//! {Authors} ({Publication year}). {Title}. {Vol(issue)}. {pagination}. {URL}|{catalogue link}
//! ```
//!
//! Locator-less records leave the URL segment empty but keep the `|` separator, so
//! every line ends in `|{catalogue link}` for downstream parsers.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ReferenceRecord, UrlRecord};

/// Matches URL-like substrings embedded in resolver output.
static EMBEDDED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("valid embedded URL regex pattern"));

/// Borrowed view of the fields the template needs.
#[derive(Debug, Clone, Copy)]
struct CitationFields<'a> {
    authors: &'a str,
    publication_year: &'a str,
    title: &'a str,
    volume_issue: &'a str,
    pagination: &'a str,
    url: &'a str,
    catalogue_link: &'a str,
}

impl CitationFields<'_> {
    fn line(self) -> String {
        format!(
            "{} ({}). {}. {}. {}. {}|{}\n",
            self.authors,
            self.publication_year,
            self.title,
            self.volume_issue,
            self.pagination,
            self.url,
            self.catalogue_link
        )
    }
}

/// Format a generic-URL record as one newline-terminated line.
#[must_use]
pub fn format_url_citation(record: &UrlRecord) -> String {
    CitationFields {
        authors: &record.authors,
        publication_year: &record.publication_year,
        title: &record.title,
        volume_issue: &record.volume_issue,
        pagination: &record.pagination,
        url: &record.url,
        catalogue_link: &record.catalogue_link,
    }
    .line()
}

/// Format a locator-less record as one newline-terminated line.
///
/// The URL segment is always empty, even if the record happens to carry one.
#[must_use]
pub fn format_no_url_citation(record: &ReferenceRecord) -> String {
    CitationFields {
        authors: &record.authors,
        publication_year: &record.publication_year,
        title: &record.title,
        volume_issue: &record.volume_issue,
        pagination: &record.pagination,
        url: "",
        catalogue_link: &record.catalogue_link,
    }
    .line()
}

/// Strip embedded links from a rendered citation and trim it.
#[must_use]
pub fn clean_resolved_citation(citation: &str) -> String {
    EMBEDDED_URL.replace_all(citation, "").trim().to_string()
}

/// Format a resolved DOI citation line: `{citation}|{doi}|{catalogue link}`.
#[must_use]
pub fn format_doi_line(citation: &str, doi: &str, catalogue_link: &str) -> String {
    format!("{}|{doi}|{catalogue_link}\n", clean_resolved_citation(citation))
}
