//! DOI citation resolver.
//!
//! Asks doi.org for a rendered bibliography entry using content negotiation:
//! a GET on `{base}/{doi}` with `Accept: text/x-bibliography; style=..; locale=..`.
//! Every HTTP status maps to a [`CitationResponse`]; only transport failures are errors.
//! One request per call, no retries and no caching.

mod response;

pub use response::CitationResponse;

use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// Content type requested from the resolver.
pub const BIBLIOGRAPHY_CONTENT_TYPE: &str = "text/x-bibliography";

/// Resolver host path; everything up to and including it is stripped.
const DOI_RESOLVER_PATH: &str = "doi.org/";

/// Scheme prefixes stripped from bare identifiers.
const DOI_SCHEME_PREFIXES: &[&str] = &["doi:", "DOI:"];

/// Citation resolver client.
#[derive(Clone)]
pub struct CitationClient {
    /// HTTP client.
    client: Client,

    /// Resolver base URL, without trailing slash.
    base_url: String,

    /// Default style.
    style: String,

    /// Default locale.
    locale: String,
}

impl CitationClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.resolver_base_url.trim_end_matches('/').to_string(),
            style: config.style.clone(),
            locale: config.locale.clone(),
        })
    }

    /// Resolve a DOI using the configured style and locale.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or an empty identifier.
    pub async fn resolve(&self, doi: &str) -> ClientResult<CitationResponse> {
        self.resolve_with(doi, &self.style, &self.locale).await
    }

    /// Resolve a DOI with an explicit style and locale.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or an empty identifier.
    pub async fn resolve_with(
        &self,
        doi: &str,
        style: &str,
        locale: &str,
    ) -> ClientResult<CitationResponse> {
        let url = self.resolution_url(doi)?;

        tracing::debug!(%url, style, locale, "Resolving DOI");

        let response =
            self.client.get(&url).header(ACCEPT, accept_header(style, locale)).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        let citation = CitationResponse::from_status(status, &body);

        if citation.is_rendered() {
            tracing::debug!(%url, status, "Resolved DOI");
        } else {
            tracing::warn!(%url, status, outcome = %citation, "DOI did not resolve to a citation");
        }

        Ok(citation)
    }

    /// Build the request URL for an identifier.
    ///
    /// # Errors
    ///
    /// Returns error if nothing is left after stripping known prefixes.
    pub fn resolution_url(&self, doi: &str) -> ClientResult<String> {
        let bare = normalize_doi(doi);
        if bare.is_empty() {
            return Err(ClientError::invalid_identifier(doi));
        }
        Ok(format!("{}/{}", self.base_url, bare))
    }
}

impl std::fmt::Debug for CitationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CitationClient")
            .field("base_url", &self.base_url)
            .field("style", &self.style)
            .field("locale", &self.locale)
            .finish()
    }
}

/// Build the `Accept` header value for a style and locale.
#[must_use]
pub fn accept_header(style: &str, locale: &str) -> String {
    format!("{BIBLIOGRAPHY_CONTENT_TYPE}; style={style}; locale={locale}")
}

/// Strip a resolver link (any scheme or `doi.org` subdomain) or a `doi:` prefix,
/// leaving the bare DOI.
#[must_use]
pub fn normalize_doi(doi: &str) -> &str {
    let trimmed = doi.trim();
    if let Some(idx) = trimmed.find(DOI_RESOLVER_PATH) {
        return trimmed[idx + DOI_RESOLVER_PATH.len()..].trim();
    }
    DOI_SCHEME_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed)
        .trim()
}
