//! Configuration for a refcite run.

use std::path::PathBuf;
use std::time::Duration;

/// Default values and fixed column names.
pub mod defaults {
    use std::time::Duration;

    /// Input table read when no path is given.
    pub const INPUT_PATH: &str = "references.csv";

    /// Directory that receives the per-dataset files.
    pub const OUTPUT_DIR: &str = "output";

    /// File name of the combined DOI/URL citations file.
    pub const CITATIONS_FILE_NAME: &str = "citations.txt";

    /// DOI resolver base URL.
    pub const RESOLVER_BASE_URL: &str = "https://doi.org";

    /// CSL style requested from the resolver.
    pub const STYLE: &str = "frontiers-of-biogeography";

    /// Locale requested from the resolver.
    pub const LOCALE: &str = "en-UK";

    /// Request timeout for a single resolution.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Column names of the input table. Matching is exact and case-sensitive.
pub mod columns {
    pub const AUTHORS: &str = "Authors";
    pub const PUBLICATION_YEAR: &str = "Publication year";
    pub const TITLE: &str = "Title";
    pub const URL: &str = "URL";
    pub const VOLUME_ISSUE: &str = "Vol(issue)/Report no";
    pub const PAGINATION: &str = "pagination";
    pub const CATALOGUE_LINK: &str = "catalogue link";
    pub const DATASET: &str = "Dataset";

    /// Columns every classifier function needs.
    pub const LOCATOR: &[&str] = &[URL, CATALOGUE_LINK];

    /// Columns the synthesized citation template reads.
    pub const TEMPLATE: &[&str] = &[AUTHORS, PUBLICATION_YEAR, TITLE, VOLUME_ISSUE, PAGINATION];

    /// Columns the per-dataset files need on top of the locator columns.
    pub const DATASET_FILES: &[&str] =
        &[AUTHORS, PUBLICATION_YEAR, TITLE, VOLUME_ISSUE, PAGINATION, DATASET];
}

/// Run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file of reference records.
    pub input_path: PathBuf,

    /// Output directory (created if absent).
    pub output_dir: PathBuf,

    /// Name of the combined DOI/URL citations file inside `output_dir`.
    pub citations_file_name: String,

    /// Base URL of the DOI resolver (for testing with mock servers).
    pub resolver_base_url: String,

    /// Citation style passed in the Accept header.
    pub style: String,

    /// Locale passed in the Accept header.
    pub locale: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Fail on a missing input column instead of classifying every row into
    /// empty results or skipping rows without a Dataset.
    pub strict_columns: bool,
}

impl Config {
    /// Create a configuration for the given input and output paths.
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            citations_file_name: defaults::CITATIONS_FILE_NAME.to_string(),
            resolver_base_url: defaults::RESOLVER_BASE_URL.to_string(),
            style: defaults::STYLE.to_string(),
            locale: defaults::LOCALE.to_string(),
            request_timeout: defaults::REQUEST_TIMEOUT,
            connect_timeout: defaults::CONNECT_TIMEOUT,
            strict_columns: true,
        }
    }

    /// Create a test configuration pointing the resolver at a mock server.
    #[must_use]
    pub fn for_testing(
        base_url: &str,
        input_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolver_base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new(input_path, output_dir)
        }
    }

    /// Override the citation style.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Override the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Path of the combined DOI/URL citations file.
    #[must_use]
    pub fn citations_path(&self) -> PathBuf {
        self.output_dir.join(&self.citations_file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::INPUT_PATH, defaults::OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("references.csv"));
        assert_eq!(config.style, "frontiers-of-biogeography");
        assert_eq!(config.locale, "en-UK");
        assert_eq!(config.resolver_base_url, "https://doi.org");
        assert!(config.strict_columns);
    }

    #[test]
    fn test_for_testing_trims_trailing_slash() {
        let config = Config::for_testing("http://127.0.0.1:9000/", "in.csv", "out");
        assert_eq!(config.resolver_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_style("apa").with_locale("en-GB");
        assert_eq!(config.style, "apa");
        assert_eq!(config.locale, "en-GB");
    }

    #[test]
    fn test_citations_path() {
        let config = Config::new("in.csv", "out");
        assert_eq!(config.citations_path(), PathBuf::from("out").join("citations.txt"));
    }
}
