//! End-to-end run: load, classify, write.

use std::fmt;
use std::path::PathBuf;

use crate::classify;
use crate::client::CitationClient;
use crate::config::{Config, columns};
use crate::error::{PipelineResult, WriteError};
use crate::table::ReferenceTable;
use crate::writer;

/// Which outputs a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Only the per-dataset files for locator-less records.
    #[default]
    Datasets,
    /// Only the combined DOI/URL citations file.
    Citations,
    /// Both.
    All,
}

impl Mode {
    /// Check if the citations file is written.
    #[must_use]
    pub const fn writes_citations(self) -> bool {
        matches!(self, Self::Citations | Self::All)
    }

    /// Check if the per-dataset files are written.
    #[must_use]
    pub const fn writes_datasets(self) -> bool {
        matches!(self, Self::Datasets | Self::All)
    }

    /// Columns the outputs of this mode read, besides the locator columns.
    #[must_use]
    pub const fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::Citations => columns::TEMPLATE,
            Self::Datasets | Self::All => columns::DATASET_FILES,
        }
    }
}

/// Counts and outputs of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub doi_records: usize,
    pub url_records: usize,
    pub no_url_records: usize,
    /// Combined citations file, when written.
    pub citations_file: Option<PathBuf>,
    /// Per-dataset files in the order they were written.
    pub dataset_files: Vec<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows: {} DOI, {} URL, {} without locator; {} dataset file(s)",
            self.rows,
            self.doi_records,
            self.url_records,
            self.no_url_records,
            self.dataset_files.len()
        )?;
        if let Some(path) = &self.citations_file {
            write!(f, ", citations in {}", path.display())?;
        }
        Ok(())
    }
}

/// Run the configured outputs. Stops at the first fatal error.
///
/// # Errors
///
/// Returns error if the table cannot be loaded or lacks a column the mode needs
/// (strict mode only), if a dataset file would overwrite the citations file,
/// if a DOI request fails in transport, or if an output file cannot be written.
pub async fn run(config: &Config, mode: Mode) -> PipelineResult<RunSummary> {
    let table = ReferenceTable::load(&config.input_path, config.strict_columns)?;
    if config.strict_columns {
        table.require_columns(mode.required_columns())?;
    }

    let partition = classify::partition(&table);

    if mode.writes_citations() && mode.writes_datasets() {
        check_citations_path_free(config, &partition.no_url)?;
    }

    let mut summary = RunSummary {
        rows: table.len(),
        doi_records: partition.doi.len(),
        url_records: partition.url.len(),
        no_url_records: partition.no_url.len(),
        ..RunSummary::default()
    };

    if mode.writes_citations() {
        let client = CitationClient::new(config)?;
        let path = config.citations_path();
        writer::write_citations_file(&client, &partition.doi, &partition.url, &path).await?;
        summary.citations_file = Some(path);
    }

    if mode.writes_datasets() {
        summary.dataset_files = writer::write_dataset_files(&partition.no_url, &config.output_dir)?;
    }

    Ok(summary)
}

/// Fail if a Dataset value would be written over the citations file.
fn check_citations_path_free(config: &Config, no_url: &ReferenceTable) -> PipelineResult<()> {
    let citations = config.citations_path();
    let files = writer::plan_dataset_files(no_url, &config.output_dir);

    match files.get(&citations) {
        Some(file) => Err(WriteError::PathCollision {
            dataset: file.datasets.join(", "),
            path: citations,
        }
        .into()),
        None => Ok(()),
    }
}
