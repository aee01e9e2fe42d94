//! Output files.
//!
//! Locator-less records go to one `{dataset}.txt` per Dataset value; DOI and URL
//! records go to a single combined citations file. Files are created or truncated,
//! written fully and closed before the next one is opened. Nothing is rolled back
//! on failure: files already written stay on disk.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::client::CitationClient;
use crate::error::{WriteError, WriteResult};
use crate::formatters::{format_doi_line, format_no_url_citation, format_url_citation, sanitize_filename};
use crate::models::{DoiRecord, ReferenceRecord, UrlRecord};
use crate::table::ReferenceTable;

/// Extension of per-dataset files.
pub const DATASET_FILE_EXTENSION: &str = "txt";

/// Records grouped by Dataset, keys in sorted order, rows in source order.
/// Records with an empty Dataset are left out.
#[must_use]
pub fn group_by_dataset(table: &ReferenceTable) -> BTreeMap<&str, Vec<&ReferenceRecord>> {
    let mut groups: BTreeMap<&str, Vec<&ReferenceRecord>> = BTreeMap::new();

    for record in table.records() {
        if record.dataset.is_empty() {
            continue;
        }
        groups.entry(record.dataset.as_str()).or_default().push(record);
    }

    groups
}

/// Create a directory and its parents. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> WriteResult<()> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir { path: dir.into(), source })
}

/// Path of the file for a dataset inside `dir`.
#[must_use]
pub fn dataset_file_path(dir: &Path, dataset: &str) -> PathBuf {
    dir.join(format!("{}.{DATASET_FILE_EXTENSION}", sanitize_filename(dataset)))
}

/// Records of one output file. Several Dataset values can share a file when
/// they sanitize to the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetFile<'a> {
    /// Dataset values written to this file, sorted.
    pub datasets: Vec<&'a str>,
    /// Records in source row order.
    pub records: Vec<&'a ReferenceRecord>,
}

/// Map each output path in `dir` to the records it receives.
#[must_use]
pub fn plan_dataset_files<'a>(
    table: &'a ReferenceTable,
    dir: &Path,
) -> BTreeMap<PathBuf, DatasetFile<'a>> {
    let mut files: BTreeMap<PathBuf, DatasetFile<'a>> = BTreeMap::new();

    for (dataset, records) in group_by_dataset(table) {
        let file = files.entry(dataset_file_path(dir, dataset)).or_default();
        file.datasets.push(dataset);
        file.records.extend(records);
    }

    for (path, file) in &mut files {
        if file.datasets.len() > 1 {
            tracing::warn!(
                datasets = ?file.datasets,
                path = %path.display(),
                "Dataset values share one file after sanitizing; merging their rows"
            );
            file.records.sort_by_key(|r| r.row);
        }
    }

    files
}

/// Write one file per sanitized Dataset name. Returns the written paths, each once,
/// in sorted order.
///
/// # Errors
///
/// Returns the first I/O error; remaining groups are not written.
pub fn write_dataset_files(table: &ReferenceTable, dir: &Path) -> WriteResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let skipped = table.records().iter().filter(|r| r.dataset.is_empty()).count();
    if skipped > 0 {
        tracing::warn!(rows = skipped, "Skipping locator-less rows without a Dataset value");
    }

    let files = plan_dataset_files(table, dir);
    let mut written = Vec::with_capacity(files.len());

    for (path, file) in files {
        write_lines(&path, file.records.iter().map(|r| format_no_url_citation(r)))?;

        tracing::info!(
            datasets = ?file.datasets,
            rows = file.records.len(),
            path = %path.display(),
            "Wrote dataset file"
        );
        written.push(path);
    }

    Ok(written)
}

/// Resolve each DOI record and write the combined citations file.
///
/// DOI lines come first, in row order, followed by URL lines.
///
/// # Errors
///
/// Returns error on a transport failure or an I/O error. The file may then be partial.
pub async fn write_citations_file(
    client: &CitationClient,
    dois: &[DoiRecord],
    urls: &[UrlRecord],
    path: &Path,
) -> WriteResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let file = File::create(path).map_err(|e| WriteError::write(path, e))?;
    let mut out = BufWriter::new(file);

    for record in dois {
        let citation = client.resolve(&record.url).await?;
        let line = format_doi_line(&citation.into_text(), &record.url, &record.catalogue_link);
        out.write_all(line.as_bytes()).map_err(|e| WriteError::write(path, e))?;

        tracing::info!(doi = %record.url, "Processed DOI");
    }

    for record in urls {
        out.write_all(format_url_citation(record).as_bytes())
            .map_err(|e| WriteError::write(path, e))?;
    }

    out.flush().map_err(|e| WriteError::write(path, e))?;

    tracing::info!(dois = dois.len(), urls = urls.len(), path = %path.display(), "Wrote citations file");
    Ok(())
}

/// Create or truncate `path` and write each line as given.
fn write_lines<I>(path: &Path, lines: I) -> WriteResult<()>
where
    I: IntoIterator<Item = String>,
{
    let file = File::create(path).map_err(|e| WriteError::write(path, e))?;
    let mut out = BufWriter::new(file);

    for line in lines {
        out.write_all(line.as_bytes()).map_err(|e| WriteError::write(path, e))?;
    }

    out.flush().map_err(|e| WriteError::write(path, e))
}
