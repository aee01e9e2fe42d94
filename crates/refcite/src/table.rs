//! CSV loading for the reference table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::columns;
use crate::error::{TableError, TableResult};
use crate::models::ReferenceRecord;

/// The loaded reference table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    headers: Vec<String>,
    records: Vec<ReferenceRecord>,
}

impl ReferenceTable {
    /// Load a table from a CSV file.
    ///
    /// With `strict` set, a missing `URL` or `catalogue link` column is an error.
    /// Otherwise the table loads and classification yields empty results.
    pub fn load(path: impl AsRef<Path>, strict: bool) -> TableResult<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|source| TableError::Open { path: path.into(), source })?;
        let table = Self::from_reader(BufReader::new(file), strict)?;

        tracing::debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "Loaded reference table"
        );

        Ok(table)
    }

    /// Parse a table from any CSV source.
    pub fn from_reader<R: Read>(reader: R, strict: bool) -> TableResult<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        if strict {
            require_columns(&headers, columns::LOCATOR)?;
        }

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<ReferenceRecord>().enumerate() {
            let mut record = result?;
            record.row = row;
            records.push(record);
        }

        Ok(Self { headers, records })
    }

    /// Build a table from records, numbering rows by position.
    ///
    /// The table reports every known column as present.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = ReferenceRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(row, mut record)| {
                record.row = row;
                record
            })
            .collect();

        let headers = [
            columns::AUTHORS,
            columns::PUBLICATION_YEAR,
            columns::TITLE,
            columns::URL,
            columns::VOLUME_ISSUE,
            columns::PAGINATION,
            columns::CATALOGUE_LINK,
            columns::DATASET,
        ]
        .iter()
        .map(|c| (*c).to_string())
        .collect();

        Self { headers, records }
    }

    /// Sub-table keeping only the records that match, with the same headers.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&ReferenceRecord) -> bool,
    {
        Self {
            headers: self.headers.clone(),
            records: self.records.iter().filter(|r| keep(*r)).cloned().collect(),
        }
    }

    /// Header row as read from the file.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check whether a column is present.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Fail with the first of `required` that the header row lacks.
    pub fn require_columns(&self, required: &[&str]) -> TableResult<()> {
        require_columns(&self.headers, required)
    }

    /// Check whether both locator columns are present.
    #[must_use]
    pub fn has_locator_columns(&self) -> bool {
        columns::LOCATOR.iter().all(|c| self.has_column(c))
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn require_columns(headers: &[String], required: &[&str]) -> TableResult<()> {
    match required.iter().find(|c| !headers.iter().any(|h| h == *c)) {
        Some(missing) => Err(TableError::missing_column(*missing)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Authors,Publication year,Title,URL,Vol(issue)/Report no,pagination,catalogue link,Dataset
\"Smith, J.\",2020,Ocean Data,,12(3),45-60,CEDA123,Tides
\"Doe, A.\",2019,Waves,https://doi.org/10.1000/xyz,4,1-2,CEDA9,Waves
";

    #[test]
    fn test_parses_rows_in_order() {
        let table = ReferenceTable::from_reader(CSV.as_bytes(), true).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.records()[0];
        assert_eq!(first.row, 0);
        assert_eq!(first.authors, "Smith, J.");
        assert_eq!(first.publication_year, "2020");
        assert_eq!(first.url, None);
        assert_eq!(first.dataset, "Tides");

        let second = &table.records()[1];
        assert_eq!(second.row, 1);
        assert_eq!(second.url.as_deref(), Some("https://doi.org/10.1000/xyz"));
    }

    #[test]
    fn test_strict_rejects_missing_locator_column() {
        let csv = "Authors,URL\nSmith,\n";
        let err = ReferenceTable::from_reader(csv.as_bytes(), true).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref column } if column == "catalogue link"));
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let csv = "url,catalogue link\nhttps://x,1\n";
        let err = ReferenceTable::from_reader(csv.as_bytes(), true).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref column } if column == "URL"));
    }

    #[test]
    fn test_require_columns_names_first_missing() {
        let csv = "Authors,URL,catalogue link\nSmith,,C1\n";
        let table = ReferenceTable::from_reader(csv.as_bytes(), true).unwrap();

        let err = table.require_columns(columns::DATASET_FILES).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref column } if column == "Publication year"));
        assert!(table.require_columns(columns::LOCATOR).is_ok());
    }

    #[test]
    fn test_whitespace_url_is_kept() {
        let csv = "Authors,URL,catalogue link,Dataset\nSmith,   ,C1,Tides\n";
        let table = ReferenceTable::from_reader(csv.as_bytes(), true).unwrap();
        assert_eq!(table.records()[0].url.as_deref(), Some("   "));
    }

    #[test]
    fn test_lenient_loads_without_locator_columns() {
        let csv = "Authors,Title\nSmith,Ocean\n";
        let table = ReferenceTable::from_reader(csv.as_bytes(), false).unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.has_locator_columns());
        assert_eq!(table.records()[0].title, "Ocean");
        assert!(table.records()[0].dataset.is_empty());
    }

    #[test]
    fn test_from_records_numbers_rows() {
        let table = ReferenceTable::from_records(vec![
            ReferenceRecord { row: 7, ..Default::default() },
            ReferenceRecord { row: 7, ..Default::default() },
        ]);
        assert_eq!(table.records()[0].row, 0);
        assert_eq!(table.records()[1].row, 1);
        assert!(table.has_locator_columns());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReferenceTable::load("definitely/not/here.csv", true).unwrap_err();
        assert!(matches!(err, TableError::Open { .. }));
    }
}
