//! Record classification.
//!
//! Splits the table into DOI-bearing, generic-URL-bearing and locator-less rows.
//! Every row lands in exactly one category: all three functions route through
//! [`LocatorKind::of`]. A table without the `URL` and `catalogue link` columns
//! yields empty results everywhere.

use crate::models::{DoiRecord, LocatorKind, UrlRecord};
use crate::table::ReferenceTable;

/// The three categories of a table, each in source row order.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub doi: Vec<DoiRecord>,
    pub url: Vec<UrlRecord>,
    pub no_url: ReferenceTable,
}

impl Partition {
    /// Total number of classified rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doi.len() + self.url.len() + self.no_url.len()
    }

    /// Check if no row was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rows whose URL points at doi.org, as (URL, catalogue link) pairs.
#[must_use]
pub fn doi_records(table: &ReferenceTable) -> Vec<DoiRecord> {
    if !table.has_locator_columns() {
        return Vec::new();
    }

    table
        .records()
        .iter()
        .filter(|r| r.locator() == LocatorKind::Doi)
        .map(DoiRecord::from)
        .collect()
}

/// Rows with any other non-empty URL.
#[must_use]
pub fn url_records(table: &ReferenceTable) -> Vec<UrlRecord> {
    if !table.has_locator_columns() {
        return Vec::new();
    }

    table
        .records()
        .iter()
        .filter(|r| r.locator() == LocatorKind::Url)
        .map(UrlRecord::from)
        .collect()
}

/// Rows with an empty, blank or missing URL, keeping every column.
#[must_use]
pub fn no_url_records(table: &ReferenceTable) -> ReferenceTable {
    if !table.has_locator_columns() {
        return table.filter(|_| false);
    }

    table.filter(|r| r.locator().is_none())
}

/// Classify a whole table in one call.
#[must_use]
pub fn partition(table: &ReferenceTable) -> Partition {
    let partition =
        Partition { doi: doi_records(table), url: url_records(table), no_url: no_url_records(table) };

    tracing::info!(
        doi = partition.doi.len(),
        url = partition.url.len(),
        no_url = partition.no_url.len(),
        "Classified reference records"
    );

    partition
}
