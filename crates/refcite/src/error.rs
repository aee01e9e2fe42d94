//! Error types for refcite.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Non-success responses from doi.org are not errors; see [`crate::client::CitationResponse`].

use std::path::PathBuf;

/// Errors from the citation resolver.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The identifier was empty after normalisation.
    #[error("Invalid identifier: {identifier:?}")]
    InvalidIdentifier {
        /// Identifier as it was given
        identifier: String,
    },
}

impl ClientError {
    /// Create an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier { identifier: identifier.into() }
    }
}

/// Errors from loading the reference table.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    /// The input file could not be opened.
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed CSV or a row that does not fit the header.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column: {column:?}")]
    MissingColumn {
        /// Exact column name that was expected
        column: String,
    },
}

impl TableError {
    /// Create a missing column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn { column: column.into() }
    }
}

/// Errors from writing output files.
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    /// Output directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Resolving a DOI failed while writing the citations file.
    #[error("Resolver error: {0}")]
    Client(#[from] ClientError),

    /// A dataset file would overwrite the citations file.
    #[error("Dataset {dataset:?} maps to the citations file {}", .path.display())]
    PathCollision {
        /// Dataset value
        dataset: String,
        /// Shared output path
        path: PathBuf,
    },
}

impl WriteError {
    /// Wrap an I/O error with the file it happened on.
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}

/// Errors from a full run.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Loading the input table failed
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Building the resolver failed
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Writing output failed
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

/// Result type alias for resolver operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for table loading.
pub type TableResult<T> = Result<T, TableError>;

/// Result type alias for output writing.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type alias for a full run.
pub type PipelineResult<T> = Result<T, PipelineError>;
