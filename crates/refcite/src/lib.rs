//! refcite
//!
//! Turns a spreadsheet of bibliographic references into citation text files.
//! Rows are split by their `URL` column:
//!
//! - **DOI links** are resolved through doi.org content negotiation into a rendered
//!   citation, written to a combined citations file.
//! - **Other URLs** get a citation assembled from the table's own fields, written to
//!   the same file.
//! - **No URL** rows are grouped by `Dataset` and written to one `{dataset}.txt`
//!   per group.
//!
//! # Example
//!
//! ```no_run
//! use refcite::{Config, pipeline::{self, Mode}};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("references.csv", "output");
//!     let summary = pipeline::run(&config, Mode::All).await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pipeline;
pub mod table;
pub mod writer;

pub use client::{CitationClient, CitationResponse};
pub use config::Config;
pub use error::{ClientError, PipelineError, TableError, WriteError};
pub use table::ReferenceTable;
