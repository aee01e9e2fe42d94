//! Output formatters for citation lines and file names.

mod citation;
mod filename;

pub use citation::*;
pub use filename::*;
