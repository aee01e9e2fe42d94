//! Data models for reference records.
//!
//! Field names follow Rust conventions; `#[serde(rename = ..)]` maps them to the
//! exact column headers of the input table.

mod enums;
mod record;

pub use enums::{DOI_HOST_MARKER, LocatorKind};
pub use record::{DoiRecord, ReferenceRecord, UrlRecord};
