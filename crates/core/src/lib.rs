//! Shared types for the Sydney registration insights pipeline —
//! configuration, error taxonomy, and the cell/record data model.

pub mod config;
pub mod error;
pub mod table;
pub mod types;

pub use config::ReportConfig;
pub use error::{InsightsError, InsightsResult};
pub use table::{CellValue, RawTable};
pub use types::{Lob, Platform, Record};
