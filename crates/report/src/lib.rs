//! Narrative generation and report assembly — the numeric formatters, the
//! fixed wording template, and the sheet-level outputs handed to the I/O
//! layer.

pub mod assemble;
pub mod format;
pub mod narrative;
pub mod template;

pub use assemble::{cleaned_sheet, insights_sheet, run_report, SheetStore};
pub use narrative::{build_narrative, NarrativeInputs};
