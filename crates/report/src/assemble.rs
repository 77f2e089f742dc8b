//! Report assembler: packages the cleaned table and the narrative text as
//! sheet rows, and drives one full report run against the I/O boundary.

use crate::narrative::{build_narrative, NarrativeInputs};
use chrono::NaiveDate;
use insights_core::config::ColumnMap;
use insights_core::{CellValue, InsightsResult, RawTable, Record, ReportConfig};
use insights_pipeline::clean;
use tracing::info;

/// Boundary to the excluded I/O layer. Implementations must delete any
/// pre-existing sheet with the same name before writing, so reruns
/// overwrite rather than duplicate.
pub trait SheetStore {
    fn replace_sheet(&mut self, name: &str, rows: &[Vec<CellValue>]) -> InsightsResult<()>;
}

fn dim_cell(value: &str) -> CellValue {
    if value.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(value.to_string())
    }
}

/// Header row in source column order, with the two derived columns
/// appended, followed by one row per cleaned record.
pub fn cleaned_sheet(records: &[Record], columns: &ColumnMap) -> Vec<Vec<CellValue>> {
    let mut header: Vec<CellValue> = columns
        .required()
        .iter()
        .map(|h| CellValue::Text(h.to_string()))
        .collect();
    header.push(CellValue::Text("LOB".to_string()));
    header.push(CellValue::Text("Platform".to_string()));

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(header);
    for r in records {
        rows.push(vec![
            dim_cell(&r.dim_a),
            dim_cell(&r.dim_b),
            dim_cell(&r.campaign),
            CellValue::Number(r.impressions),
            CellValue::Number(r.clicks),
            CellValue::Number(r.spend),
            CellValue::Number(r.conversions),
            CellValue::Text(r.lob.as_str().to_string()),
            CellValue::Text(r.platform.as_str().to_string()),
        ]);
    }
    rows
}

/// One single-cell row per newline-delimited line of the narrative.
pub fn insights_sheet(text: &str) -> Vec<Vec<CellValue>> {
    text.split('\n').map(|line| vec![line.into()]).collect()
}

/// One full run: clean, aggregate, narrate, then write both sheets. The
/// store is only touched after every computation has succeeded, so a fatal
/// error leaves no partial output behind.
pub fn run_report<S: SheetStore>(
    table: &RawTable,
    cfg: &ReportConfig,
    today: NaiveDate,
    store: &mut S,
) -> InsightsResult<()> {
    let records = clean(table, cfg)?;
    let inputs = NarrativeInputs::from_records(&records);
    let narrative = build_narrative(&inputs, today);

    let cleaned = cleaned_sheet(&records, &cfg.columns);
    let insights = insights_sheet(&narrative);

    store.replace_sheet(&cfg.sheets.cleaned, &cleaned)?;
    store.replace_sheet(&cfg.sheets.insights, &insights)?;
    info!(
        cleaned_rows = records.len(),
        insight_lines = insights.len(),
        "report sheets written"
    );
    Ok(())
}
