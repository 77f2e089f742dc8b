//! Integration test for the full clean → aggregate → narrate → write flow,
//! driven through the sheet-store boundary with an in-memory store.

use chrono::NaiveDate;
use insights_core::{CellValue, InsightsResult, RawTable, ReportConfig};
use insights_report::{run_report, SheetStore};
use std::collections::HashMap;

#[derive(Default)]
struct MemoryStore {
    sheets: HashMap<String, Vec<Vec<CellValue>>>,
}

impl SheetStore for MemoryStore {
    fn replace_sheet(&mut self, name: &str, rows: &[Vec<CellValue>]) -> InsightsResult<()> {
        self.sheets.insert(name.to_string(), rows.to_vec());
        Ok(())
    }
}

impl MemoryStore {
    fn insights_text(&self) -> String {
        self.sheets["Insights"]
            .iter()
            .map(|row| row[0].as_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn headers() -> Vec<String> {
    vec![
        "Dimension 1".into(),
        "Dimension 2".into(),
        "Dimension 3".into(),
        "Impressions".into(),
        "Clicks".into(),
        "Cost".into(),
        "Sydney Conversions".into(),
    ]
}

fn row(a: &str, b: &str, c: &str, m: [f64; 4]) -> Vec<CellValue> {
    vec![
        a.into(),
        b.into(),
        c.into(),
        m[0].into(),
        m[1].into(),
        m[2].into(),
        m[3].into(),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
}

#[test]
fn test_five_row_export_end_to_end() {
    // Row 3 carries the MDCR marker with 1000 impressions / 50 clicks; one
    // social row must vanish from everything.
    let table = RawTable::new(
        headers(),
        vec![
            row("TX", "Display", "MDCD-TX-CRM", [2000.0, 20.0, 50.0, 7.0]),
            row("NY", "Social", "Boosted posts", [9999.0, 999.0, 999.0, 99.0]),
            row("R1", "Display", "MDCR-Region1", [1000.0, 50.0, 4.0, 3.0]),
            row("R2", "Native", "CSBD-Region2", [500.0, 2.0, 1.0, 1.0]),
            row("OH", "Display", "MDCD-OH", [1500.0, 45.0, 30.0, 5.0]),
        ],
    );
    let cfg = ReportConfig::default();
    let mut store = MemoryStore::default();
    run_report(&table, &cfg, today(), &mut store).unwrap();

    let cleaned = &store.sheets["Cleaned"];
    assert_eq!(cleaned.len(), 5); // header + 4 rows, social row gone
    assert!(cleaned
        .iter()
        .all(|r| !r[1].as_text().eq_ignore_ascii_case("social")));

    let text = store.insights_text();
    assert!(text.starts_with("Sydney Registration Insights  Oct 14"));
    // MDCR slice: 50 clicks over 1000 impressions.
    assert!(text.contains("MDCR is seeing a CTR of 5.00%"));
    // MDCD spend leader: TX $50.00, runner-up OH $30.00.
    assert!(text.contains(
        "In terms of spend for the ongoing month, TX leads all MDCD geos with $50.00 spent, \
         followed closely by OH with $30.00."
    ));
    // MDCD clicks leader is OH (45 vs 20).
    assert!(text.contains("OH led all geos with a CTR of"));
}

#[test]
fn test_empty_mdcd_subset_end_to_end() {
    let table = RawTable::new(
        headers(),
        vec![
            row("R1", "Display", "MDCR-Region1", [1000.0, 50.0, 4.0, 3.0]),
            row("R2", "Native", "CSBD-Region2", [500.0, 2.0, 1.0, 1.0]),
        ],
    );
    let cfg = ReportConfig::default();
    let mut store = MemoryStore::default();
    run_report(&table, &cfg, today(), &mut store).unwrap();

    let text = store.insights_text();
    assert!(!text.contains("In terms of spend for the ongoing month"));
    assert!(text.contains("NA led all geos with a CTR of 0.00%."));
    assert!(text.contains("being led NA with 0 new conversions."));
}

#[test]
fn test_forward_fill_spans_merged_cells_end_to_end() {
    // Exports from the pivot builder leave merged dimension cells blank
    // below the first row of each block.
    let table = RawTable::new(
        headers(),
        vec![
            row("TX", "Display", "MDCD-TX", [100.0, 1.0, 10.0, 1.0]),
            row("", "", "", [200.0, 2.0, 20.0, 2.0]),
            row("", "", "", [300.0, 3.0, 30.0, 3.0]),
        ],
    );
    let cfg = ReportConfig::default();
    let mut store = MemoryStore::default();
    run_report(&table, &cfg, today(), &mut store).unwrap();

    let cleaned = &store.sheets["Cleaned"];
    for data_row in &cleaned[1..] {
        assert_eq!(data_row[0].as_text(), "TX");
        assert_eq!(data_row[2].as_text(), "MDCD-TX");
    }
    let text = store.insights_text();
    // All spend rolls up into the single filled geo.
    assert!(text.contains("TX is the top MDCD geo with $60.00 spent."));
}
