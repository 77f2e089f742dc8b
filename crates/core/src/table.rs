//! Cell and table model for the raw input sheet. The I/O collaborator
//! produces a `RawTable`; everything downstream is a pure transformation
//! that never mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;

const EMPTY_CELL: CellValue = CellValue::Empty;

/// One cell of the input sheet, before cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Blank for forward-fill purposes: truly empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Coerce to a metric value. Unparsable or missing cells become zero;
    /// negative values pass through unclamped (see the cleaning policy).
    pub fn to_metric(&self) -> f64 {
        match self {
            CellValue::Number(n) if n.is_finite() => *n,
            CellValue::Number(_) => 0.0,
            CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            CellValue::Empty => 0.0,
        }
    }

    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// An input sheet as handed over by the I/O collaborator: a header row and
/// data rows in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Headers are trimmed on entry; the source export pads some of them.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        Self { headers, rows }
    }

    /// Exact match against the trimmed headers.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell accessor tolerant of ragged rows.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_coercion() {
        assert_eq!(CellValue::Number(42.5).to_metric(), 42.5);
        assert_eq!(CellValue::Text(" 17 ".into()).to_metric(), 17.0);
        assert_eq!(CellValue::Text("n/a".into()).to_metric(), 0.0);
        assert_eq!(CellValue::Empty.to_metric(), 0.0);
        // Negatives are retained, not clamped.
        assert_eq!(CellValue::Number(-3.0).to_metric(), -3.0);
        assert_eq!(CellValue::Text("-12.5".into()).to_metric(), -12.5);
    }

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".into()).is_blank());
        assert!(!CellValue::Text("x".into()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_headers_trimmed_on_entry() {
        let table = RawTable::new(vec!["  Impressions ".into(), "Clicks".into()], vec![]);
        assert_eq!(table.column("Impressions"), Some(0));
        assert_eq!(table.column("Clicks"), Some(1));
        assert_eq!(table.column("Cost"), None);
    }

    #[test]
    fn test_ragged_row_access() {
        let table = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Text("x".into())]],
        );
        assert_eq!(table.cell(0, 1), &CellValue::Empty);
        assert_eq!(table.cell(5, 0), &CellValue::Empty);
    }
}
