//! CSV-backed stand-in for the workbook collaborator. The input export is a
//! single CSV file; each output sheet becomes a sibling `<stem> <Sheet>.csv`
//! that is deleted and recreated on every run.

use insights_core::{CellValue, InsightsError, InsightsResult, RawTable};
use insights_report::SheetStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct CsvWorkbook {
    dir: PathBuf,
    stem: String,
    input: PathBuf,
}

impl CsvWorkbook {
    pub fn open(path: &Path) -> Self {
        let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report")
            .to_string();
        Self {
            dir,
            stem,
            input: path.to_path_buf(),
        }
    }

    pub fn load_input(&self) -> InsightsResult<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.input)
            .map_err(sheet_err)?;
        let headers = reader
            .headers()
            .map_err(sheet_err)?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(sheet_err)?;
            rows.push(record.iter().map(parse_cell).collect());
        }
        Ok(RawTable::new(headers, rows))
    }

    fn sheet_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{} {}.csv", self.stem, name))
    }
}

impl SheetStore for CsvWorkbook {
    fn replace_sheet(&mut self, name: &str, rows: &[Vec<CellValue>]) -> InsightsResult<()> {
        let path = self.sheet_path(name);
        // Replace semantics: a leftover sheet from a previous run is
        // deleted, never appended to.
        if path.exists() {
            fs::remove_file(&path)?;
        }
        let mut writer = csv::Writer::from_path(&path).map_err(sheet_err)?;
        for row in rows {
            writer
                .write_record(row.iter().map(|c| c.as_text()))
                .map_err(sheet_err)?;
        }
        writer.flush()?;
        info!(sheet = name, path = %path.display(), "sheet written");
        Ok(())
    }
}

fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        CellValue::Empty
    } else if let Ok(n) = trimmed.parse::<f64>() {
        CellValue::Number(n)
    } else {
        CellValue::Text(raw.to_string())
    }
}

fn sheet_err(e: csv::Error) -> InsightsError {
    InsightsError::Sheet(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sydney-insights-{tag}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_input_parses_cells() {
        let dir = temp_dir("load");
        let input = dir.join("pivot.csv");
        fs::write(&input, "Dimension 1,Impressions\nTX,1000\n,n/a\n").unwrap();

        let table = CsvWorkbook::open(&input).load_input().unwrap();
        assert_eq!(table.headers, ["Dimension 1", "Impressions"]);
        assert_eq!(table.rows[0][0], CellValue::Text("TX".into()));
        assert_eq!(table.rows[0][1], CellValue::Number(1000.0));
        assert_eq!(table.rows[1][0], CellValue::Empty);
        assert_eq!(table.rows[1][1], CellValue::Text("n/a".into()));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_replace_sheet_overwrites_previous_run() {
        let dir = temp_dir("replace");
        let input = dir.join("pivot.csv");
        fs::write(&input, "a\n1\n").unwrap();
        let mut wb = CsvWorkbook::open(&input);

        let out = dir.join("pivot Cleaned.csv");
        fs::write(&out, "stale,content\n1,2\n3,4\n").unwrap();

        wb.replace_sheet("Cleaned", &[vec![CellValue::Text("fresh".into())]])
            .unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "fresh\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
