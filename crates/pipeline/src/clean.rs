//! Cleaning stage: schema validation, forward-fill of the dimension
//! columns, the social-row filter, metric coercion, and classification.
//! Pure — the raw table is never mutated.

use crate::classify::{lob_for_campaign, platform_for};
use insights_core::config::ColumnMap;
use insights_core::{CellValue, InsightsError, InsightsResult, RawTable, Record, ReportConfig};
use tracing::debug;

struct Columns {
    dim_a: usize,
    dim_b: usize,
    campaign: usize,
    impressions: usize,
    clicks: usize,
    spend: usize,
    conversions: usize,
}

/// Every required column must be present before any aggregation happens.
fn resolve_columns(table: &RawTable, map: &ColumnMap) -> InsightsResult<Columns> {
    let find = |header: &str| {
        table
            .column(header)
            .ok_or_else(|| InsightsError::Schema(header.to_string()))
    };
    Ok(Columns {
        dim_a: find(&map.dim_a)?,
        dim_b: find(&map.dim_b)?,
        campaign: find(&map.campaign)?,
        impressions: find(&map.impressions)?,
        clicks: find(&map.clicks)?,
        spend: find(&map.spend)?,
        conversions: find(&map.conversions)?,
    })
}

/// Forward-fill one column top to bottom: a blank cell inherits the nearest
/// preceding non-blank value. A leading blank run stays blank.
fn forward_fill(table: &RawTable, col: usize) -> Vec<String> {
    let mut filled = Vec::with_capacity(table.rows.len());
    let mut last = String::new();
    for row in &table.rows {
        let cell = row.get(col).unwrap_or(&CellValue::Empty);
        if !cell.is_blank() {
            last = cell.as_text();
        }
        filled.push(last.clone());
    }
    filled
}

/// Normalize the raw sheet into cleaned, classified records. Row order is
/// the post-filter source order; social rows never make it out.
pub fn clean(table: &RawTable, cfg: &ReportConfig) -> InsightsResult<Vec<Record>> {
    let cols = resolve_columns(table, &cfg.columns)?;

    let dim_a = forward_fill(table, cols.dim_a);
    let dim_b = forward_fill(table, cols.dim_b);
    let campaign = forward_fill(table, cols.campaign);

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        if dim_b[i].eq_ignore_ascii_case("social") {
            continue;
        }
        let metric = |col: usize| row.get(col).map(CellValue::to_metric).unwrap_or(0.0);
        let lob = lob_for_campaign(&campaign[i], &cfg.lob_rules);
        records.push(Record {
            dim_a: dim_a[i].clone(),
            dim_b: dim_b[i].clone(),
            campaign: campaign[i].clone(),
            impressions: metric(cols.impressions),
            clicks: metric(cols.clicks),
            spend: metric(cols.spend),
            conversions: metric(cols.conversions),
            lob,
            platform: platform_for(lob),
        });
    }

    debug!(
        input_rows = table.rows.len(),
        kept_rows = records.len(),
        "cleaned input sheet"
    );
    Ok(records)
}
