//! Subset aggregator: metric sums plus the derived CTR/CPM ratios. Each
//! call is independent, so disjoint and overlapping slices can be computed
//! from the same record set.

use insights_core::Record;
use serde::Serialize;

/// Metric sums and KPI ratios for one subset of records. A subset with zero
/// impressions always yields `ctr == cpm == 0.0`; division by zero never
/// occurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiAggregate {
    pub impressions: f64,
    pub clicks: f64,
    pub spend: f64,
    pub conversions: f64,
    pub ctr: f64,
    pub cpm: f64,
}

impl KpiAggregate {
    /// Sum the four metrics over any subset of records and derive the KPIs.
    pub fn over<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut agg = KpiAggregate::default();
        for r in records {
            agg.impressions += r.impressions;
            agg.clicks += r.clicks;
            agg.spend += r.spend;
            agg.conversions += r.conversions;
        }
        if agg.impressions > 0.0 {
            agg.ctr = agg.clicks / agg.impressions * 100.0;
            agg.cpm = agg.spend / agg.impressions * 1000.0;
        }
        agg
    }
}
