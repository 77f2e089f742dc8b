//! Leaderboard finder: group a subset of records by a key, sum a metric per
//! group, and rank descending. Ties keep first-encounter order (stable
//! sort), and an empty subset yields the `NA` sentinel instead of an error.

use insights_core::Record;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sentinel returned by [`top`] when a leaderboard is empty. Callers must
/// never index into an empty ranking.
pub const NA: &str = "NA";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    pub key: String,
    pub value: f64,
}

/// Group `records` by `key`, sum `metric` per group, and sort descending by
/// the summed metric. Groups first appear in encounter order, which the
/// stable sort preserves on ties.
pub fn rank_by<'a, I, K, M>(records: I, key: K, metric: M) -> Vec<LeaderEntry>
where
    I: IntoIterator<Item = &'a Record>,
    K: Fn(&Record) -> String,
    M: Fn(&Record) -> f64,
{
    let mut entries: Vec<LeaderEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for r in records {
        let k = key(r);
        match index.get(&k) {
            Some(&i) => entries[i].value += metric(r),
            None => {
                index.insert(k.clone(), entries.len());
                entries.push(LeaderEntry {
                    key: k,
                    value: metric(r),
                });
            }
        }
    }
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    entries
}

/// First key of the ranking, or the `NA` sentinel when it is empty.
pub fn top(entries: &[LeaderEntry]) -> &str {
    entries.first().map(|e| e.key.as_str()).unwrap_or(NA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::{Lob, Platform};

    fn record(dim_a: &str, clicks: f64, spend: f64) -> Record {
        Record {
            dim_a: dim_a.into(),
            dim_b: "Display".into(),
            campaign: "MDCD-x".into(),
            impressions: 0.0,
            clicks,
            spend,
            conversions: 0.0,
            lob: Lob::Mdcd,
            platform: Platform::Yahoo,
        }
    }

    #[test]
    fn test_groups_and_ranks_descending() {
        let records = vec![
            record("TX", 10.0, 0.0),
            record("NY", 25.0, 0.0),
            record("TX", 20.0, 0.0),
        ];
        let ranked = rank_by(&records, |r| r.dim_a.clone(), |r| r.clicks);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key, "TX");
        assert_eq!(ranked[0].value, 30.0);
        assert_eq!(ranked[1].key, "NY");
        assert_eq!(top(&ranked), "TX");
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let records = vec![
            record("NY", 15.0, 0.0),
            record("TX", 15.0, 0.0),
            record("CA", 15.0, 0.0),
        ];
        let ranked = rank_by(&records, |r| r.dim_a.clone(), |r| r.clicks);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["NY", "TX", "CA"]);
    }

    #[test]
    fn test_empty_input_yields_sentinel() {
        let ranked = rank_by(std::iter::empty(), |r| r.dim_a.clone(), |r| r.clicks);
        assert!(ranked.is_empty());
        assert_eq!(top(&ranked), NA);
    }

    #[test]
    fn test_trimmed_key_merges_padded_groups() {
        let records = vec![record(" TX", 0.0, 100.0), record("TX ", 0.0, 50.0)];
        let ranked = rank_by(
            &records,
            |r| r.dim_a.trim().to_string(),
            |r| r.spend,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].value, 150.0);
    }
}
