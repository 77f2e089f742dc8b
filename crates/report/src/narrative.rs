//! Narrative generator: derives the named aggregates and leaderboard
//! results the report needs, then renders the fixed wording with the
//! current values substituted.

use crate::format::{fmt_count, fmt_money, fmt_pct};
use crate::template::{self, REPORT, SPEND_LEADER_PAIR, SPEND_LEADER_SINGLE};
use chrono::NaiveDate;
use insights_core::{Lob, Platform, Record};
use insights_pipeline::{rank_by, top, KpiAggregate, LeaderEntry};

/// Everything the narrative substitutes into the template: the five named
/// aggregate slices plus the two MDCD leaderboard results.
#[derive(Debug, Clone)]
pub struct NarrativeInputs {
    pub overall: KpiAggregate,
    pub ttd: KpiAggregate,
    pub yahoo: KpiAggregate,
    pub mdcr: KpiAggregate,
    pub csbd: KpiAggregate,
    /// MDCD geo with the most clicks, or the NA sentinel.
    pub top_geo: String,
    /// Conversions for the top geo, summed over the *full* record set, not
    /// just MDCD — the report joins the leading geo back against every line
    /// it appears on. Truncated to a whole number for display.
    pub top_geo_conversions: f64,
    /// MDCD geos ranked by spend, keys trimmed of surrounding whitespace.
    pub spend_leaders: Vec<LeaderEntry>,
}

impl NarrativeInputs {
    pub fn from_records(records: &[Record]) -> Self {
        let overall = KpiAggregate::over(records);
        let ttd = KpiAggregate::over(records.iter().filter(|r| r.platform == Platform::Ttd));
        let yahoo = KpiAggregate::over(records.iter().filter(|r| r.platform == Platform::Yahoo));
        let mdcr = KpiAggregate::over(records.iter().filter(|r| r.lob == Lob::Mdcr));
        let csbd = KpiAggregate::over(records.iter().filter(|r| r.lob == Lob::Csbd));

        let mdcd = |r: &&Record| r.lob == Lob::Mdcd;
        let clicks_by_geo = rank_by(
            records.iter().filter(mdcd),
            |r| r.dim_a.clone(),
            |r| r.clicks,
        );
        let top_geo = top(&clicks_by_geo).to_string();
        let top_geo_conversions: f64 = records
            .iter()
            .filter(|r| r.dim_a == top_geo)
            .map(|r| r.conversions)
            .sum::<f64>()
            .trunc();
        let spend_leaders = rank_by(
            records.iter().filter(mdcd),
            |r| r.dim_a.trim().to_string(),
            |r| r.spend,
        );

        Self {
            overall,
            ttd,
            yahoo,
            mdcr,
            csbd,
            top_geo,
            top_geo_conversions,
            spend_leaders,
        }
    }

    /// The spend-leader paragraph, prefixed with its blank line. `None`
    /// when the MDCD subset is empty — the paragraph is then simply absent.
    fn spend_line(&self) -> Option<String> {
        let leader = self.spend_leaders.first()?;
        let sentence = match self.spend_leaders.get(1) {
            Some(runner) => template::render(
                SPEND_LEADER_PAIR,
                &[
                    ("leader", leader.key.clone()),
                    ("leader_spend", fmt_money(leader.value)),
                    ("runner", runner.key.clone()),
                    ("runner_spend", fmt_money(runner.value)),
                ],
            ),
            None => template::render(
                SPEND_LEADER_SINGLE,
                &[
                    ("leader", leader.key.clone()),
                    ("leader_spend", fmt_money(leader.value)),
                ],
            ),
        };
        Some(format!("\n\n{sentence}"))
    }
}

/// Render the full report text for one run. Pure: same inputs and date,
/// same text.
pub fn build_narrative(inputs: &NarrativeInputs, today: NaiveDate) -> String {
    let spend_line = inputs.spend_line().unwrap_or_default();
    template::render(
        REPORT,
        &[
            ("date", today.format("%b %d").to_string()),
            ("ctr_all", fmt_pct(inputs.overall.ctr)),
            ("ctr_yahoo", fmt_pct(inputs.yahoo.ctr)),
            ("ctr_ttd", fmt_pct(inputs.ttd.ctr)),
            ("cpm_all", fmt_money(inputs.overall.cpm)),
            ("ctr_mdcr", fmt_pct(inputs.mdcr.ctr)),
            ("ctr_csbd", fmt_pct(inputs.csbd.ctr)),
            ("cpm_csbd", fmt_money(inputs.csbd.cpm)),
            ("cpm_mdcr", fmt_money(inputs.mdcr.cpm)),
            ("top_geo", inputs.top_geo.clone()),
            ("spend_line", spend_line),
            ("conv_yahoo", fmt_count(inputs.yahoo.conversions)),
            ("top_conv", fmt_count(inputs.top_geo_conversions)),
        ],
    )
}
