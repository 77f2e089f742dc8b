//! The versioned wording asset for the insights narrative. The prose is
//! fixed — including the historical benchmarks baked into it — and only the
//! `{token}` placeholders change between runs. Keeping the text here lets
//! wording fidelity and KPI computation be tested independently.
//!
//! Trailing spaces inside the template are part of the published wording;
//! do not strip them.

/// Full report body. `{spend_line}` is either empty or a pre-rendered
/// paragraph starting with a blank line.
pub const REPORT: &str = r#"Sydney Registration Insights  {date}

Overall Performance 

So far, Oct performance shows an overall CTR of {ctr_all} with a significant difference between platforms. Yahoo reached a {ctr_yahoo} CTR while TTD has a CTR of {ctr_ttd}. 

Yahoo is currently exceeding TTD significantly in terms of efficiency performance but delivery through TTD is approximately 12% higher. 

ASM recommends refreshing the lists to keep the user audience fresh. In previous years when the Sydney campaign was run under the MDCD LOB, CRMs were typically updated monthly. 

Overall CPM is continuing to show good improvement from the full flight figure of $2.74, decreased to {cpm_all} in Oct. 

The Trade Desk 

Looking at performance by LOB, MDCR is seeing a CTR of {ctr_mdcr} while CSBD has a CTR of {ctr_csbd}. 

While these CTRs are below benchmark, they are not unexpected given the granularity of targeting between CRMs, Holdouts/Regular, and Registered/Unregistered users.  

Oct is going strong with great efficiency in the CSBD and MDCR campaigns, seeing CPM figures of less than {cpm_csbd} for CSBD and {cpm_mdcr} for MDCR campaigns; around 60% lower than the MDCD line. 

CARE ABCBS continues to be the top driver of conversions with 429 conversions across registered MDCR and 379 over non-registered.  

While accounting for a small portion of the overall budget, Native lines are seeing strong performance. 

So far in Oct, Native ads are seeing a CPM 7% lower than the Display counterparts. 

As of 7/14, we have moved from a strict monthly budget for Native to auto allocating budgets between the channels. So now the platform can auto-optimize and deliver where it sees the most efficiencies and conversions. 

MDCD 

Of all the states that were able to hit significant levels of spend in the first half of the month, {top_geo} led all geos with a CTR of {ctr_yahoo}.{spend_line}

Currently we have achieved {conv_yahoo} new conversions across all MDCD lines and audiences; being led {top_geo} with {top_conv} new conversions.

A conversion is the combined number of landing page visits, clicks on the submit button on the state pages, and "text me a link" button clicks."#;

/// Spend-leader sentence when at least two MDCD geos spent.
pub const SPEND_LEADER_PAIR: &str = "In terms of spend for the ongoing month, {leader} leads all MDCD geos with {leader_spend} spent, followed closely by {runner} with {runner_spend}.";

/// Fallback when only a single MDCD geo spent.
pub const SPEND_LEADER_SINGLE: &str = "In terms of spend for the ongoing month, {leader} is the top MDCD geo with {leader_spend} spent.";

/// Literal `{token}` substitution; no escaping, no conditionals.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (token, value) in vars {
        out = out.replace(&format!("{{{token}}}"), value);
    }
    out
}
