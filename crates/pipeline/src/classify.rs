//! Campaign classification: a small ordered rule engine over substring
//! markers, plus the fixed LOB → platform mapping. Both functions are pure
//! and total.

use insights_core::config::LobRule;
use insights_core::{Lob, Platform};

/// Scan the rules in order against the upper-cased campaign name; the first
/// marker found wins. A campaign string can carry more than one marker, so
/// the rule order is the priority order.
pub fn lob_for_campaign(campaign: &str, rules: &[LobRule]) -> Lob {
    let upper = campaign.to_uppercase();
    for rule in rules {
        if upper.contains(&rule.marker.to_uppercase()) {
            return rule.lob;
        }
    }
    Lob::Other
}

/// MDCD buys run through Yahoo; MDCR and CSBD through The Trade Desk.
pub fn platform_for(lob: Lob) -> Platform {
    match lob {
        Lob::Mdcd => Platform::Yahoo,
        Lob::Mdcr | Lob::Csbd => Platform::Ttd,
        Lob::Other => Platform::Other,
    }
}
