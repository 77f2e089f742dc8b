//! Pipeline configuration — column mapping, sheet names, classification
//! rules, and input discovery settings. Passed explicitly into the pipeline
//! entry point. Loaded from environment variables with the prefix
//! `SYDNEY_INSIGHTS__`; defaults match the production export.

use crate::types::Lob;
use serde::Deserialize;

/// Root configuration for one report run.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default)]
    pub sheets: SheetNames,
    #[serde(default = "default_lob_rules")]
    pub lob_rules: Vec<LobRule>,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Logical field name → source column header.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMap {
    #[serde(default = "default_dim_a")]
    pub dim_a: String,
    #[serde(default = "default_dim_b")]
    pub dim_b: String,
    #[serde(default = "default_campaign")]
    pub campaign: String,
    #[serde(default = "default_impressions")]
    pub impressions: String,
    #[serde(default = "default_clicks")]
    pub clicks: String,
    #[serde(default = "default_spend")]
    pub spend: String,
    #[serde(default = "default_conversions")]
    pub conversions: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetNames {
    #[serde(default = "default_input_sheet")]
    pub input: String,
    #[serde(default = "default_cleaned_sheet")]
    pub cleaned: String,
    #[serde(default = "default_insights_sheet")]
    pub insights: String,
}

/// One classification rule: campaigns whose upper-cased name contains
/// `marker` belong to `lob`. Rules are evaluated in order and the first
/// match wins, so the order of the list is the priority order.
#[derive(Debug, Clone, Deserialize)]
pub struct LobRule {
    pub marker: String,
    pub lob: Lob,
}

/// Where the I/O collaborator looks for the latest input export.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Candidate directories, relative to the user's home directory. Two
    /// entries because the synced folder exists under both a hyphen and an
    /// en-dash spelling.
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<String>,
    /// Filename prefixes to match, newest modification time wins.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

fn default_dim_a() -> String {
    "Dimension 1".to_string()
}
fn default_dim_b() -> String {
    "Dimension 2".to_string()
}
fn default_campaign() -> String {
    "Dimension 3".to_string()
}
fn default_impressions() -> String {
    "Impressions".to_string()
}
fn default_clicks() -> String {
    "Clicks".to_string()
}
fn default_spend() -> String {
    "Cost".to_string()
}
fn default_conversions() -> String {
    "Sydney Conversions".to_string()
}
fn default_input_sheet() -> String {
    "Sheet 1".to_string()
}
fn default_cleaned_sheet() -> String {
    "Cleaned".to_string()
}
fn default_insights_sheet() -> String {
    "Insights".to_string()
}
fn default_lob_rules() -> Vec<LobRule> {
    vec![
        LobRule {
            marker: "MDCR".to_string(),
            lob: Lob::Mdcr,
        },
        LobRule {
            marker: "CSBD".to_string(),
            lob: Lob::Csbd,
        },
        LobRule {
            marker: "MDCD".to_string(),
            lob: Lob::Mdcd,
        },
    ]
}
fn default_search_dirs() -> Vec<String> {
    vec![
        "OneDrive - Assembly/Desktop".to_string(),
        "OneDrive \u{2013} Assembly/Desktop".to_string(),
    ]
}
fn default_patterns() -> Vec<String> {
    vec![
        "Report Builder Pivot".to_string(),
        "stage_report".to_string(),
    ]
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            dim_a: default_dim_a(),
            dim_b: default_dim_b(),
            campaign: default_campaign(),
            impressions: default_impressions(),
            clicks: default_clicks(),
            spend: default_spend(),
            conversions: default_conversions(),
        }
    }
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            input: default_input_sheet(),
            cleaned: default_cleaned_sheet(),
            insights: default_insights_sheet(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_dirs: default_search_dirs(),
            patterns: default_patterns(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            sheets: SheetNames::default(),
            lob_rules: default_lob_rules(),
            discovery: DiscoveryConfig::default(),
        }
    }
}

impl ColumnMap {
    /// All seven required headers, for schema validation and the cleaned
    /// sheet header row (source column order).
    pub fn required(&self) -> [&str; 7] {
        [
            &self.dim_a,
            &self.dim_b,
            &self.campaign,
            &self.impressions,
            &self.clicks,
            &self.spend,
            &self.conversions,
        ]
    }
}

impl ReportConfig {
    /// Load configuration overrides from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("SYDNEY_INSIGHTS")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
