//! The data-cleaning and KPI pipeline — cleaning stage, LOB classifier,
//! subset aggregator, and leaderboard finder. Every stage is a pure
//! transformation over the in-memory table.

pub mod aggregate;
pub mod classify;
pub mod clean;
pub mod leaderboard;

pub use aggregate::KpiAggregate;
pub use classify::{lob_for_campaign, platform_for};
pub use clean::clean;
pub use leaderboard::{rank_by, top, LeaderEntry, NA};
