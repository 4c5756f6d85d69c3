//! Reports view data — summary cards, per-campaign results, department
//! analysis, user performance, and export.
//!
//! Rates here are fixed reference datasets (there is no analytics pipeline
//! computing them); only the campaign results table and the fleet summary
//! are derived from live gateway data.

pub mod export;
pub mod overview;

pub use overview::{
    campaign_results, department_analysis, fleet_summary, reports_overview, user_performance,
    Timeframe,
};
