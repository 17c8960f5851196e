//! Adverse-event report aggregation.
//!
//! Works over per-drug report counts as published by FAERS-style public
//! dashboards: total reports plus death, life-threatening, and
//! hospitalization counts. The derived figures are simple percentage
//! rates; rendering (charts, feeds) is out of scope for this crate.

use serde::{Deserialize, Serialize};

/// Raw report counts for one drug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub drug_name: String,
    pub active_ingredient: String,
    pub total_reports: u64,
    pub total_deaths: u64,
    pub total_life_threatening: u64,
    pub total_hospitalized: u64,
}

impl ReportRow {
    /// Compute the derived safety figures for this row.
    pub fn profile(&self) -> SafetyProfile {
        let serious_outcomes =
            self.total_deaths + self.total_life_threatening + self.total_hospitalized;
        SafetyProfile {
            death_rate: percentage(self.total_deaths, self.total_reports, 3),
            serious_rate: percentage(serious_outcomes, self.total_reports, 2),
            serious_outcomes,
            row: self.clone(),
        }
    }
}

/// Derived safety figures for one drug.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyProfile {
    #[serde(flatten)]
    pub row: ReportRow,
    /// Deaths as a percentage of total reports, rounded to 3 decimals.
    pub death_rate: f64,
    /// Deaths + life-threatening + hospitalized.
    pub serious_outcomes: u64,
    /// Serious outcomes as a percentage of total reports, rounded to 2
    /// decimals.
    pub serious_rate: f64,
}

/// Aggregate summary across a set of drugs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetySummary {
    /// Per-drug profiles, sorted by total reports (descending).
    pub profiles: Vec<SafetyProfile>,
    pub total_reports: u64,
    pub total_serious_outcomes: u64,
}

/// Profile every row and aggregate the totals.
pub fn summarize(rows: &[ReportRow]) -> SafetySummary {
    let mut profiles: Vec<SafetyProfile> = rows.iter().map(ReportRow::profile).collect();
    profiles.sort_by(|a, b| b.row.total_reports.cmp(&a.row.total_reports));

    let total_reports = profiles.iter().map(|p| p.row.total_reports).sum();
    let total_serious_outcomes = profiles.iter().map(|p| p.serious_outcomes).sum();
    SafetySummary {
        profiles,
        total_reports,
        total_serious_outcomes,
    }
}

/// `count / total × 100`, rounded. Zero totals yield a zero rate.
fn percentage(count: u64, total: u64, places: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64 * 100.0, places)
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
