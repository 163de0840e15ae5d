//! Daily totals derived from a document snapshot.
//!
//! A single pass groups the three collections by entry date and sums:
//! bullpen pitches, workout minutes and game pitches. The output holds one row
//! per date that appears on any entry, most recent date first. Dates are ISO
//! `YYYY-MM-DD` strings, so plain string order is calendar order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::Document;

/// Summed workload for one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub bullpen_pitches: u64,
    pub workouts_min: u64,
    pub games_pitches: u64,
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub date: String,
    #[serde(flatten)]
    pub totals: DailyTotals,
}

/// Aggregates `doc` into per-date totals, most recent date first.
///
/// Pure function of the snapshot: the result does not depend on the order in
/// which entries were appended, and entries sharing a date are summed.
pub fn daily_totals(doc: &Document) -> Vec<DailyReport> {
    let mut by_date: BTreeMap<&str, DailyTotals> = BTreeMap::new();

    for entry in &doc.bullpen {
        let totals = by_date.entry(entry.date.as_str()).or_default();
        totals.bullpen_pitches += u64::from(entry.total_pitches);
    }
    for entry in &doc.workouts {
        let totals = by_date.entry(entry.date.as_str()).or_default();
        totals.workouts_min += entry.total_minutes();
    }
    for entry in &doc.games {
        let totals = by_date.entry(entry.date.as_str()).or_default();
        totals.games_pitches += u64::from(entry.pitches);
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, totals)| DailyReport {
            date: date.to_string(),
            totals,
        })
        .collect()
}
