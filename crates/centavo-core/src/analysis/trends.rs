//! Category trend computation: month-over-month growth per category

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Category, MonthlyCategoryTotal};

use super::types::{CategoryTrends, TrendEntry};
use super::{round1, round2};

/// Compute per-category trend series from aggregation rows.
///
/// Every category observed anywhere in the window gets one entry per month
/// key present in the window, in chronological order; months where the
/// category had no spend are zero-filled. Growth is 0 for the first entry
/// and whenever the previous month's total was 0.
pub fn compute_trends(rows: &[MonthlyCategoryTotal]) -> CategoryTrends {
    // month -> category -> total
    let mut by_month: BTreeMap<&str, BTreeMap<Category, f64>> = BTreeMap::new();
    for row in rows {
        *by_month
            .entry(row.month.as_str())
            .or_default()
            .entry(row.category)
            .or_insert(0.0) += row.total;
    }

    let months: Vec<String> = by_month.keys().map(|m| m.to_string()).collect();
    let categories: BTreeSet<Category> = rows.iter().map(|r| r.category).collect();

    let mut trends: BTreeMap<Category, Vec<TrendEntry>> = BTreeMap::new();
    for cat in categories {
        let mut entries = Vec::with_capacity(months.len());
        let mut prev: Option<f64> = None;
        for (month, totals) in &by_month {
            let total = totals.get(&cat).copied().unwrap_or(0.0);
            let growth_pct = match prev {
                Some(p) if p > 0.0 => (total - p) / p * 100.0,
                _ => 0.0,
            };
            entries.push(TrendEntry {
                month: month.to_string(),
                total: round2(total),
                growth_pct: round1(growth_pct),
            });
            prev = Some(total);
        }
        trends.insert(cat, entries);
    }

    CategoryTrends { trends, months }
}
