//! Actual vs ideal 50/30/20 analysis for one recorded month

use serde::{Deserialize, Serialize};

use crate::db::MonthSummaryRow;
use crate::models::{Category, TransactionType};

use super::structural::ideal_split;
use super::types::IdealSplit;

/// Amounts per 50/30/20 bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitTotals {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

/// Recorded spend for one month measured against the 50/30/20 ideal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAnalysis {
    pub income: f64,
    pub ideal: IdealSplit,
    pub actual: SplitTotals,
    pub total_expenses: f64,
    /// actual minus ideal per bucket; positive means overspending
    pub deviations: SplitTotals,
    /// Income minus total recorded expenses
    pub surplus: f64,
    pub alerts: Vec<String>,
}

/// Measure a month's recorded expenses against the 50/30/20 split of its
/// recorded income. Alerts are suppressed entirely when income is 0: with
/// no income every ideal amount is 0 and the deviations are meaningless.
pub fn analyze_month(income: f64, summary: &[MonthSummaryRow]) -> MonthlyAnalysis {
    let ideal = ideal_split(income);

    let mut actual = SplitTotals::default();
    for row in summary {
        if row.tx_type != TransactionType::Expense {
            continue;
        }
        match row.category {
            Some(Category::Necesidad) => actual.needs += row.total,
            Some(Category::Gusto) => actual.wants += row.total,
            Some(Category::Ahorro) => actual.savings += row.total,
            None => {}
        }
    }

    let total_expenses = actual.needs + actual.wants + actual.savings;
    let deviations = SplitTotals {
        needs: actual.needs - ideal.needs,
        wants: actual.wants - ideal.wants,
        savings: actual.savings - ideal.savings,
    };

    let mut alerts = Vec::new();
    if income > 0.0 {
        if deviations.needs > 0.0 {
            alerts.push(format!(
                "⚠️ Estás gastando *${:.2} más* de lo ideal en necesidades.",
                deviations.needs
            ));
        }
        if deviations.wants > 0.0 {
            alerts.push(format!(
                "⚠️ Estás gastando *${:.2} más* de lo ideal en gustos.",
                deviations.wants
            ));
        }
        if deviations.savings < 0.0 {
            alerts.push(format!(
                "💡 Tu ahorro está *${:.2} por debajo* del ideal.",
                deviations.savings.abs()
            ));
        }
    }

    MonthlyAnalysis {
        income,
        ideal,
        actual,
        total_expenses,
        deviations,
        surplus: income - total_expenses,
        alerts,
    }
}
