//! Static profile analysis: income normalization, 50/30/20, alert detection

use crate::models::{FinancialProfile, PayFrequency};

use super::types::{CategoryComparison, IdealSplit, SplitComparison, StructuralAnalysis};

/// Convert a declared per-period salary into a monthly figure.
/// An unset frequency is treated as monthly.
pub fn monthly_income(salary: f64, frequency: Option<PayFrequency>) -> f64 {
    let multiplier = frequency.map_or(1.0, |f| f.monthly_multiplier());
    salary * multiplier
}

/// Ideal 50/30/20 amounts for a monthly income
pub fn ideal_split(income: f64) -> IdealSplit {
    IdealSplit {
        needs: income * 0.5,
        wants: income * 0.3,
        savings: income * 0.2,
    }
}

/// Derive the structural (declared-budget) analysis from a profile.
///
/// Fixed expenses map to the needs bucket, leisure to wants, and whatever
/// remains of the income to savings. Ratio computations guard against a
/// zero income by defaulting to 0.
pub fn analyze_financial_structure(profile: &FinancialProfile) -> StructuralAnalysis {
    let income = monthly_income(profile.salary.unwrap_or(0.0), profile.payment_frequency);

    let fixed_expenses = profile.transport_cost
        + profile.food_cost
        + profile.services_cost
        + profile.study_cost
        + profile.debt_monthly;
    let variable_expenses = profile.leisure_cost;
    let total_expenses = fixed_expenses + variable_expenses;
    let savings_capacity = income - total_expenses;
    let savings_percent = if income > 0.0 {
        savings_capacity / income
    } else {
        0.0
    };
    let debt_income_ratio = if income > 0.0 {
        profile.debt_monthly / income
    } else {
        0.0
    };

    let ideal = ideal_split(income);
    let comparison = SplitComparison {
        needs: CategoryComparison {
            real: fixed_expenses,
            ideal: ideal.needs,
            diff: fixed_expenses - ideal.needs,
        },
        wants: CategoryComparison {
            real: variable_expenses,
            ideal: ideal.wants,
            diff: variable_expenses - ideal.wants,
        },
        savings: CategoryComparison {
            real: savings_capacity,
            ideal: ideal.savings,
            diff: savings_capacity - ideal.savings,
        },
    };

    StructuralAnalysis {
        monthly_income: income,
        fixed_expenses,
        variable_expenses,
        total_expenses,
        savings_capacity,
        savings_percent,
        debt_income_ratio,
        debt_total: profile.debt_total,
        debt_monthly: profile.debt_monthly,
        is_student: profile.is_student,
        comparison,
    }
}

/// Warning conditions derived from the structural analysis.
/// Rules are independent; several alerts can fire for the same profile.
pub fn detect_alerts(analysis: &StructuralAnalysis) -> Vec<String> {
    let mut alerts = Vec::new();

    if analysis.debt_income_ratio > 0.4 {
        alerts.push(format!(
            "🚨 *Sobreendeudamiento:* tu deuda mensual representa el {:.1}% de tu ingreso (umbral: 40%).",
            analysis.debt_income_ratio * 100.0
        ));
    }

    if analysis.savings_percent < 0.1 && analysis.savings_percent >= 0.0 {
        alerts.push(format!(
            "⚠️ *Ahorro bajo:* solo puedes ahorrar el {:.1}% de tu ingreso (mínimo recomendado: 10%).",
            analysis.savings_percent * 100.0
        ));
    }

    if analysis.savings_percent < 0.0 {
        alerts.push(format!(
            "🔴 *Déficit:* tus gastos superan tu ingreso mensual. Estás gastando ${:.2} más de lo que ganas.",
            analysis.savings_capacity.abs()
        ));
    }

    if analysis.comparison.wants.diff > 0.0 && analysis.monthly_income > 0.0 {
        let wants_pct = analysis.comparison.wants.real / analysis.monthly_income * 100.0;
        alerts.push(format!(
            "⚠️ *Ocio elevado:* gastas {:.1}% en ocio (ideal: 30%).",
            wants_pct
        ));
    }

    if analysis.savings_capacity > 0.0
        && analysis.savings_capacity < analysis.monthly_income * 0.1
    {
        let emergency_months = analysis.savings_capacity * 6.0 / analysis.monthly_income;
        alerts.push(format!(
            "💡 *Sin fondo de emergencia viable:* al ritmo actual, tardarías ~{:.1} meses en juntar 1 mes de gastos. Se recomienda tener 3-6 meses.",
            emergency_months
        ));
    }

    alerts
}
