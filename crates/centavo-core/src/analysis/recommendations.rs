//! Split-adjustment recommendations

use crate::models::Category;

use super::types::{Anomaly, BehavioralMetrics, RecurringPattern, StructuralAnalysis};

/// Generate budget-split adjustment suggestions from the detected patterns.
///
/// Rules fire independently and in a fixed order: recurring leisure spike,
/// transient leisure spike (only when no recurring one exists), needs above
/// 60% of income, savings below 15%, high debt alongside a leisure spike,
/// and a low self-control indicator. Rules needing structural data are
/// skipped when the profile has no declared salary.
pub fn split_recommendations(
    anomalies: &[Anomaly],
    recurring: &[RecurringPattern],
    metrics: &BehavioralMetrics,
    structural: Option<&StructuralAnalysis>,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let leisure_spike = anomalies.iter().find(|a| a.category == Category::Gusto);
    let leisure_recurring = recurring.iter().find(|r| r.category == Category::Gusto);

    if let Some(pattern) = leisure_recurring {
        suggestions.push(format!(
            "📉 Tu gasto en ocio ha crecido de forma recurrente ({} meses consecutivos). Considera reducir tu % variable del presupuesto.",
            pattern.months.len()
        ));
    } else if let Some(spike) = leisure_spike {
        suggestions.push(format!(
            "⚠️ Tu gasto en ocio este mes es {}% superior al promedio. Si continúa, conviene ajustar tu split.",
            spike.deviation_pct
        ));
    }

    let needs_spike = anomalies.iter().find(|a| a.category == Category::Necesidad);
    if let (Some(spike), Some(analysis)) = (needs_spike, structural) {
        if analysis.monthly_income > 0.0 {
            let needs_pct = spike.current_total / analysis.monthly_income * 100.0;
            if needs_pct > 60.0 {
                suggestions.push(format!(
                    "🔴 Tus necesidades representan {:.1}% del ingreso (ideal: 50%). Evalúa si tus ingresos son suficientes o si algún gasto fijo puede reducirse.",
                    needs_pct
                ));
            }
        }
    }

    if let Some(analysis) = structural {
        if analysis.savings_percent < 0.15 {
            suggestions.push(format!(
                "💡 Tu ahorro actual es {:.1}%. Prioriza aumentar tu fondo de emergencia antes de gastos variables.",
                analysis.savings_percent * 100.0
            ));
        }

        if analysis.debt_income_ratio > 0.3 && leisure_spike.is_some() {
            suggestions.push(format!(
                "🚨 Tu ratio deuda/ingreso es {:.1}% y tu gasto variable está en alza. Prioriza reducir la deuda antes de gastos de ocio.",
                analysis.debt_income_ratio * 100.0
            ));
        }
    }

    if metrics.self_control_indicator < 0.5 {
        suggestions.push(format!(
            "⚡ Tu indicador de autocontrol financiero es bajo ({:.0}%). Se detecta un patrón de gasto impulsivo. Considera establecer límites diarios.",
            metrics.self_control_indicator * 100.0
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_financial_structure;
    use crate::models::{FinancialProfile, PayFrequency, RiskLevel};
    use chrono::Utc;

    fn metrics(self_control: f64) -> BehavioralMetrics {
        BehavioralMetrics {
            category_growth_rate: 0.0,
            behavioral_drift_index: 0.0,
            recurring_spike_confidence: 0.0,
            self_control_indicator: self_control,
            behavioral_risk_level: RiskLevel::Normal,
        }
    }

    fn anomaly(category: Category, current_total: f64, deviation_pct: f64) -> Anomaly {
        Anomaly {
            category,
            current_total,
            avg_past: 100.0,
            deviation_pct,
            month: "2026-08".to_string(),
        }
    }

    fn structural(salary: f64, leisure: f64, debt_monthly: f64) -> StructuralAnalysis {
        let profile = FinancialProfile {
            user_id: 1,
            salary: Some(salary),
            payment_frequency: Some(PayFrequency::Mensual),
            is_student: false,
            study_cost: 0.0,
            transport_cost: 0.0,
            food_cost: 0.0,
            leisure_cost: leisure,
            services_cost: 0.0,
            has_debt: debt_monthly > 0.0,
            debt_total: debt_monthly * 10.0,
            debt_monthly,
            current_savings: 0.0,
            is_employed: true,
            income_type: None,
            onboarding_completed: true,
            category_trends: None,
            monthly_deviation_score: None,
            recurring_spike_pattern: None,
            behavioral_risk_level: None,
            updated_at: Utc::now(),
        };
        analyze_financial_structure(&profile)
    }

    #[test]
    fn test_recurring_leisure_wins_over_transient() {
        let anomalies = vec![anomaly(Category::Gusto, 200.0, 40.0)];
        let recurring = vec![RecurringPattern {
            category: Category::Gusto,
            months: vec![],
            confidence: 0.5,
        }];
        let suggestions =
            split_recommendations(&anomalies, &recurring, &metrics(0.9), None);

        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("de forma recurrente"));
    }

    #[test]
    fn test_transient_leisure_spike() {
        let anomalies = vec![anomaly(Category::Gusto, 200.0, 40.0)];
        let suggestions = split_recommendations(&anomalies, &[], &metrics(0.9), None);

        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("40% superior al promedio"));
    }

    #[test]
    fn test_needs_above_sixty_percent_of_income() {
        let analysis = structural(1000.0, 0.0, 0.0);
        let anomalies = vec![anomaly(Category::Necesidad, 700.0, 20.0)];
        let suggestions =
            split_recommendations(&anomalies, &[], &metrics(0.9), Some(&analysis));

        assert!(suggestions.iter().any(|s| s.contains("70.0% del ingreso")));
    }

    #[test]
    fn test_low_savings_recommendation() {
        // Income 1000, leisure 900: savings percent 10% < 15%
        let analysis = structural(1000.0, 900.0, 0.0);
        let suggestions = split_recommendations(&[], &[], &metrics(0.9), Some(&analysis));

        assert!(suggestions.iter().any(|s| s.contains("fondo de emergencia")));
    }

    #[test]
    fn test_debt_priority_requires_leisure_spike() {
        let analysis = structural(1000.0, 0.0, 400.0);
        let no_spike = split_recommendations(&[], &[], &metrics(0.9), Some(&analysis));
        assert!(!no_spike.iter().any(|s| s.contains("deuda/ingreso")));

        let anomalies = vec![anomaly(Category::Gusto, 200.0, 40.0)];
        let with_spike =
            split_recommendations(&anomalies, &[], &metrics(0.9), Some(&analysis));
        assert!(with_spike.iter().any(|s| s.contains("deuda/ingreso es 40.0%")));
    }

    #[test]
    fn test_low_self_control_warning() {
        let suggestions = split_recommendations(&[], &[], &metrics(0.45), None);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("autocontrol"));
        assert!(suggestions[0].contains("(45%)"));
    }

    #[test]
    fn test_structural_rules_skipped_without_profile() {
        // A wants anomaly without structural data only triggers the
        // transient-spike rule
        let anomalies = vec![
            anomaly(Category::Gusto, 200.0, 40.0),
            anomaly(Category::Necesidad, 900.0, 30.0),
        ];
        let suggestions = split_recommendations(&anomalies, &[], &metrics(0.9), None);
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_rules_are_additive_and_ordered() {
        let analysis = structural(1000.0, 900.0, 400.0);
        let anomalies = vec![anomaly(Category::Gusto, 200.0, 40.0)];
        let recurring = vec![RecurringPattern {
            category: Category::Gusto,
            months: vec![],
            confidence: 0.75,
        }];
        let suggestions =
            split_recommendations(&anomalies, &recurring, &metrics(0.3), Some(&analysis));

        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].contains("recurrente"));
        assert!(suggestions[1].contains("fondo de emergencia"));
        assert!(suggestions[2].contains("deuda/ingreso"));
        assert!(suggestions[3].contains("autocontrol"));
    }
}
