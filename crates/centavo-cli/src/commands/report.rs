//! Behavioral report command

use anyhow::Result;
use centavo_core::analysis::BehavioralAnalyzer;
use centavo_core::db::Database;

use super::transactions::parse_date;

pub fn cmd_report(db: &Database, user_id: i64, json: bool, as_of: Option<&str>) -> Result<()> {
    let analyzer = BehavioralAnalyzer::new(db);
    let report = match as_of {
        Some(s) => analyzer.report_as_of(user_id, parse_date(Some(s))?)?,
        None => analyzer.report(user_id)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("🧭 Behavioral Report — {}", report.current_month);
    println!("   ─────────────────────────────────────────────────────");
    println!("   Monthly income:  ${:.2}", report.monthly_income);

    if report.trends.trends.is_empty() {
        println!();
        println!("   No expense history yet. Record a few months of expenses");
        println!("   to unlock trend and anomaly analysis.");
    } else {
        println!();
        println!("📈 Category Trends");
        for (category, entries) in &report.trends.trends {
            println!("   {}", category.label());
            for entry in entries {
                println!(
                    "      {} │ ${:>9.2} │ {:>+6.1}%",
                    entry.month, entry.total, entry.growth_pct
                );
            }
        }
    }

    if !report.anomalies.is_empty() {
        println!();
        println!("🔎 Anomalies");
        for a in &report.anomalies {
            println!(
                "   {} this month: ${:.2} vs ${:.2} average ({:+.1}%)",
                a.category.label(),
                a.current_total,
                a.avg_past,
                a.deviation_pct
            );
        }
    }

    if !report.recurring.is_empty() {
        println!();
        println!("🔁 Recurring Patterns");
        for r in &report.recurring {
            let months: Vec<&str> = r.months.iter().map(|m| m.month.as_str()).collect();
            println!(
                "   {} │ {} consecutive months ({}) │ confidence {:.0}%",
                r.category.label(),
                r.months.len(),
                months.join(", "),
                r.confidence * 100.0
            );
        }
    }

    let m = &report.metrics;
    println!();
    println!("🧮 Behavioral Metrics");
    println!("   Growth rate:     {:>6.1}%", m.category_growth_rate);
    println!("   Drift index:     {:>6.2}", m.behavioral_drift_index);
    println!("   Spike confidence:{:>6.2}", m.recurring_spike_confidence);
    println!("   Self-control:    {:>6.2}", m.self_control_indicator);
    println!("   Risk level:      {}", m.behavioral_risk_level);

    if let Some(s) = &report.structural {
        println!();
        println!("🏗  Structural Analysis");
        println!("   Monthly income:  ${:>10.2}", s.monthly_income);
        println!("   Fixed expenses:  ${:>10.2}", s.fixed_expenses);
        println!("   Variable:        ${:>10.2}", s.variable_expenses);
        println!(
            "   Savings:         ${:>10.2} ({:.1}%)",
            s.savings_capacity,
            s.savings_percent * 100.0
        );
        if s.debt_monthly > 0.0 {
            println!(
                "   Debt:            ${:>10.2}/month ({:.1}% of income)",
                s.debt_monthly,
                s.debt_income_ratio * 100.0
            );
        }
        println!();
        println!("   50/30/20                  real       ideal        diff");
        let rows = [
            ("Necesidades", &s.comparison.needs),
            ("Ocio", &s.comparison.wants),
            ("Ahorro", &s.comparison.savings),
        ];
        for (label, c) in rows {
            println!(
                "   {:<14} ${:>10.2} ${:>10.2} ${:>+10.2}",
                label, c.real, c.ideal, c.diff
            );
        }
    }

    if !report.alerts.is_empty() {
        println!();
        println!("🚨 Alerts");
        for alert in &report.alerts {
            println!("   {}", alert);
        }
    }

    if !report.split_recommendations.is_empty() {
        println!();
        println!("💬 Recommendations");
        for rec in &report.split_recommendations {
            println!("   {}", rec);
        }
    }

    Ok(())
}
