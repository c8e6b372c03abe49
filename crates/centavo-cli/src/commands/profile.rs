//! Financial profile command implementations

use anyhow::{anyhow, Result};
use centavo_core::db::Database;
use centavo_core::models::{PayFrequency, ProfileUpdate};

use crate::cli::ProfileSetArgs;

pub fn cmd_profile_set(db: &Database, user_id: i64, args: &ProfileSetArgs) -> Result<()> {
    let frequency: Option<PayFrequency> = args
        .frequency
        .as_deref()
        .map(|s| s.parse().map_err(|e: String| anyhow!(e)))
        .transpose()?;

    let update = ProfileUpdate {
        salary: args.salary,
        payment_frequency: frequency,
        is_student: args.student,
        study_cost: args.study,
        transport_cost: args.transport,
        food_cost: args.food,
        leisure_cost: args.leisure,
        services_cost: args.services,
        has_debt: args.debt_monthly.map(|d| d > 0.0),
        debt_total: args.debt_total,
        debt_monthly: args.debt_monthly,
        current_savings: args.savings,
        is_employed: args.employed,
        income_type: args.income_type.clone(),
        onboarding_completed: args.complete.then_some(true),
        ..Default::default()
    };

    db.upsert_financial_profile(user_id, &update)?;
    println!("✅ Profile updated");
    if args.complete {
        println!("   Onboarding marked as completed.");
    }
    Ok(())
}

pub fn cmd_profile_show(db: &Database, user_id: i64) -> Result<()> {
    let Some(profile) = db.get_financial_profile(user_id)? else {
        println!("No profile yet. Start with:");
        println!("  centavo profile set --salary 1200 --frequency mensual");
        return Ok(());
    };

    println!();
    println!("👤 Financial Profile");
    println!("   ─────────────────────────────────────────");
    match (profile.salary, profile.payment_frequency) {
        (Some(salary), Some(freq)) => {
            println!("   Salary:          ${:.2} ({})", salary, freq)
        }
        (Some(salary), None) => println!("   Salary:          ${:.2}", salary),
        _ => println!("   Salary:          not declared"),
    }
    println!("   Student:         {}", if profile.is_student { "yes" } else { "no" });
    println!("   Employed:        {}", if profile.is_employed { "yes" } else { "no" });
    println!();
    println!("   Monthly costs");
    println!("   Study:           ${:>10.2}", profile.study_cost);
    println!("   Transport:       ${:>10.2}", profile.transport_cost);
    println!("   Food:            ${:>10.2}", profile.food_cost);
    println!("   Services:        ${:>10.2}", profile.services_cost);
    println!("   Leisure:         ${:>10.2}", profile.leisure_cost);
    if profile.has_debt {
        println!();
        println!("   Debt total:      ${:>10.2}", profile.debt_total);
        println!("   Debt monthly:    ${:>10.2}", profile.debt_monthly);
    }
    println!();
    println!("   Current savings: ${:>10.2}", profile.current_savings);
    println!(
        "   Onboarding:      {}",
        if profile.onboarding_completed { "completed" } else { "pending" }
    );

    // Latest behavioral snapshot, if a report has been generated
    if let Some(risk) = profile.behavioral_risk_level {
        println!();
        println!("   Behavioral snapshot");
        println!("   Risk level:      {}", risk);
        if let Some(score) = profile.monthly_deviation_score {
            println!("   Drift score:     {:.2}", score);
        }
    }

    Ok(())
}
