//! Building a full daily report with the fluent builder
//!
//! Shows scoring a day from a food log, with health-platform inputs
//! and an externally generated AI summary attached.

use nutriscore::{DailyReport, FoodItem, GoalProfile, NutritionTotals};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A day's food log, as the persistence layer would hand it over
    let log = vec![
        FoodItem {
            name: "overnight oats".into(),
            calories: 420.0,
            protein_g: 18.0,
            carbs_g: 62.0,
            fats_g: 12.0,
            fiber_g: 9.0,
            ..Default::default()
        },
        FoodItem {
            name: "chicken burrito bowl".into(),
            calories: 780.0,
            protein_g: 48.0,
            carbs_g: 85.0,
            fats_g: 24.0,
            saturated_fat_g: 8.0,
            sodium_mg: 1450.0,
            fiber_g: 11.0,
            ..Default::default()
        },
        FoodItem {
            name: "salmon with rice".into(),
            calories: 650.0,
            protein_g: 38.0,
            carbs_g: 70.0,
            fats_g: 22.0,
            saturated_fat_g: 5.0,
            sodium_mg: 600.0,
            fiber_g: 4.0,
            ..Default::default()
        },
    ];

    let report = DailyReport::builder()
        .totals(NutritionTotals::from_items(&log))
        .goals(GoalProfile::default())
        .sleep_score(84)
        .resting_heart_rate(57.0)
        .hrv(68.0)
        .ai_summary("Protein was on point today; watch lunch sodium.")
        .build()?;

    if let Some(meal) = &report.meal_score {
        println!("Meal grade: {} ({}/100)", meal.grade, meal.overall_score);
        if let Some(ai) = &meal.personalized_ai_summary {
            println!("Coach says: {}", ai);
        }
    }
    println!(
        "Wellness: {}/100 ({})",
        report.wellness.overall_score, report.wellness.color
    );

    Ok(())
}
