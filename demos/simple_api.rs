//! Simple API usage with convenience functions
//!
//! This example shows the high-level convenience functions for the
//! most common use cases.

use nutriscore::{parse_ingredient, score_meal, score_wellness, GoalProfile, NutritionTotals};

fn main() {
    // Parse a few free-text ingredient lines
    println!("=== Ingredient parsing ===");
    for line in ["1 1/2 cups chopped onions", "2 cloves garlic, minced", "salt to taste"] {
        let parsed = parse_ingredient(line);
        println!("{:>5} x {:<10} {}", parsed.quantity, parsed.unit, parsed.name);
    }

    // Score a day against the default goal profile
    println!("\n=== Meal score ===");
    let goals = GoalProfile::default();
    let totals = NutritionTotals {
        calories: 1850.0,
        protein_g: 95.0,
        carbs_g: 210.0,
        fats_g: 60.0,
        saturated_fat_g: 18.0,
        fiber_g: 24.0,
        sodium_mg: 2100.0,
        ..Default::default()
    };
    let meal = score_meal(&totals, &goals);
    println!("Grade {} ({}/100): {}", meal.grade, meal.overall_score, meal.summary);
    for tip in &meal.improvement_tips {
        println!("  tip: {}", tip.advice);
    }

    // Fold sleep and recovery data in
    println!("\n=== Wellness score ===");
    let wellness = score_wellness(Some(&meal), Some(78), Some(56.0), Some(62.0));
    println!(
        "{}/100 ({}): {}",
        wellness.overall_score, wellness.color, wellness.summary
    );
}
