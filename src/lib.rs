pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod scoring;

use log::debug;

pub use crate::builder::{DailyReport, DailyReportBuilder};
pub use crate::config::GoalProfile;
pub use crate::error::EngineError;
pub use crate::model::{
    FoodItem, ImprovementTip, MealScore, Micronutrient, NutritionTotals, ParsedIngredient,
    ScoreCategory, WellnessScore,
};

/// Score a day's nutrition totals against the user's goals.
pub fn score_meal(totals: &NutritionTotals, goals: &GoalProfile) -> MealScore {
    let score = scoring::compute_meal_score(totals, goals);
    debug!("{:#?}", score);
    score
}

/// Combine nutrition, sleep, and recovery inputs into a wellness score.
///
/// Any absent input is replaced by its neutral default, so this always
/// produces a result.
pub fn score_wellness(
    meal_score: Option<&MealScore>,
    sleep_score: Option<u8>,
    resting_heart_rate: Option<f64>,
    hrv: Option<f64>,
) -> WellnessScore {
    let score = scoring::compute_wellness_score(meal_score, sleep_score, resting_heart_rate, hrv);
    debug!("{:#?}", score);
    score
}

/// Parse one free-text ingredient line into a structured record.
///
/// Best-effort: unparseable fragments fall back to defaults (quantity
/// 1.0, unit "item") instead of failing.
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    parser::parse(raw)
}

/// Parse a batch of ingredient lines, one result per line, in order.
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedIngredient> {
    parser::parse_multiple(lines)
}
