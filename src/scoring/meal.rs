//! Daily meal scoring: calorie, macro, and quality sub-scores blended
//! into one graded 0-100 result with advisory tips.

use log::debug;

use crate::config::GoalProfile;
use crate::model::{ImprovementTip, MealScore, NutritionTotals, ScoreCategory};

/// Weights of the three sub-scores in the overall meal score.
/// Same 40/30/30 split the wellness composite uses.
const CALORIE_WEIGHT: f64 = 0.40;
const MACRO_WEIGHT: f64 = 0.30;
const QUALITY_WEIGHT: f64 = 0.30;

/// A sub-score below this emits an improvement tip.
const TIP_THRESHOLD: u8 = 70;

/// Deviation penalty per unit of relative deviation from goal. A score
/// reaches zero at goal ± two thirds of goal, well inside the 0..2x
/// goal range.
const PENALTY_SLOPE: f64 = 150.0;

/// Ordered grade cutoffs, scanned top-down. Exhaustive over 0..=100.
const GRADE_CUTOFFS: &[(u8, char)] = &[(90, 'A'), (80, 'B'), (70, 'C'), (60, 'D'), (0, 'F')];

/// Summary per grade bucket, same ordering as the cutoffs.
const SUMMARY_BUCKETS: &[(u8, &str)] = &[
    (90, "Excellent day. Your intake lined up with every goal."),
    (80, "Strong day overall, with a little room to fine-tune."),
    (70, "A decent day. A couple of targets drifted."),
    (60, "Below target today. The tips point at the biggest gaps."),
    (0, "Way off target today. Small corrections tomorrow add up."),
];

/// Score a day's totals against the user's goals.
///
/// Pure and total: degenerate goals (zero or negative targets) are
/// treated as "goal not yet known" and their component is skipped
/// instead of dividing by it, so the result never carries NaN.
pub fn compute_meal_score(totals: &NutritionTotals, goals: &GoalProfile) -> MealScore {
    let calorie_score = deviation_score(totals.calories, goals.calorie_goal).unwrap_or(100.0);

    let macro_score = mean_or_full(&[
        deviation_score(totals.protein_g, goals.protein_goal_g),
        deviation_score(totals.carbs_g, goals.carbs_goal_g),
        deviation_score(totals.fats_g, goals.fats_goal_g),
    ]);

    let quality_score = mean_or_full(&[
        sufficiency_score(totals.fiber_g, goals.fiber_goal_g),
        discipline_score(totals.saturated_fat_g, goals.saturated_fat_goal_g),
        discipline_score(totals.sodium_mg, goals.sodium_goal_mg),
    ]);

    let overall = CALORIE_WEIGHT * calorie_score
        + MACRO_WEIGHT * macro_score
        + QUALITY_WEIGHT * quality_score;
    let overall_score = to_score(overall);

    let score = MealScore {
        overall_score,
        grade: grade_for(overall_score),
        calorie_score: to_score(calorie_score),
        macro_score: to_score(macro_score),
        quality_score: to_score(quality_score),
        summary: summary_for(overall_score).to_string(),
        personalized_ai_summary: None,
        improvement_tips: improvement_tips(
            totals,
            goals,
            to_score(calorie_score),
            to_score(macro_score),
            to_score(quality_score),
        ),
    };
    debug!(
        "meal score {} ({}) cal={} macro={} quality={}",
        score.overall_score, score.grade, score.calorie_score, score.macro_score, score.quality_score
    );
    score
}

/// Closeness to goal, penalizing deviation in either direction.
/// 100 exactly at goal. `None` when the goal is not yet known.
fn deviation_score(actual: f64, goal: f64) -> Option<f64> {
    if goal <= 0.0 {
        return None;
    }
    let penalty = PENALTY_SLOPE * (actual - goal).abs() / goal;
    Some((100.0 - penalty).clamp(0.0, 100.0))
}

/// More is better, full credit at or above goal (fiber).
fn sufficiency_score(actual: f64, goal: f64) -> Option<f64> {
    if goal <= 0.0 {
        return None;
    }
    Some((actual / goal * 100.0).clamp(0.0, 100.0))
}

/// Staying at or below goal is full credit, exceeding it is a linear
/// penalty (saturated fat, sodium).
fn discipline_score(actual: f64, goal: f64) -> Option<f64> {
    if goal <= 0.0 {
        return None;
    }
    if actual <= goal {
        return Some(100.0);
    }
    let penalty = (actual - goal) / goal * 100.0;
    Some((100.0 - penalty).clamp(0.0, 100.0))
}

/// Mean over the defined components; full credit when none is defined
/// (no known goal means no penalty).
fn mean_or_full(parts: &[Option<f64>]) -> f64 {
    let defined: Vec<f64> = parts.iter().flatten().copied().collect();
    if defined.is_empty() {
        return 100.0;
    }
    defined.iter().sum::<f64>() / defined.len() as f64
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn grade_for(score: u8) -> char {
    for (cutoff, grade) in GRADE_CUTOFFS {
        if score >= *cutoff {
            return *grade;
        }
    }
    'F'
}

fn summary_for(score: u8) -> &'static str {
    for (cutoff, summary) in SUMMARY_BUCKETS {
        if score >= *cutoff {
            return summary;
        }
    }
    SUMMARY_BUCKETS[SUMMARY_BUCKETS.len() - 1].1
}

/// One tip per sub-score under threshold, with advice specific to the
/// direction of the deviation.
fn improvement_tips(
    totals: &NutritionTotals,
    goals: &GoalProfile,
    calorie_score: u8,
    macro_score: u8,
    quality_score: u8,
) -> Vec<ImprovementTip> {
    let mut tips = Vec::new();

    if calorie_score < TIP_THRESHOLD {
        let advice = if totals.calories > goals.calorie_goal {
            format!(
                "Calories came in about {} over your goal. Plan a lighter meal or smaller portions.",
                (totals.calories - goals.calorie_goal).round()
            )
        } else {
            format!(
                "Calories came in about {} under your goal. Add a protein-rich snack to close the gap.",
                (goals.calorie_goal - totals.calories).round()
            )
        };
        tips.push(ImprovementTip {
            category: ScoreCategory::Calories,
            advice,
            icon: "flame".to_string(),
            color: "orange".to_string(),
        });
    }

    if macro_score < TIP_THRESHOLD {
        tips.push(ImprovementTip {
            category: ScoreCategory::Macros,
            advice: worst_macro_advice(totals, goals),
            icon: "chart-bar".to_string(),
            color: "blue".to_string(),
        });
    }

    if quality_score < TIP_THRESHOLD {
        let advice = if goals.sodium_goal_mg > 0.0 && totals.sodium_mg > goals.sodium_goal_mg {
            "Sodium exceeded your goal. Go easier on processed and salty foods."
        } else if goals.saturated_fat_goal_g > 0.0
            && totals.saturated_fat_g > goals.saturated_fat_goal_g
        {
            "Saturated fat exceeded your goal. Swap in leaner protein sources."
        } else {
            "Fiber fell short of your goal. Add vegetables, legumes, or whole grains."
        };
        tips.push(ImprovementTip {
            category: ScoreCategory::Quality,
            advice: advice.to_string(),
            icon: "leaf".to_string(),
            color: "green".to_string(),
        });
    }

    tips
}

/// Name the macro furthest from its goal, with direction.
fn worst_macro_advice(totals: &NutritionTotals, goals: &GoalProfile) -> String {
    let macros = [
        ("protein", totals.protein_g, goals.protein_goal_g),
        ("carbs", totals.carbs_g, goals.carbs_goal_g),
        ("fats", totals.fats_g, goals.fats_goal_g),
    ];

    let mut worst: Option<(&str, f64, f64)> = None;
    for (name, actual, goal) in macros {
        if goal <= 0.0 {
            continue;
        }
        let deviation = (actual - goal).abs() / goal;
        let is_worse = match worst {
            Some((_, _, worst_dev)) => deviation > worst_dev,
            None => true,
        };
        if is_worse {
            worst = Some((name, actual - goal, deviation));
        }
    }

    match worst {
        Some((name, diff, _)) if diff > 0.0 => {
            format!("Your {} landed well over goal. Rebalance tomorrow's meals.", name)
        }
        Some((name, _, _)) => {
            format!("Your {} landed under goal. Work it into your next meal.", name)
        }
        None => "Macros drifted from your goals. Rebalance tomorrow's meals.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_target_totals(goals: &GoalProfile) -> NutritionTotals {
        NutritionTotals {
            calories: goals.calorie_goal,
            protein_g: goals.protein_goal_g,
            carbs_g: goals.carbs_goal_g,
            fats_g: goals.fats_goal_g,
            saturated_fat_g: goals.saturated_fat_goal_g,
            fiber_g: goals.fiber_goal_g,
            sodium_mg: goals.sodium_goal_mg,
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_goal_scores_100() {
        let goals = GoalProfile::default();
        let score = compute_meal_score(&on_target_totals(&goals), &goals);
        assert_eq!(score.calorie_score, 100);
        assert_eq!(score.macro_score, 100);
        assert_eq!(score.quality_score, 100);
        assert_eq!(score.overall_score, 100);
        assert_eq!(score.grade, 'A');
        assert!(score.improvement_tips.is_empty());
    }

    #[test]
    fn test_deviation_score_symmetric() {
        let over = deviation_score(2200.0, 2000.0).unwrap();
        let under = deviation_score(1800.0, 2000.0).unwrap();
        assert_eq!(over, under);
        assert_eq!(over, 85.0);
    }

    #[test]
    fn test_deviation_score_bottoms_out_before_double() {
        // Zero well before 2x goal in either direction
        assert_eq!(deviation_score(3400.0, 2000.0).unwrap(), 0.0);
        assert_eq!(deviation_score(0.0, 2000.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_goal_is_skipped_not_divided() {
        let goals = GoalProfile {
            calorie_goal: 0.0,
            protein_goal_g: 0.0,
            carbs_goal_g: 0.0,
            fats_goal_g: 0.0,
            fiber_goal_g: 0.0,
            saturated_fat_goal_g: 0.0,
            sodium_goal_mg: 0.0,
        };
        let totals = NutritionTotals {
            calories: 1800.0,
            protein_g: 90.0,
            ..Default::default()
        };
        let score = compute_meal_score(&totals, &goals);
        // No known goal means no penalty anywhere
        assert_eq!(score.overall_score, 100);
    }

    #[test]
    fn test_discipline_full_credit_below_goal() {
        assert_eq!(discipline_score(1500.0, 2300.0), Some(100.0));
    }

    #[test]
    fn test_discipline_penalizes_excess() {
        let score = discipline_score(3450.0, 2300.0).unwrap();
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_sufficiency_caps_at_100() {
        assert_eq!(sufficiency_score(40.0, 28.0), Some(100.0));
        assert_eq!(sufficiency_score(14.0, 28.0), Some(50.0));
    }

    #[test]
    fn test_grade_cutoffs() {
        assert_eq!(grade_for(100), 'A');
        assert_eq!(grade_for(90), 'A');
        assert_eq!(grade_for(89), 'B');
        assert_eq!(grade_for(79), 'C');
        assert_eq!(grade_for(69), 'D');
        assert_eq!(grade_for(59), 'F');
        assert_eq!(grade_for(0), 'F');
    }

    #[test]
    fn test_tips_name_the_deviation_direction() {
        let goals = GoalProfile::default();
        let totals = NutritionTotals {
            calories: goals.calorie_goal * 1.6,
            protein_g: goals.protein_goal_g,
            carbs_g: goals.carbs_goal_g,
            fats_g: goals.fats_goal_g,
            saturated_fat_g: goals.saturated_fat_goal_g,
            fiber_g: goals.fiber_goal_g,
            sodium_mg: goals.sodium_goal_mg * 2.0,
            ..Default::default()
        };
        let score = compute_meal_score(&totals, &goals);
        let calorie_tip = score
            .improvement_tips
            .iter()
            .find(|t| t.category == ScoreCategory::Calories)
            .unwrap();
        assert!(calorie_tip.advice.contains("over your goal"));
        let quality_tip = score
            .improvement_tips
            .iter()
            .find(|t| t.category == ScoreCategory::Quality)
            .unwrap();
        assert!(quality_tip.advice.contains("Sodium exceeded"));
    }

    #[test]
    fn test_all_scores_in_range_for_extreme_intake() {
        let goals = GoalProfile::default();
        let totals = NutritionTotals {
            calories: 50_000.0,
            protein_g: 0.0,
            carbs_g: 4_000.0,
            fats_g: 900.0,
            saturated_fat_g: 500.0,
            fiber_g: 0.0,
            sodium_mg: 30_000.0,
            ..Default::default()
        };
        let score = compute_meal_score(&totals, &goals);
        assert!(score.overall_score <= 100);
        assert!(score.calorie_score <= 100);
        assert!(score.macro_score <= 100);
        assert!(score.quality_score <= 100);
        assert_eq!(score.grade, 'F');
    }
}
