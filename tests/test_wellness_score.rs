use nutriscore::{score_meal, score_wellness, GoalProfile, NutritionTotals};

#[test]
fn test_all_inputs_absent_gives_neutral_recovery() {
    let score = score_wellness(None, None, None, None);
    // 25 + 25 neutral recovery points, round(0.30 * 50) overall
    assert_eq!(score.recovery_score, 50);
    assert_eq!(score.overall_score, 15);
}

#[test]
fn test_nutrition_carries_40_percent() {
    let goals = GoalProfile::default();
    let totals = NutritionTotals {
        calories: goals.calorie_goal,
        protein_g: goals.protein_goal_g,
        carbs_g: goals.carbs_goal_g,
        fats_g: goals.fats_goal_g,
        saturated_fat_g: goals.saturated_fat_goal_g,
        fiber_g: goals.fiber_goal_g,
        sodium_mg: goals.sodium_goal_mg,
        ..Default::default()
    };
    let meal = score_meal(&totals, &goals);
    assert_eq!(meal.overall_score, 100);

    let with_meal = score_wellness(Some(&meal), None, None, None);
    let without_meal = score_wellness(None, None, None, None);
    // round(0.40 * 100 + 0.30 * 0 + 0.30 * 50) vs round(0.30 * 50)
    assert_eq!(with_meal.overall_score, 55);
    assert_eq!(without_meal.overall_score, 15);
    assert_eq!(with_meal.nutrition_score, 100);
}

#[test]
fn test_excellent_recovery_inputs() {
    let score = score_wellness(None, Some(100), Some(45.0), Some(95.0));
    assert_eq!(score.recovery_score, 100);
    // round(0.30 * 100 + 0.30 * 100) = 60
    assert_eq!(score.overall_score, 60);
}

#[test]
fn test_color_tracks_overall_bucket() {
    let low = score_wellness(None, None, None, None);
    assert_eq!(low.color, "red");

    let high = score_wellness(None, Some(100), Some(45.0), Some(95.0));
    assert_eq!(high.color, "orange");
}

#[test]
fn test_poor_recovery_inputs_floor_out() {
    let score = score_wellness(None, None, Some(95.0), Some(8.0));
    // RHR floor 5 + HRV floor 6
    assert_eq!(score.recovery_score, 11);
}

#[test]
fn test_deterministic_for_identical_inputs() {
    let a = score_wellness(None, Some(70), Some(61.5), Some(47.0));
    let b = score_wellness(None, Some(70), Some(61.5), Some(47.0));
    assert_eq!(a.overall_score, b.overall_score);
    assert_eq!(a.recovery_score, b.recovery_score);
    assert_eq!(a.summary, b.summary);
}
