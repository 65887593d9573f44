use nutriscore::{parse_ingredient, score_meal, DailyReport, GoalProfile, NutritionTotals};

#[test]
fn test_empty_ingredient_line() {
    let parsed = parse_ingredient("");
    assert_eq!(parsed.quantity, 1.0);
    assert_eq!(parsed.unit, "item");
    assert_eq!(parsed.name, "");
    assert_eq!(parsed.original, "");
}

#[test]
fn test_whitespace_only_line() {
    let parsed = parse_ingredient("   \t ");
    assert_eq!(parsed.quantity, 1.0);
    assert_eq!(parsed.unit, "item");
    assert_eq!(parsed.name, "");
}

#[test]
fn test_bare_number_line() {
    let parsed = parse_ingredient("2");
    assert_eq!(parsed.quantity, 2.0);
    assert_eq!(parsed.unit, "item");
    assert_eq!(parsed.name, "");
}

#[test]
fn test_unit_without_name() {
    let parsed = parse_ingredient("1 cup");
    assert_eq!(parsed.quantity, 1.0);
    assert_eq!(parsed.unit, "cup");
    assert_eq!(parsed.name, "");
}

#[test]
fn test_negative_quantity_rejected() {
    let parsed = parse_ingredient("-2 cups flour");
    assert_eq!(parsed.quantity, 1.0);
    assert!(parsed.quantity > 0.0);
}

#[test]
fn test_quantity_always_positive_across_garbage() {
    for line in ["0 eggs", "-1 cup milk", "1/0 tsp salt", "NaN things", "inf cups air"] {
        let parsed = parse_ingredient(line);
        assert!(parsed.quantity > 0.0, "line {:?} broke the invariant", line);
    }
}

#[test]
fn test_unit_word_embedded_in_name_is_not_a_unit() {
    let parsed = parse_ingredient("1 cupcake liner");
    assert_eq!(parsed.unit, "item");
    assert_eq!(parsed.name, "cupcake liner");
}

#[test]
fn test_all_goals_degenerate_still_scores() {
    let goals = GoalProfile {
        calorie_goal: -100.0,
        protein_goal_g: 0.0,
        carbs_goal_g: 0.0,
        fats_goal_g: 0.0,
        fiber_goal_g: 0.0,
        saturated_fat_goal_g: 0.0,
        sodium_goal_mg: 0.0,
    };
    let totals = NutritionTotals {
        calories: 2200.0,
        protein_g: 110.0,
        ..Default::default()
    };
    let score = score_meal(&totals, &goals);
    assert!(score.overall_score <= 100);
    assert!(!score.summary.is_empty());
}

#[test]
fn test_empty_day_report() {
    // No inputs at all still yields a wellness composite
    let report = DailyReport::builder().build().unwrap();
    assert!(report.meal_score.is_none());
    assert_eq!(report.wellness.overall_score, 15);
}
