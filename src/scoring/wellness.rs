//! Wellness composite: prior-day nutrition, sleep, and a recovery
//! score derived from resting heart rate and heart-rate variability.

use log::debug;

use crate::model::{MealScore, WellnessScore};

/// Weights of the three pillars in the overall wellness score.
const NUTRITION_WEIGHT: f64 = 0.40;
const SLEEP_WEIGHT: f64 = 0.30;
const RECOVERY_WEIGHT: f64 = 0.30;

/// Points granted when a recovery input is missing: the midpoint of
/// the 0-50 range, a neutral default.
const NEUTRAL_RECOVERY_POINTS: f64 = 25.0;

/// Resting-heart-rate brackets, scanned top-down: the first row whose
/// upper bound exceeds the measurement wins. Lower RHR earns more of
/// the 50 recovery points.
const RHR_BRACKETS: &[(f64, f64)] = &[
    (50.0, 50.0),
    (55.0, 45.0),
    (60.0, 40.0),
    (65.0, 32.0),
    (70.0, 25.0),
    (75.0, 18.0),
    (80.0, 12.0),
];

/// Points for an RHR at or beyond the last bracket.
const RHR_FLOOR_POINTS: f64 = 5.0;

/// HRV brackets (ms), scanned top-down: the first row whose lower
/// bound the measurement reaches wins. Higher HRV earns more points.
const HRV_BRACKETS: &[(f64, f64)] = &[
    (80.0, 50.0),
    (65.0, 44.0),
    (50.0, 38.0),
    (40.0, 30.0),
    (30.0, 22.0),
    (20.0, 14.0),
];

/// Points for an HRV below the last bracket.
const HRV_FLOOR_POINTS: f64 = 6.0;

/// Summary and color per overall-score bucket, scanned top-down.
const WELLNESS_BUCKETS: &[(u8, &str, &str)] = &[
    (90, "Outstanding. Recovery, sleep, and nutrition are all clicking.", "green"),
    (80, "Great shape. Keep the current routine going.", "green"),
    (70, "Good, with one pillar lagging behind the others.", "yellow"),
    (60, "Fair. Prioritize sleep or recovery today.", "orange"),
    (0, "Run down. Take it easy and refuel well.", "red"),
];

/// Recovery points for a resting heart rate, 0-50.
fn rhr_points(rhr: Option<f64>) -> f64 {
    let Some(rhr) = rhr else {
        return NEUTRAL_RECOVERY_POINTS;
    };
    for (bound, points) in RHR_BRACKETS {
        if rhr < *bound {
            return *points;
        }
    }
    RHR_FLOOR_POINTS
}

/// Recovery points for heart-rate variability, 0-50.
fn hrv_points(hrv: Option<f64>) -> f64 {
    let Some(hrv) = hrv else {
        return NEUTRAL_RECOVERY_POINTS;
    };
    for (bound, points) in HRV_BRACKETS {
        if hrv >= *bound {
            return *points;
        }
    }
    HRV_FLOOR_POINTS
}

/// Cardiovascular recovery score from RHR and HRV, clamped to 0-100.
/// Missing inputs contribute the neutral 25 points each.
pub fn compute_recovery_score(resting_heart_rate: Option<f64>, hrv: Option<f64>) -> u8 {
    let points = rhr_points(resting_heart_rate) + hrv_points(hrv);
    points.clamp(0.0, 100.0).round() as u8
}

/// Combine nutrition, sleep, and recovery into one wellness score.
///
/// Every absent input is replaced by its documented neutral default
/// before computation (nutrition and sleep by 0, each recovery input
/// by its 25-point midpoint), so the function is total.
pub fn compute_wellness_score(
    meal_score: Option<&MealScore>,
    sleep_score: Option<u8>,
    resting_heart_rate: Option<f64>,
    hrv: Option<f64>,
) -> WellnessScore {
    let nutrition_score = meal_score.map_or(0, |m| m.overall_score);
    let sleep_score = sleep_score.unwrap_or(0).min(100);
    let recovery_score = compute_recovery_score(resting_heart_rate, hrv);

    let overall = NUTRITION_WEIGHT * f64::from(nutrition_score)
        + SLEEP_WEIGHT * f64::from(sleep_score)
        + RECOVERY_WEIGHT * f64::from(recovery_score);
    let overall_score = overall.round().clamp(0.0, 100.0) as u8;

    let (summary, color) = bucket_for(overall_score);
    let score = WellnessScore {
        overall_score,
        nutrition_score,
        sleep_score,
        recovery_score,
        summary: summary.to_string(),
        color: color.to_string(),
    };
    debug!(
        "wellness score {} (nutrition={} sleep={} recovery={})",
        score.overall_score, score.nutrition_score, score.sleep_score, score.recovery_score
    );
    score
}

fn bucket_for(score: u8) -> (&'static str, &'static str) {
    for (cutoff, summary, color) in WELLNESS_BUCKETS {
        if score >= *cutoff {
            return (summary, color);
        }
    }
    let last = WELLNESS_BUCKETS[WELLNESS_BUCKETS.len() - 1];
    (last.1, last.2)
}
