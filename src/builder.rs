use crate::config::GoalProfile;
use crate::error::EngineError;
use crate::model::{MealScore, NutritionTotals, WellnessScore};
use crate::scoring::{compute_meal_score, compute_wellness_score};

/// A scored day: the meal score (when a food log was provided) and the
/// wellness composite built on top of it.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub meal_score: Option<MealScore>,
    pub wellness: WellnessScore,
}

impl DailyReport {
    /// Start building a report.
    pub fn builder() -> DailyReportBuilder {
        DailyReportBuilder::default()
    }
}

/// Builder for scoring a day from whatever inputs are available.
///
/// # Example
/// ```
/// use nutriscore::DailyReport;
///
/// let builder = DailyReport::builder()
///     .sleep_score(82)
///     .resting_heart_rate(58.0)
///     .hrv(64.0);
/// ```
#[derive(Debug, Default)]
pub struct DailyReportBuilder {
    totals: Option<NutritionTotals>,
    goals: Option<GoalProfile>,
    sleep_score: Option<u8>,
    resting_heart_rate: Option<f64>,
    hrv: Option<f64>,
    ai_summary: Option<String>,
}

impl DailyReportBuilder {
    /// Set the day's nutrition totals.
    pub fn totals(mut self, totals: NutritionTotals) -> Self {
        self.totals = Some(totals);
        self
    }

    /// Set the goal profile to score against.
    ///
    /// When totals are given without goals, the profile is loaded from
    /// `goals.toml` / `NUTRI_*` environment variables instead.
    pub fn goals(mut self, goals: GoalProfile) -> Self {
        self.goals = Some(goals);
        self
    }

    /// Set the externally supplied sleep score (0-100).
    pub fn sleep_score(mut self, score: u8) -> Self {
        self.sleep_score = Some(score);
        self
    }

    /// Set the measured resting heart rate in bpm.
    pub fn resting_heart_rate(mut self, bpm: f64) -> Self {
        self.resting_heart_rate = Some(bpm);
        self
    }

    /// Set the measured heart-rate variability in ms.
    pub fn hrv(mut self, ms: f64) -> Self {
        self.hrv = Some(ms);
        self
    }

    /// Attach an externally generated summary to the meal score.
    pub fn ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = Some(summary.into());
        self
    }

    /// Score the day.
    ///
    /// The meal score is computed when totals were provided; the
    /// wellness composite is always computed, with documented neutral
    /// defaults for anything missing.
    pub fn build(self) -> Result<DailyReport, EngineError> {
        if self.goals.is_some() && self.totals.is_none() {
            return Err(EngineError::BuilderError(
                "goals were provided without nutrition totals".to_string(),
            ));
        }

        let meal_score = match self.totals {
            Some(totals) => {
                let goals = match self.goals {
                    Some(goals) => goals,
                    None => GoalProfile::load()?,
                };
                let score = compute_meal_score(&totals, &goals);
                Some(match self.ai_summary {
                    Some(summary) => score.with_ai_summary(summary),
                    None => score,
                })
            }
            None => None,
        };

        let wellness = compute_wellness_score(
            meal_score.as_ref(),
            self.sleep_score,
            self.resting_heart_rate,
            self.hrv,
        );

        Ok(DailyReport { meal_score, wellness })
    }
}
