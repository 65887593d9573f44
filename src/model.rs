use serde::{Deserialize, Serialize};

/// One logged food entry. A day's log is a list of these; summing them
/// produces the [`NutritionTotals`] the scoring engine consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fats_g: f64,
    #[serde(default)]
    pub saturated_fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    #[serde(default)]
    pub calcium_mg: Option<f64>,
    #[serde(default)]
    pub iron_mg: Option<f64>,
    #[serde(default)]
    pub potassium_mg: Option<f64>,
    #[serde(default)]
    pub vitamin_a_mcg: Option<f64>,
    #[serde(default)]
    pub vitamin_c_mg: Option<f64>,
    #[serde(default)]
    pub vitamin_d_mcg: Option<f64>,
    #[serde(default)]
    pub vitamin_b12_mcg: Option<f64>,
    #[serde(default)]
    pub folate_mcg: Option<f64>,
}

/// Aggregated nutrients for a time period (typically one day).
///
/// Micronutrient fields stay `None` when no logged item reported them,
/// which keeps them out of percentage calculations that need a defined
/// goal. A `Some(0.0)` means "tracked and zero", which is different.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub saturated_fat_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
    #[serde(default)]
    pub calcium_mg: Option<f64>,
    #[serde(default)]
    pub iron_mg: Option<f64>,
    #[serde(default)]
    pub potassium_mg: Option<f64>,
    #[serde(default)]
    pub vitamin_a_mcg: Option<f64>,
    #[serde(default)]
    pub vitamin_c_mg: Option<f64>,
    #[serde(default)]
    pub vitamin_d_mcg: Option<f64>,
    #[serde(default)]
    pub vitamin_b12_mcg: Option<f64>,
    #[serde(default)]
    pub folate_mcg: Option<f64>,
}

/// Typed key for micronutrient lookups, instead of string-keyed
/// dictionaries, so the compiler can check exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Micronutrient {
    Calcium,
    Iron,
    Potassium,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminB12,
    Folate,
}

impl NutritionTotals {
    /// Sum a list of food items into one totals record.
    ///
    /// A micronutrient absent from every item stays `None`; otherwise
    /// items missing it contribute zero to the sum.
    pub fn from_items(items: &[FoodItem]) -> Self {
        let mut totals = Self::default();
        for item in items {
            totals.calories += item.calories;
            totals.protein_g += item.protein_g;
            totals.carbs_g += item.carbs_g;
            totals.fats_g += item.fats_g;
            totals.saturated_fat_g += item.saturated_fat_g;
            totals.fiber_g += item.fiber_g;
            totals.sodium_mg += item.sodium_mg;
            add_optional(&mut totals.calcium_mg, item.calcium_mg);
            add_optional(&mut totals.iron_mg, item.iron_mg);
            add_optional(&mut totals.potassium_mg, item.potassium_mg);
            add_optional(&mut totals.vitamin_a_mcg, item.vitamin_a_mcg);
            add_optional(&mut totals.vitamin_c_mg, item.vitamin_c_mg);
            add_optional(&mut totals.vitamin_d_mcg, item.vitamin_d_mcg);
            add_optional(&mut totals.vitamin_b12_mcg, item.vitamin_b12_mcg);
            add_optional(&mut totals.folate_mcg, item.folate_mcg);
        }
        totals
    }

    /// Look up a micronutrient by typed key.
    pub fn micronutrient(&self, key: Micronutrient) -> Option<f64> {
        match key {
            Micronutrient::Calcium => self.calcium_mg,
            Micronutrient::Iron => self.iron_mg,
            Micronutrient::Potassium => self.potassium_mg,
            Micronutrient::VitaminA => self.vitamin_a_mcg,
            Micronutrient::VitaminC => self.vitamin_c_mg,
            Micronutrient::VitaminD => self.vitamin_d_mcg,
            Micronutrient::VitaminB12 => self.vitamin_b12_mcg,
            Micronutrient::Folate => self.folate_mcg,
        }
    }
}

fn add_optional(total: &mut Option<f64>, value: Option<f64>) {
    if let Some(v) = value {
        *total = Some(total.unwrap_or(0.0) + v);
    }
}

/// The category an improvement tip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Calories,
    Macros,
    Quality,
}

/// An advisory tip emitted when a sub-score falls below threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementTip {
    pub category: ScoreCategory,
    pub advice: String,
    pub icon: String,
    pub color: String,
}

/// Graded summary of one day's nutrition versus goals.
///
/// Constructed fresh on every scoring call and immutable afterwards.
/// `personalized_ai_summary` is supplied by an external collaborator,
/// never computed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealScore {
    pub overall_score: u8,
    pub grade: char,
    pub calorie_score: u8,
    pub macro_score: u8,
    pub quality_score: u8,
    pub summary: String,
    #[serde(default)]
    pub personalized_ai_summary: Option<String>,
    pub improvement_tips: Vec<ImprovementTip>,
}

impl MealScore {
    /// Attach an externally generated summary string.
    #[must_use]
    pub fn with_ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.personalized_ai_summary = Some(summary.into());
        self
    }
}

/// Composite of nutrition, sleep, and physiological-recovery scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessScore {
    pub overall_score: u8,
    pub nutrition_score: u8,
    pub sleep_score: u8,
    pub recovery_score: u8,
    pub summary: String,
    pub color: String,
}

/// Structured {quantity, unit, name} extracted from a free-text
/// ingredient line. `original` keeps the verbatim input for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    pub original: String,
}
