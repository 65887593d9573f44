use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// A user's daily nutrition targets.
///
/// All targets are positive reals. A target of zero (or below) means
/// "goal not yet known" and the scoring engine skips the affected
/// component instead of dividing by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProfile {
    #[serde(default = "default_calorie_goal")]
    pub calorie_goal: f64,
    #[serde(default = "default_protein_goal")]
    pub protein_goal_g: f64,
    #[serde(default = "default_carbs_goal")]
    pub carbs_goal_g: f64,
    #[serde(default = "default_fats_goal")]
    pub fats_goal_g: f64,
    #[serde(default = "default_fiber_goal")]
    pub fiber_goal_g: f64,
    #[serde(default = "default_saturated_fat_goal")]
    pub saturated_fat_goal_g: f64,
    /// Defaults to 2300 mg when unset, the common dietary guideline.
    #[serde(default = "default_sodium_goal")]
    pub sodium_goal_mg: f64,
}

impl Default for GoalProfile {
    fn default() -> Self {
        Self {
            calorie_goal: default_calorie_goal(),
            protein_goal_g: default_protein_goal(),
            carbs_goal_g: default_carbs_goal(),
            fats_goal_g: default_fats_goal(),
            fiber_goal_g: default_fiber_goal(),
            saturated_fat_goal_g: default_saturated_fat_goal(),
            sodium_goal_mg: default_sodium_goal(),
        }
    }
}

// Default value functions
fn default_calorie_goal() -> f64 {
    2000.0
}

fn default_protein_goal() -> f64 {
    100.0
}

fn default_carbs_goal() -> f64 {
    250.0
}

fn default_fats_goal() -> f64 {
    65.0
}

fn default_fiber_goal() -> f64 {
    28.0
}

fn default_saturated_fat_goal() -> f64 {
    20.0
}

fn default_sodium_goal() -> f64 {
    2300.0
}

impl GoalProfile {
    /// Load the goal profile from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with NUTRI_ prefix
    /// 2. goals.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: NUTRI_CALORIE_GOAL
    pub fn load() -> Result<Self, ConfigError> {
        load_goals("goals")
    }

    /// Load the goal profile from a specific file (extension optional).
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        load_goals(path)
    }
}

fn load_goals(file: &str) -> Result<GoalProfile, ConfigError> {
    let settings = Config::builder()
        // Optional goals file (can be missing)
        .add_source(File::with_name(file).required(false))
        // Environment variables with NUTRI_ prefix, e.g. NUTRI_CALORIE_GOAL
        .add_source(Environment::with_prefix("NUTRI").try_parsing(true))
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_calorie_goal(), 2000.0);
        assert_eq!(default_protein_goal(), 100.0);
        assert_eq!(default_sodium_goal(), 2300.0);
    }

    #[test]
    fn test_goal_profile_default_sodium() {
        let goals = GoalProfile::default();
        assert_eq!(goals.sodium_goal_mg, 2300.0);
    }

    #[test]
    fn test_load_goals_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("NUTRI_"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // Loading without a goals file falls back to serde defaults
        let goals = load_goals("goals-missing-for-test").unwrap();
        assert_eq!(goals.calorie_goal, 2000.0);
        assert_eq!(goals.sodium_goal_mg, 2300.0);
    }
}
