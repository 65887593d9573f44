//! Scoring engine: meal scoring against goals and the wellness
//! composite built from nutrition, sleep, and recovery.

pub mod meal;
pub mod wellness;

pub use self::meal::compute_meal_score;
pub use self::wellness::{compute_recovery_score, compute_wellness_score};
