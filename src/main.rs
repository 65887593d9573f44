use std::env;
use std::fs;

use nutriscore::{
    parse_ingredients, score_meal, score_wellness, EngineError, GoalProfile, NutritionTotals,
};

const USAGE: &str = "Usage:
  nutriscore parse <ingredient line>...
  nutriscore score <totals.json> [goals.toml]
  nutriscore wellness <totals.json|-> [goals.toml|-] [sleep] [rhr] [hrv]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).ok_or(USAGE)?;

    match command.as_str() {
        "parse" => {
            let lines = &args[2..];
            if lines.is_empty() {
                return Err(USAGE.into());
            }
            let parsed = parse_ingredients(lines);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        "score" => {
            let totals = read_totals(args.get(2).ok_or(USAGE)?)?;
            let goals = read_goals(args.get(3))?;
            let score = score_meal(&totals, &goals);
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        "wellness" => {
            let meal_score = match args.get(2).filter(|a| a.as_str() != "-") {
                Some(path) => {
                    let totals = read_totals(path)?;
                    let goals = read_goals(args.get(3))?;
                    Some(score_meal(&totals, &goals))
                }
                None => None,
            };
            let sleep = parse_optional(args.get(4))?.map(|v: f64| v.clamp(0.0, 100.0) as u8);
            let rhr = parse_optional(args.get(5))?;
            let hrv = parse_optional(args.get(6))?;
            let score = score_wellness(meal_score.as_ref(), sleep, rhr, hrv);
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

/// Read a NutritionTotals record from a JSON file.
fn read_totals(path: &str) -> Result<NutritionTotals, EngineError> {
    let body = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}

/// Read goals from the given toml file, or fall back to the standard
/// goals.toml / environment / defaults chain.
fn read_goals(path: Option<&String>) -> Result<GoalProfile, EngineError> {
    match path.filter(|a| a.as_str() != "-") {
        Some(path) => Ok(GoalProfile::load_from(path.trim_end_matches(".toml"))?),
        None => Ok(GoalProfile::load()?),
    }
}

/// Parse an optional numeric argument; "-" skips it.
fn parse_optional(arg: Option<&String>) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    match arg.filter(|a| a.as_str() != "-") {
        Some(value) => Ok(Some(value.parse()?)),
        None => Ok(None),
    }
}
