//! Best-effort ingredient line parser.
//!
//! Turns free-text lines like "1 1/2 cups chopped onions" into a
//! structured quantity/unit/name triple. Unparseable fragments fall
//! back to defaults (quantity 1.0, unit "item"); this never fails.

use log::debug;

use crate::model::ParsedIngredient;

mod fractions;
mod units;

pub use self::units::ITEM_UNIT;

/// Descriptor fragments removed from a candidate name, in order.
///
/// Comma-attached forms come first so the comma goes with them; the
/// bare word forms catch leading descriptors ("chopped onions").
const DESCRIPTOR_FRAGMENTS: &[&str] = &[
    ", chopped",
    ", diced",
    ", minced",
    ", sifted",
    ", melted",
    ", to taste",
    " to taste",
    " of ",
    "chopped ",
    "diced ",
    "minced ",
    "sifted ",
    "melted ",
];

/// Parse one raw ingredient line.
///
/// The verbatim input is kept in the result's `original` field.
pub fn parse(raw: &str) -> ParsedIngredient {
    let lowered = raw.to_lowercase();
    let substituted = fractions::replace_vulgar_fractions(&lowered);

    let tokens: Vec<&str> = substituted.split_whitespace().collect();
    let (quantity, consumed) = take_quantity(&tokens);
    let rest = tokens[consumed..].join(" ");

    let matched = units::match_unit_prefix(&rest).map(|(unit, after)| (unit, after.to_string()));
    let (unit, candidate) = match matched {
        Some((unit, after)) => (unit.to_string(), after),
        None => (ITEM_UNIT.to_string(), rest),
    };

    let name = clean_name(&candidate);
    let ingredient = ParsedIngredient {
        quantity,
        unit,
        name,
        original: raw.to_string(),
    };
    debug!("parsed {:?} -> {:?}", raw, ingredient);
    ingredient
}

/// Parse a batch of lines, one result per line, order preserved.
pub fn parse_multiple<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedIngredient> {
    lines.iter().map(|line| parse(line.as_ref())).collect()
}

/// Extract a leading quantity from the token list.
///
/// Returns the quantity and how many tokens it consumed. A leading
/// number followed by a fraction or decimal token is a mixed number
/// ("1 1/2" -> 1.5). No parseable leading number means quantity 1.0
/// with nothing consumed. Non-positive numbers count as unparseable,
/// the quantity invariant is > 0.
fn take_quantity(tokens: &[&str]) -> (f64, usize) {
    let first = match tokens.first().and_then(|t| parse_number(t)) {
        Some(v) if v > 0.0 => v,
        _ => return (1.0, 0),
    };

    if let Some(second) = tokens.get(1) {
        if is_fraction_token(second) {
            if let Some(v) = parse_number(second) {
                if v > 0.0 {
                    return (first + v, 2);
                }
            }
        }
    }
    (first, 1)
}

/// Parse a token as a plain number or an "a/b" fraction.
fn parse_number(token: &str) -> Option<f64> {
    if let Ok(v) = token.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    let (num, den) = token.split_once('/')?;
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 {
        return None;
    }
    let v = num / den;
    v.is_finite().then_some(v)
}

/// Only fraction or decimal tokens extend a mixed number; a plain
/// integer after the quantity is part of the name ("2 3-inch sticks").
fn is_fraction_token(token: &str) -> bool {
    token.contains('/') || token.contains('.')
}

/// Strip descriptor fragments and collapse leftover whitespace.
/// Runs whether or not a unit matched.
fn clean_name(candidate: &str) -> String {
    let mut name = candidate.to_string();
    for fragment in DESCRIPTOR_FRAGMENTS {
        if name.contains(fragment) {
            name = name.replace(fragment, " ");
        }
    }
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
