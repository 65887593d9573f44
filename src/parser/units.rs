/// Sentinel unit for lines with no recognizable measurement.
pub const ITEM_UNIT: &str = "item";

/// Canonical unit followed by its accepted textual variants.
///
/// Matching is longest-alias-first, with ties resolved by table order
/// (canonical form before variants), so the result never depends on
/// map iteration order.
const UNIT_ALIASES: &[(&str, &[&str])] = &[
    ("cup", &["cups", "c.", "c"]),
    ("tablespoon", &["tablespoons", "tbsp.", "tbsp", "tbs"]),
    ("teaspoon", &["teaspoons", "tsp.", "tsp"]),
    ("ounce", &["ounces", "oz.", "oz"]),
    ("pound", &["pounds", "lbs", "lb.", "lb"]),
    ("gram", &["grams", "g.", "g"]),
    ("kilogram", &["kilograms", "kg.", "kg"]),
    ("milliliter", &["milliliters", "ml.", "ml"]),
    ("liter", &["liters", "l"]),
    ("pinch", &["pinches"]),
    ("dash", &["dashes"]),
    ("clove", &["cloves"]),
    ("slice", &["slices"]),
    ("piece", &["pieces"]),
    ("can", &["cans"]),
    ("package", &["packages", "pkg"]),
    ("bunch", &["bunches"]),
    ("head", &["heads"]),
    ("stalk", &["stalks"]),
    ("sprig", &["sprigs"]),
];

/// Try to match a known unit at the start of `text`.
///
/// An alias matches when it is the whole text or is followed by a
/// space. Returns the canonical unit and the unconsumed remainder
/// (leading space included, the name cleaner deals with it).
pub fn match_unit_prefix(text: &str) -> Option<(&'static str, &str)> {
    let mut best: Option<(&'static str, usize)> = None;
    for (canonical, variants) in UNIT_ALIASES {
        for alias in std::iter::once(*canonical).chain(variants.iter().copied()) {
            if alias_matches(text, alias) {
                let longer = match best {
                    Some((_, len)) => alias.len() > len,
                    None => true,
                };
                if longer {
                    best = Some((canonical, alias.len()));
                }
            }
        }
    }
    best.map(|(canonical, len)| (canonical, &text[len..]))
}

fn alias_matches(text: &str, alias: &str) -> bool {
    match text.strip_prefix(alias) {
        Some(rest) => rest.is_empty() || rest.starts_with(' '),
        None => false,
    }
}
