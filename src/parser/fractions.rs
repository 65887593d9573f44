/// Unicode vulgar-fraction glyphs and their decimal string equivalents.
///
/// Thirds and sixths are rounded to three places; the parser treats the
/// substituted text as an opaque decimal afterwards.
const FRACTION_GLYPHS: &[(char, &str)] = &[
    ('½', "0.5"),
    ('⅓', "0.333"),
    ('⅔', "0.667"),
    ('¼', "0.25"),
    ('¾', "0.75"),
    ('⅕', "0.2"),
    ('⅖', "0.4"),
    ('⅗', "0.6"),
    ('⅘', "0.8"),
    ('⅙', "0.167"),
    ('⅚', "0.833"),
    ('⅛', "0.125"),
    ('⅜', "0.375"),
    ('⅝', "0.625"),
    ('⅞', "0.875"),
];

/// Replace every vulgar-fraction glyph with its decimal spelling.
pub fn replace_vulgar_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match FRACTION_GLYPHS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, decimal)) => out.push_str(decimal),
            None => out.push(c),
        }
    }
    out
}
