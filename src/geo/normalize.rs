//! Comparison keys for free-text place names.

use deunicode::deunicode_char;

/// Characters that separate words in a place name.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\'' | '\u{2018}' | '\u{2019}' | '-' | '\u{2013}' | '\u{2014}' | '/' | ',' | '(' | ')'
    )
}

fn blank_separators(text: &str) -> String {
    text.chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect()
}

/// Fold one character to ASCII. Characters without a transliteration are
/// kept as-is so distinct unknown characters stay distinct.
fn fold_char(c: char, out: &mut String) {
    match deunicode_char(c) {
        Some(folded) => out.push_str(folded),
        None => out.push(c),
    }
}

/// Build the comparison key for a place name.
///
/// Lowercases, folds accents to ASCII, turns apostrophes, dashes, slashes,
/// commas and parentheses into spaces, then collapses whitespace. So
/// `"Côte d'Ivoire"`, `"Cote d Ivoire"` and `"Côte d’Ivoire"` share one key.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    // Curly quotes and long dashes are blanked before folding; the second
    // pass catches ASCII separators produced by transliteration.
    let mut folded = String::with_capacity(text.len());
    for c in blank_separators(text).chars() {
        fold_char(c, &mut folded);
    }
    let folded = folded.to_lowercase();
    blank_separators(&folded)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `true` when both names share a comparison key.
pub fn same_place(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
