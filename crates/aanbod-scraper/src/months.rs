//! Dutch month-token lexicon shared by all date parsing.

/// Resolves a Dutch month token to its calendar month number (1–12).
///
/// Accepts both the full names (`januari`…`december`) and the 3-letter
/// abbreviations (`jan`…`dec`), case-insensitively. Returns `None` for
/// anything else, including bare numerics like `"09"`: those are day
/// tokens, not month tokens.
#[must_use]
pub(crate) fn month_number(token: &str) -> Option<u32> {
    let number = match token.to_lowercase().as_str() {
        "januari" | "jan" => 1,
        "februari" | "feb" => 2,
        "maart" | "mrt" => 3,
        "april" | "apr" => 4,
        "mei" => 5,
        "juni" | "jun" => 6,
        "juli" | "jul" => 7,
        "augustus" | "aug" => 8,
        "september" | "sep" => 9,
        "oktober" | "okt" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(number)
}
