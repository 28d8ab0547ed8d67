use regex::Regex;
use std::sync::OnceLock;

use crate::models::CardValue;

const MIN_VALUE: u16 = 1;
const MAX_VALUE: u16 = 2000;

fn value_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"G(\d{1,4})").unwrap())
}

/// Rewrite glyphs the OCR engine routinely confuses with digits.
///
/// Idempotent: the replacement characters are never themselves replaced.
pub fn correct_confusions(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'O' | 'o' => '0',
            'i' | 'l' | 'I' => '1',
            other => other,
        })
        .collect()
}

/// Extract a card value from recognized tokens.
///
/// Each token is confusion-corrected, then searched for `G` followed by 1-4
/// digits. A match outside [1, 2000] does not count; the search moves on to
/// the next token. Exhausting all tokens yields `Unrecognized`, which also
/// covers special cards that carry no numeric value at all.
pub fn parse_value<S: AsRef<str>>(tokens: &[S]) -> CardValue {
    for token in tokens {
        let corrected = correct_confusions(token.as_ref());
        if let Some(captures) = value_pattern().captures(&corrected) {
            if let Ok(value) = captures[1].parse::<u16>() {
                if (MIN_VALUE..=MAX_VALUE).contains(&value) {
                    return CardValue::Numeric(value);
                }
            }
        }
    }
    CardValue::Unrecognized
}
