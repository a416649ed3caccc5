//! Accepted-answer sets and the numeric renderings they are built from.

use crate::locale::{Lexicon, NumberFormat, SynonymMap};

/// Ordered, duplicate-free list of accepted answers whose first entry is the
/// display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSet {
    formats: Vec<String>,
}

impl FormatSet {
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            formats: vec![display.into()],
        }
    }

    /// Add a variant; blank and repeated strings are ignored.
    pub fn push(&mut self, format: impl Into<String>) {
        let format = format.into();
        if format.trim().is_empty() || self.formats.contains(&format) {
            return;
        }
        self.formats.push(format);
    }

    pub fn extend<I, S>(&mut self, formats: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for format in formats {
            self.push(format);
        }
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        let display = self.formats[0].clone();
        (display, self.formats)
    }
}

// ==================== Numeric Rendering ====================

/// Render `value` with at most two decimals, dropping trailing zeros, using
/// `separator` as the decimal mark.
pub fn format_decimal(value: f64, separator: char) -> String {
    let mut text = format!("{:.2}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    if separator != '.' {
        text = text.replace('.', &separator.to_string());
    }
    text
}

/// Whether `value` has no fractional part.
pub fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

/// Insert `separator` between groups of three digits.
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Numeral renderings of `value` for a locale: the locale's decimal mark
/// first, then the plain `.` form when it differs.
pub fn numeral_forms(value: f64, number: &NumberFormat) -> Vec<String> {
    let local = format_decimal(value, number.decimal_separator);
    let plain = format_decimal(value, '.');
    if local == plain {
        vec![local]
    } else {
        vec![local, plain]
    }
}

/// Spelled-out forms of a whole number: the speller's word followed by any
/// synonyms the locale lists for it (二 → 两).
pub fn word_forms(value: i64, lexicon: &Lexicon, synonyms: &SynonymMap) -> Vec<String> {
    let speller = match lexicon.number_words {
        Some(speller) => speller,
        None => return Vec::new(),
    };
    let word = match u32::try_from(value).ok().and_then(|n| speller.spell(n)) {
        Some(word) => word,
        None => return Vec::new(),
    };

    let mut forms = vec![word.clone()];
    if let Some(alternates) = synonyms.get(&word.to_lowercase()) {
        forms.extend(alternates.iter().cloned());
    }
    forms
}

/// Decimal-word renderings of a fractional value: "2 point 5" always, and
/// "two point five" when the locale can spell the integer part.
pub fn decimal_word_forms(value: f64, lexicon: &Lexicon) -> Vec<String> {
    let plain = format_decimal(value.abs(), '.');
    let (integer, fraction) = match plain.split_once('.') {
        Some(parts) => parts,
        None => return Vec::new(),
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let sep = lexicon.joiner;
    let word = lexicon.decimal_word;

    let mut forms = vec![format!(
        "{}{}{}{}{}{}",
        sign, integer, sep, word, sep, fraction
    )];

    if value >= 0.0 {
        if let Some(speller) = lexicon.number_words {
            let spelled_integer = integer.parse::<u32>().ok().and_then(|n| speller.spell(n));
            let spelled_digits: Option<Vec<String>> = fraction
                .chars()
                .map(|c| c.to_digit(10).and_then(|d| speller.spell(d)))
                .collect();

            if let (Some(int_word), Some(digits)) = (spelled_integer, spelled_digits) {
                forms.push(format!(
                    "{}{}{}{}{}",
                    int_word,
                    sep,
                    word,
                    sep,
                    digits.join(sep)
                ));
            }
        }
    }

    forms
}
