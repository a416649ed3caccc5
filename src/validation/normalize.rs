//! Answer normalization applied to both sides before any comparison.

use crate::locale::ScriptCleanup;
use unicode_normalization::UnicodeNormalization;

/// Switches taken from the validation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub case_sensitive: bool,
    /// Keep punctuation
    pub strict: bool,
}

/// Non-ASCII punctuation stripped along with ASCII punctuation.
const EXTRA_PUNCTUATION: &[char] = &[
    '¡', '¿', '«', '»', '‹', '›', '“', '”', '„', '‘', '’', '‚', '…', '·', '•', '、', '。', '「',
    '」', '『', '』', '【', '】', '〈', '〉', '《', '》', '،', '؛', '؟', '।', '॥',
];

/// Dashes folded to a space.
const DASHES: &[char] = &['-', '‐', '‑', '‒', '–', '—', '―', '−'];

/// Kept as-is between two digits ("2.5", "1,000", "3/15").
const NUMERIC_SEPARATORS: &[char] = &['.', ',', '/', ':', '\''];

const INVISIBLE: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

const BIDI_MARKS: &[char] = &[
    '\u{200E}', '\u{200F}', '\u{061C}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}',
    '\u{202E}', '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}',
];

const TATWEEL: char = '\u{0640}';

fn is_harakah(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Map a native digit to ASCII for scripts that have their own digits.
fn fold_digit(c: char, script: ScriptCleanup) -> char {
    let (zero, alt_zero) = match script {
        ScriptCleanup::RightToLeft => ('\u{0660}', Some('\u{06F0}')),
        ScriptCleanup::Devanagari => ('\u{0966}', None),
        _ => return c,
    };

    for base in std::iter::once(zero).chain(alt_zero) {
        let offset = (c as u32).wrapping_sub(base as u32);
        if offset < 10 {
            return char::from_digit(offset, 10).unwrap_or(c);
        }
    }
    c
}

fn script_cleanup(text: &str, script: ScriptCleanup) -> String {
    text.chars()
        .filter(|c| !INVISIBLE.contains(c))
        .filter_map(|c| match script {
            ScriptCleanup::RightToLeft
                if BIDI_MARKS.contains(&c) || c == TATWEEL || is_harakah(c) =>
            {
                None
            }
            ScriptCleanup::Cjk if c == '\u{3000}' => Some(' '),
            _ => Some(fold_digit(c, script)),
        })
        .collect()
}

fn strip_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|j| chars.get(j)).copied();
        let next = chars.get(i + 1).copied();
        let digit_before = prev.is_some_and(|p| p.is_ascii_digit());
        let digit_after = next.is_some_and(|n| n.is_ascii_digit());

        if NUMERIC_SEPARATORS.contains(&c) && digit_before && digit_after {
            out.push(c);
        } else if DASHES.contains(&c) {
            // A leading minus sign survives; any other dash splits words.
            let word_start = prev.map_or(true, char::is_whitespace);
            if word_start && digit_after {
                out.push('-');
            } else {
                out.push(' ');
            }
        } else if c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c) {
            continue;
        } else {
            out.push(c);
        }
    }

    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an answer: NFKC, script cleanup, case folding, punctuation
/// stripping and whitespace collapsing.
pub fn normalize(text: &str, script: ScriptCleanup, options: NormalizeOptions) -> String {
    let composed: String = text.nfkc().collect();
    let mut text = script_cleanup(&composed, script);

    if !options.case_sensitive {
        text = text.to_lowercase();
    }
    if !options.strict {
        text = strip_punctuation(&text);
    }

    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose(text: &str) -> String {
        normalize(text, ScriptCleanup::None, NormalizeOptions::default())
    }

    // ==================== Latin ====================

    #[test]
    fn test_trim_case_and_whitespace() {
        assert_eq!(loose("  North   East "), "north east");
        assert_eq!(loose("NORD"), "nord");
    }

    #[test]
    fn test_case_sensitive_keeps_case() {
        let options = NormalizeOptions {
            case_sensitive: true,
            strict: false,
        };
        assert_eq!(normalize("Nord", ScriptCleanup::None, options), "Nord");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(loose("March 15, 1987!"), "march 15 1987");
        assert_eq!(loose("¿derecha?"), "derecha");
        assert_eq!(loose("«gauche»"), "gauche");
    }

    #[test]
    fn test_separators_between_digits_kept() {
        assert_eq!(loose("2.5"), "2.5");
        assert_eq!(loose("1,000"), "1,000");
        assert_eq!(loose("03/15/1987"), "03/15/1987");
        assert_eq!(loose("5."), "5");
    }

    #[test]
    fn test_hyphens_become_spaces() {
        assert_eq!(loose("nord-est"), "nord est");
        assert_eq!(loose("forty-two"), "forty two");
        assert_eq!(loose("1987-03-15"), "1987 03 15");
    }

    #[test]
    fn test_leading_minus_kept() {
        assert_eq!(loose("-5"), "-5");
        assert_eq!(loose("minus -12"), "minus -12");
    }

    #[test]
    fn test_strict_mode_keeps_punctuation() {
        let options = NormalizeOptions {
            case_sensitive: false,
            strict: true,
        };
        assert_eq!(normalize("Nord-Est!", ScriptCleanup::None, options), "nord-est!");
    }

    #[test]
    fn test_nfkc_folds_compatibility_forms() {
        // Full-width digits and letters
        assert_eq!(loose("５ｍ"), "5m");
        // Decomposed é
        assert_eq!(loose("me\u{0301}tres"), "mètres");
    }

    // ==================== Scripts ====================

    #[test]
    fn test_rtl_cleanup() {
        let options = NormalizeOptions::default();
        let text = "\u{200F}شمـال\u{064E}";
        assert_eq!(normalize(text, ScriptCleanup::RightToLeft, options), "شمال");
        assert_eq!(normalize("٥", ScriptCleanup::RightToLeft, options), "5");
        assert_eq!(normalize("۱۲", ScriptCleanup::RightToLeft, options), "12");
    }

    #[test]
    fn test_cjk_cleanup() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize("５\u{3000}米", ScriptCleanup::Cjk, options), "5 米");
        assert_eq!(normalize("北。", ScriptCleanup::Cjk, options), "北");
    }

    #[test]
    fn test_devanagari_digits() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize("१५", ScriptCleanup::Devanagari, options), "15");
        assert_eq!(normalize("उत्तर।", ScriptCleanup::Devanagari, options), "उत्तर");
    }

    #[test]
    fn test_digits_untouched_for_latin() {
        assert_eq!(loose("٥"), "٥");
    }
}
