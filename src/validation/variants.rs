//! Format-variant tier: answers that are written differently but mean the
//! same number, date or length.
//!
//! All parsers here work on normalized text, so hyphens between date parts
//! have already become spaces and case is folded.

use crate::locale::{LengthUnit, LocaleConfig, NumberFormat};
use regex::Regex;
use std::sync::OnceLock;

// Regex patterns for parsing (cached for performance)
static PLAIN_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
static QUANTITY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Values closer than this are the same number.
const NUMBER_EPSILON: f64 = 1e-9;

/// Locale data and settings the variant checks need.
pub(crate) struct VariantContext<'a> {
    pub locale: &'a LocaleConfig,
    /// Consulted for unit names the locale does not list
    pub fallback: &'a LocaleConfig,
    pub normalize: &'a dyn Fn(&str) -> String,
    /// Relative difference accepted between two lengths
    pub tolerance: f64,
}

/// Parse a numeral written with the locale's separators ("1.234,5" in de-DE)
/// or in plain form ("1234.5").
///
/// The locale reading wins, so "2.500" is 2500 in de-DE. Plain form only
/// applies when the text is not a valid locale numeral ("2.5").
pub fn parse_number(text: &str, format: &NumberFormat) -> Option<f64> {
    if let Some(value) = parse_localized(text, format) {
        return Some(value);
    }
    let re = PLAIN_NUMBER_REGEX
        .get_or_init(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("Invalid plain number regex"));
    if re.is_match(text) {
        return text.parse().ok();
    }
    None
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn parse_localized(text: &str, format: &NumberFormat) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (integer, fraction) = match body.split_once(format.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };
    if let Some(fraction) = fraction {
        if !all_digits(fraction) {
            return None;
        }
    }

    let groups: Vec<&str> = integer.split(format.thousands_separator).collect();
    let (first, rest) = groups.split_first()?;
    let first_ok = all_digits(first) && (rest.is_empty() || first.len() <= 3);
    let rest_ok = rest.iter().all(|group| group.len() == 3 && all_digits(group));
    if !first_ok || !rest_ok {
        return None;
    }

    let mut plain = groups.concat();
    if let Some(fraction) = fraction {
        plain.push('.');
        plain.push_str(fraction);
    }
    let value: f64 = plain.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A numeral, or a number word of the locale's speller.
fn parse_numeric(text: &str, ctx: &VariantContext) -> Option<f64> {
    parse_number(text, &ctx.locale.number).or_else(|| {
        if text.is_empty() || text.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        let speller = ctx.locale.lexicon.number_words?;
        speller.parse(text, ctx.normalize).map(f64::from)
    })
}

/// Split a three-part numeric date ("03/15/1987", "15.3.1987",
/// "1987 03 15") into its components, in written order.
pub fn parse_date(text: &str) -> Option<[u32; 3]> {
    let re = DATE_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,4})[/.\-\s](\d{1,2})[/.\-\s](\d{1,4})$")
            .expect("Invalid date regex")
    });
    let caps = re.captures(text)?;
    Some([
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ])
}

/// Parse `<number><unit>` ("5m", "500 厘米", "2,5 km").
pub(crate) fn parse_length(text: &str, ctx: &VariantContext) -> Option<(f64, LengthUnit)> {
    let re = QUANTITY_REGEX.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:[.,\s]\d+)*)\s*([^\d\s][^\d]*)$")
            .expect("Invalid quantity regex")
    });
    let caps = re.captures(text)?;
    let value = parse_number(&caps[1], &ctx.locale.number)?;
    let token = caps[2].trim();

    let unit = ctx
        .locale
        .lexicon
        .resolve_unit(token, ctx.normalize)
        .or_else(|| ctx.fallback.lexicon.resolve_unit(token, ctx.normalize))?;
    Some((value, unit))
}

/// Compare two lengths in meters. Degenerate scale factors never match.
pub fn lengths_match(a: (f64, LengthUnit), b: (f64, LengthUnit), tolerance: f64) -> bool {
    let (scale_a, scale_b) = (a.1.scale(), b.1.scale());
    if !(scale_a.is_finite() && scale_a > 0.0 && scale_b.is_finite() && scale_b > 0.0) {
        return false;
    }

    let meters_a = a.0 * scale_a;
    let meters_b = b.0 * scale_b;
    let magnitude = meters_a.abs().max(meters_b.abs());
    if magnitude == 0.0 {
        return true;
    }
    if !magnitude.is_finite() {
        return false;
    }
    (meters_a - meters_b).abs() / magnitude <= tolerance
}

/// Whether `input` and `candidate` are the same number, date or length.
///
/// `target` is the expected length when the answer key is a length item;
/// otherwise the candidate string itself is parsed.
pub(crate) fn equivalent(
    input: &str,
    candidate: &str,
    target: Option<(f64, LengthUnit)>,
    ctx: &VariantContext,
) -> bool {
    if let (Some(a), Some(b)) = (parse_numeric(input, ctx), parse_numeric(candidate, ctx)) {
        if (a - b).abs() < NUMBER_EPSILON {
            return true;
        }
    }

    if let (Some(a), Some(b)) = (parse_date(input), parse_date(candidate)) {
        if a == b {
            return true;
        }
    }

    let expected = target.or_else(|| parse_length(candidate, ctx));
    match (parse_length(input, ctx), expected) {
        (Some(a), Some(b)) => lengths_match(a, b, ctx.tolerance),
        _ => false,
    }
}
