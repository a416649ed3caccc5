//! Length items and the per-unit range adjustment.
//!
//! A requested range such as 1..=20 reads naturally in meters but not in
//! millimeters or kilometers. Before a value is drawn the range is rescaled by
//! the unit's size relative to the meter:
//!
//! - scale below [`SMALL_UNIT_SCALE`]: range multiplied by [`SMALL_UNIT_RANGE_FACTOR`]
//! - scale at or above [`LARGE_UNIT_SCALE`]: range divided by
//!   [`LARGE_UNIT_RANGE_DIVISOR`], lower bound clamped to 1, and values drawn
//!   in half steps
//! - anything else: range used as given

use crate::content::formats::{
    decimal_word_forms, is_whole, numeral_forms, word_forms, FormatSet,
};
use crate::content::item::LengthItem;
use crate::locale::{LengthUnit, LocaleConfig, SynonymMap, MAX_SPELLED};
use rand::Rng;

/// Units smaller than this many meters get a larger range.
pub const SMALL_UNIT_SCALE: f64 = 0.01;
pub const SMALL_UNIT_RANGE_FACTOR: i64 = 10;

/// Units at least this many meters long get a smaller range.
pub const LARGE_UNIT_SCALE: f64 = 1000.0;
pub const LARGE_UNIT_RANGE_DIVISOR: i64 = 10;

/// Rescale `[min, max]` for `unit`. The result always keeps `max > min`.
pub fn adjust_range(min: i64, max: i64, unit: LengthUnit) -> (i64, i64) {
    let scale = unit.scale();

    if scale < SMALL_UNIT_SCALE {
        let min = min.saturating_mul(SMALL_UNIT_RANGE_FACTOR);
        let max = max.saturating_mul(SMALL_UNIT_RANGE_FACTOR);
        return (min, max.max(min.saturating_add(1)));
    }

    if scale >= LARGE_UNIT_SCALE {
        let min = (min / LARGE_UNIT_RANGE_DIVISOR).max(1);
        let max = (max / LARGE_UNIT_RANGE_DIVISOR).max(min.saturating_add(1));
        return (min, max);
    }

    (min, max)
}

pub(crate) fn random_value<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    unit: LengthUnit,
) -> f64 {
    let (min, max) = adjust_range(min, max, unit);

    if unit.scale() >= LARGE_UNIT_SCALE {
        let halves = rng.gen_range(min.saturating_mul(2)..=max.saturating_mul(2));
        halves as f64 / 2.0
    } else {
        rng.gen_range(min..=max) as f64
    }
}

pub(crate) fn build(
    value: f64,
    unit: LengthUnit,
    locale: &LocaleConfig,
    fallback: &LocaleConfig,
    synonyms: &SynonymMap,
) -> LengthItem {
    let lexicon = &locale.lexicon;
    let joiner = lexicon.joiner;
    let numerals = numeral_forms(value, &locale.number);

    let names = lexicon
        .unit_names(unit)
        .or_else(|| fallback.lexicon.unit_names(unit));

    let names = match names {
        Some(names) => names,
        None => {
            // No table names this unit; fall back to the symbol alone.
            let mut formats = FormatSet::new(format!("{} {}", numerals[0], unit.symbol()));
            for numeral in &numerals {
                formats.push(format!("{}{}", numeral, unit.symbol()));
            }
            let (display_text, accepted_formats) = formats.into_parts();
            return LengthItem {
                value,
                unit,
                display_text,
                accepted_formats,
            };
        }
    };

    let label = if value == 1.0 { names.singular } else { names.name };
    let mut formats = FormatSet::new(format!("{}{}{}", numerals[0], joiner, label));

    for numeral in &numerals {
        for name in names.full_names() {
            formats.push(format!("{}{}{}", numeral, joiner, name));
            if joiner.is_empty() {
                formats.push(format!("{} {}", numeral, name));
            }
        }
        for short in names.short_names() {
            formats.push(format!("{} {}", numeral, short));
            formats.push(format!("{}{}", numeral, short));
        }
    }

    let words = if is_whole(value) && (0.0..=MAX_SPELLED as f64).contains(&value) {
        word_forms(value as i64, lexicon, synonyms)
    } else if !is_whole(value) {
        decimal_word_forms(value, lexicon)
    } else {
        Vec::new()
    };
    for word in &words {
        for name in names.full_names() {
            formats.push(format!("{}{}{}", word, joiner, name));
        }
    }

    let (display_text, accepted_formats) = formats.into_parts();
    LengthItem {
        value,
        unit,
        display_text,
        accepted_formats,
    }
}
