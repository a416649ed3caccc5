//! Whole-number items.

use crate::content::formats::{group_thousands, word_forms, FormatSet};
use crate::content::item::NumberItem;
use crate::locale::{LocaleConfig, SynonymMap};
use rand::Rng;

pub(crate) fn random_value<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Build a number item: the bare numeral, its thousands-grouped form and,
/// up to 100, the spelled-out word.
pub(crate) fn build(value: i64, locale: &LocaleConfig, synonyms: &SynonymMap) -> NumberItem {
    let mut formats = FormatSet::new(value.to_string());

    if value.unsigned_abs() >= 1000 {
        formats.push(group_thousands(value, locale.number.thousands_separator));
    }
    formats.extend(word_forms(value, &locale.lexicon, synonyms));

    let (display_text, accepted_formats) = formats.into_parts();
    NumberItem {
        value,
        display_text,
        accepted_formats,
    }
}
