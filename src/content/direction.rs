//! Direction items.
//!
//! A direction's word is looked up positionally in the locale's list for its
//! kind, and its grid cell comes from the shared reference layout, so the
//! same button position holds the same direction in every language.

use crate::content::formats::FormatSet;
use crate::content::item::DirectionItem;
use crate::locale::{Direction, DirectionKind, LocaleConfig};
use rand::seq::SliceRandom;
use rand::Rng;

pub(crate) fn random_direction<R: Rng + ?Sized>(rng: &mut R, kind: DirectionKind) -> Direction {
    kind.directions()
        .choose(rng)
        .copied()
        .unwrap_or(Direction::North)
}

/// Build a direction item. `fallback` supplies the word when `locale` has
/// none, which only happens for tables that skipped the registry check.
pub(crate) fn build(
    direction: Direction,
    locale: &LocaleConfig,
    fallback: &LocaleConfig,
) -> DirectionItem {
    let word = locale
        .lexicon
        .direction_word(direction)
        .or_else(|| fallback.lexicon.direction_word(direction))
        .unwrap_or_default();

    let mut formats = FormatSet::new(word);
    if word.contains('-') {
        formats.push(word.replace('-', " "));
        formats.push(word.replace('-', ""));
    }

    let (display_text, accepted_formats) = formats.into_parts();
    DirectionItem {
        direction,
        kind: direction.kind(),
        value: word.to_string(),
        display_text,
        accepted_formats,
        grid: direction.grid(),
    }
}
