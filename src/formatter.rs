//! Speech-oriented rendering of practice items.
//!
//! The output is handed to an external text-to-speech engine. Pacing follows
//! the locale's TTS hints: pause markers between date parts and between a
//! length and its unit, digit grouping for long numbers, and ordinal days.
//! Any rule that cannot be applied falls back to the item's display text.

use crate::content::{
    format_decimal, group_thousands, ContentItem, LengthItem, NumberItem, TimeItem, TimeValue,
};
use crate::locale::{DateOrder, LocaleConfig, LocaleRegistry};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Numbers with at least this many digits are grouped in threes.
const GROUPING_MIN_DIGITS: usize = 4;

/// Text plus voice settings for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechText {
    pub text: String,
    /// BCP 47 code of the voice to use
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

#[derive(Clone, Copy)]
pub struct Formatter<'a> {
    registry: &'a LocaleRegistry,
}

impl Formatter<'static> {
    pub fn global() -> Self {
        Self::new(LocaleRegistry::get())
    }
}

impl<'a> Formatter<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Render `item` for speech in `locale`. Never fails.
    pub fn format(&self, item: &ContentItem, locale: &str) -> SpeechText {
        let config = match self.registry.get_by_code(locale) {
            Some(config) => config,
            None => {
                warn!("Unknown locale '{}', speaking with reference locale", locale);
                self.registry.reference()
            }
        };

        let text = try_format(item, config).unwrap_or_else(|| item.display_text().to_string());

        SpeechText {
            text,
            lang: config.code.to_string(),
            rate: config.tts.rate,
            pitch: config.tts.pitch,
            volume: config.tts.volume,
        }
    }
}

fn try_format(item: &ContentItem, config: &LocaleConfig) -> Option<String> {
    match item {
        ContentItem::Number(number) => format_number(number, config),
        ContentItem::Time(time) => format_time(time, config),
        ContentItem::Direction(direction) => Some(direction.display_text.clone()),
        ContentItem::Length(length) => format_length(length, config),
    }
}

fn format_number(item: &NumberItem, config: &LocaleConfig) -> Option<String> {
    let digits = item.value.unsigned_abs().to_string().len();
    if config.tts.digit_grouping && digits >= GROUPING_MIN_DIGITS {
        Some(group_thousands(item.value, ' '))
    } else {
        Some(item.display_text.clone())
    }
}

/// Gap placed between spoken date components.
fn date_gap(config: &LocaleConfig) -> &'static str {
    if config.tts.pause_after_numbers {
        return config.tts.pause_marker;
    }
    match config.lexicon.date_counters {
        Some(counters) if !counters.spaced => "",
        _ => " ",
    }
}

fn spoken_day(day: u32, config: &LocaleConfig) -> String {
    if config.tts.use_ordinals {
        if let Some(ordinal) = config.lexicon.ordinal.apply(day) {
            return ordinal;
        }
    }
    match config.lexicon.date_counters {
        Some(counters) => format!("{}{}", day, counters.day),
        None => day.to_string(),
    }
}

fn format_time(item: &TimeItem, config: &LocaleConfig) -> Option<String> {
    match item.value {
        TimeValue::Day(day) if (1..=31).contains(&day) => Some(spoken_day(day, config)),
        TimeValue::FullDate(date) => format_date(date, config),
        _ => Some(item.display_text.clone()),
    }
}

fn format_date(date: NaiveDate, config: &LocaleConfig) -> Option<String> {
    let lexicon = &config.lexicon;
    let gap = date_gap(config);
    let day = spoken_day(date.day(), config);

    let parts = match (config.date.order, lexicon.date_counters) {
        (_, Some(counters)) => [
            format!("{}{}", date.year(), counters.year),
            format!("{}{}", date.month(), counters.month),
            day,
        ],
        (DateOrder::Mdy, None) => [
            lexicon.month_name(date.month())?.to_string(),
            day,
            date.year().to_string(),
        ],
        (DateOrder::Dmy, None) | (DateOrder::Ymd, None) => {
            let month = lexicon.month_name(date.month())?.to_string();
            let year = date.year().to_string();
            if config.date.order == DateOrder::Ymd {
                [year, month, day]
            } else {
                [day, month, year]
            }
        }
    };

    Some(parts.join(gap))
}

fn format_length(item: &LengthItem, config: &LocaleConfig) -> Option<String> {
    if !config.tts.pause_after_numbers {
        return Some(item.display_text.clone());
    }

    let names = config.lexicon.unit_names(item.unit)?;
    let label = if item.value == 1.0 {
        names.singular
    } else {
        names.name
    };
    Some(format!(
        "{}{}{}",
        format_decimal(item.value, config.number.decimal_separator),
        config.tts.pause_marker,
        label
    ))
}
