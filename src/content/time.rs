//! Calendar items: years, months, days of the month, weekdays and full dates.

use crate::content::formats::{word_forms, FormatSet};
use crate::content::item::{TimeItem, TimeKind, TimeValue};
use crate::locale::{DateOrder, LocaleConfig, SynonymMap};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const DATE_SEPARATORS: [char; 3] = ['/', '-', '.'];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub(crate) fn random_value<R: Rng + ?Sized>(rng: &mut R, kind: TimeKind) -> TimeValue {
    match kind {
        TimeKind::Year => TimeValue::Year(rng.gen_range(MIN_YEAR..=MAX_YEAR)),
        TimeKind::Month => TimeValue::Month(rng.gen_range(1..=12)),
        TimeKind::Day => TimeValue::Day(rng.gen_range(1..=31)),
        TimeKind::Weekday => TimeValue::Weekday(WEEKDAYS[rng.gen_range(0..WEEKDAYS.len())]),
        TimeKind::FullDate => {
            let year = rng.gen_range(MIN_YEAR..=MAX_YEAR);
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=days_in_month(year, month));
            // Day is clamped to the month length, so the date always exists.
            TimeValue::FullDate(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
        }
    }
}

pub(crate) fn build(value: TimeValue, locale: &LocaleConfig, synonyms: &SynonymMap) -> TimeItem {
    let formats = match value {
        TimeValue::Year(year) => year_formats(year, locale),
        TimeValue::Month(month) => month_formats(month, locale, synonyms),
        TimeValue::Day(day) => day_formats(day, locale, synonyms),
        TimeValue::Weekday(weekday) => weekday_formats(weekday, locale),
        TimeValue::FullDate(date) => date_formats(date, locale),
    };

    let (display_text, accepted_formats) = formats.into_parts();
    TimeItem {
        value,
        display_text,
        accepted_formats,
    }
}

fn year_formats(year: i32, locale: &LocaleConfig) -> FormatSet {
    let mut formats = FormatSet::new(year.to_string());
    if let Some(counters) = locale.lexicon.date_counters {
        formats.push(format!("{}{}", year, counters.year));
    }
    formats
}

fn month_formats(month: u32, locale: &LocaleConfig, synonyms: &SynonymMap) -> FormatSet {
    let lexicon = &locale.lexicon;
    let mut formats = match lexicon.month_name(month) {
        Some(name) => FormatSet::new(name),
        None => FormatSet::new(month.to_string()),
    };

    formats.extend(lexicon.month_extra_forms(month).iter().copied());
    formats.push(month.to_string());
    formats.push(format!("{:02}", month));

    if let Some(counters) = lexicon.date_counters {
        formats.push(format!("{}{}", month, counters.month));
        for word in word_forms(month as i64, lexicon, synonyms) {
            formats.push(format!("{}{}", word, counters.month));
        }
    }
    formats
}

fn day_formats(day: u32, locale: &LocaleConfig, synonyms: &SynonymMap) -> FormatSet {
    let lexicon = &locale.lexicon;
    let words = word_forms(day as i64, lexicon, synonyms);

    let mut formats = match lexicon.date_counters {
        Some(counters) => FormatSet::new(format!("{}{}", day, counters.day)),
        None => FormatSet::new(day.to_string()),
    };
    formats.push(day.to_string());
    formats.push(format!("{:02}", day));
    if let Some(ordinal) = lexicon.ordinal.apply(day) {
        formats.push(ordinal);
    }

    if let Some(counters) = lexicon.date_counters {
        for counter in
            std::iter::once(counters.day).chain(counters.day_alternates.iter().copied())
        {
            formats.push(format!("{}{}", day, counter));
            for word in &words {
                formats.push(format!("{}{}", word, counter));
            }
        }
    }
    formats.extend(words);
    formats
}

fn weekday_formats(weekday: Weekday, locale: &LocaleConfig) -> FormatSet {
    let index = weekday.num_days_from_monday() as usize;
    let lexicon = &locale.lexicon;
    let mut formats = FormatSet::new(lexicon.weekdays[index]);
    formats.extend(lexicon.weekday_extra_forms(index).iter().copied());
    formats
}

/// Numeric components in the locale's reading order.
fn ordered<T>(order: DateOrder, year: T, month: T, day: T) -> [T; 3] {
    match order {
        DateOrder::Dmy => [day, month, year],
        DateOrder::Mdy => [month, day, year],
        DateOrder::Ymd => [year, month, day],
    }
}

fn date_formats(date: NaiveDate, locale: &LocaleConfig) -> FormatSet {
    let (year, month, day) = (date.year(), date.month(), date.day());
    let order = locale.date.order;
    let padded = ordered(
        order,
        format!("{:04}", year),
        format!("{:02}", month),
        format!("{:02}", day),
    );
    let bare = ordered(order, year.to_string(), month.to_string(), day.to_string());

    let mut formats = FormatSet::new(padded.join(&locale.date.separator.to_string()));
    formats.push(bare.join(&locale.date.separator.to_string()));
    for separator in DATE_SEPARATORS {
        let separator = separator.to_string();
        formats.push(padded.join(&separator));
        formats.push(bare.join(&separator));
    }
    formats.push(date.format("%Y-%m-%d").to_string());

    let lexicon = &locale.lexicon;
    if let Some(counters) = lexicon.date_counters {
        let gap = if counters.spaced { " " } else { "" };
        formats.push(format!(
            "{}{}{}{}{}{}{}{}",
            year, counters.year, gap, month, counters.month, gap, day, counters.day
        ));
        for alternate in counters.day_alternates {
            formats.push(format!(
                "{}{}{}{}{}{}{}{}",
                year, counters.year, gap, month, counters.month, gap, day, alternate
            ));
        }
    }

    if let Some(month_name) = lexicon.month_name(month) {
        let mut days = vec![day.to_string()];
        days.extend(lexicon.ordinal.apply(day));
        for day_text in days {
            match order {
                DateOrder::Mdy => formats.push(format!("{} {} {}", month_name, day_text, year)),
                DateOrder::Dmy => formats.push(format!("{} {} {}", day_text, month_name, year)),
                // Year-first locales spell dates with counters instead.
                DateOrder::Ymd => {}
            }
        }
    }

    formats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{LocaleRegistry, SynonymTable};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn item(value: TimeValue, code: &str) -> TimeItem {
        let registry = LocaleRegistry::get();
        build(
            value,
            registry.config(code),
            SynonymTable::get().for_locale(code),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== Calendar Helpers ====================

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_random_values_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            match random_value(&mut rng, TimeKind::FullDate) {
                TimeValue::FullDate(d) => {
                    assert!((MIN_YEAR..=MAX_YEAR).contains(&d.year()));
                    assert_ne!(d, NaiveDate::default());
                }
                other => panic!("unexpected value {:?}", other),
            }
            match random_value(&mut rng, TimeKind::Day) {
                TimeValue::Day(d) => assert!((1..=31).contains(&d)),
                other => panic!("unexpected value {:?}", other),
            }
        }
    }

    // ==================== Format Tests ====================

    #[test]
    fn test_year_formats() {
        let en = item(TimeValue::Year(1987), "en-US");
        assert_eq!(en.display_text, "1987");
        assert_eq!(en.accepted_formats, vec!["1987"]);

        let zh = item(TimeValue::Year(1987), "zh-CN");
        assert_eq!(zh.accepted_formats, vec!["1987", "1987年"]);
    }

    #[test]
    fn test_month_formats() {
        let en = item(TimeValue::Month(3), "en-US");
        assert_eq!(en.display_text, "March");
        assert_eq!(en.accepted_formats, vec!["March", "mar", "3", "03"]);

        let zh = item(TimeValue::Month(2), "zh-CN");
        assert_eq!(zh.display_text, "二月");
        assert!(zh.accepted_formats.contains(&"2月".to_string()));
        assert!(zh.accepted_formats.contains(&"两月".to_string()));
    }

    #[test]
    fn test_day_formats() {
        let en = item(TimeValue::Day(3), "en-US");
        assert_eq!(en.display_text, "3");
        assert!(en.accepted_formats.contains(&"03".to_string()));
        assert!(en.accepted_formats.contains(&"3rd".to_string()));
        assert!(en.accepted_formats.contains(&"three".to_string()));

        let zh = item(TimeValue::Day(15), "zh-CN");
        assert_eq!(zh.display_text, "15日");
        assert!(zh.accepted_formats.contains(&"15号".to_string()));
        assert!(zh.accepted_formats.contains(&"十五日".to_string()));
        assert!(zh.accepted_formats.contains(&"15".to_string()));
    }

    #[test]
    fn test_weekday_formats() {
        let en = item(TimeValue::Weekday(Weekday::Thu), "en-US");
        assert_eq!(en.display_text, "Thursday");
        assert!(en.accepted_formats.contains(&"thurs".to_string()));

        let ja = item(TimeValue::Weekday(Weekday::Sun), "ja-JP");
        assert_eq!(ja.display_text, "日曜日");
    }

    #[test]
    fn test_full_date_follows_locale_order() {
        let d = date(1987, 3, 5);
        assert_eq!(item(TimeValue::FullDate(d), "en-US").display_text, "03/05/1987");
        assert_eq!(item(TimeValue::FullDate(d), "en-GB").display_text, "05/03/1987");
        assert_eq!(item(TimeValue::FullDate(d), "de-DE").display_text, "05.03.1987");
        assert_eq!(item(TimeValue::FullDate(d), "zh-CN").display_text, "1987-03-05");
    }

    #[test]
    fn test_full_date_variants() {
        let d = date(1987, 3, 15);
        let en = item(TimeValue::FullDate(d), "en-US");
        for expected in [
            "3/15/1987",
            "03-15-1987",
            "1987-03-15",
            "March 15 1987",
            "March 15th 1987",
        ] {
            assert!(
                en.accepted_formats.contains(&expected.to_string()),
                "missing {}",
                expected
            );
        }

        let zh = item(TimeValue::FullDate(d), "zh-CN");
        assert!(zh.accepted_formats.contains(&"1987年3月15日".to_string()));
        assert!(zh.accepted_formats.contains(&"1987年3月15号".to_string()));

        let ko = item(TimeValue::FullDate(d), "ko-KR");
        assert!(ko.accepted_formats.contains(&"1987년 3월 15일".to_string()));

        let de = item(TimeValue::FullDate(d), "de-DE");
        assert!(de.accepted_formats.contains(&"15. März 1987".to_string()));
    }
}
