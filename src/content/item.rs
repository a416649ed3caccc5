//! Practice items handed to the rendering and audio collaborators.
//!
//! Items are plain serializable records. Every variant carries a canonical
//! value, the text shown to the learner and the full list of answers that
//! count as correct (display text first, no duplicates).

use crate::locale::{Direction, DirectionKind, GridPosition, LengthUnit};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Practice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Number,
    Time,
    Direction,
    Length,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Number => "number",
            Category::Time => "time",
            Category::Direction => "direction",
            Category::Length => "length",
        }
    }
}

/// Calendar component practiced by a time item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeKind {
    Year,
    Month,
    Day,
    Weekday,
    FullDate,
}

impl TimeKind {
    pub const ALL: [TimeKind; 5] = [
        TimeKind::Year,
        TimeKind::Month,
        TimeKind::Day,
        TimeKind::Weekday,
        TimeKind::FullDate,
    ];
}

/// Canonical value of a time item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subtype", content = "value", rename_all = "camelCase")]
pub enum TimeValue {
    Year(i32),
    /// 1 = January
    Month(u32),
    /// Day of month
    Day(u32),
    Weekday(Weekday),
    FullDate(NaiveDate),
}

impl TimeValue {
    pub fn kind(&self) -> TimeKind {
        match self {
            TimeValue::Year(_) => TimeKind::Year,
            TimeValue::Month(_) => TimeKind::Month,
            TimeValue::Day(_) => TimeKind::Day,
            TimeValue::Weekday(_) => TimeKind::Weekday,
            TimeValue::FullDate(_) => TimeKind::FullDate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberItem {
    pub value: i64,
    pub display_text: String,
    pub accepted_formats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeItem {
    pub value: TimeValue,
    pub display_text: String,
    pub accepted_formats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionItem {
    pub direction: Direction,
    pub kind: DirectionKind,
    /// The direction word in the item's locale
    pub value: String,
    pub display_text: String,
    pub accepted_formats: Vec<String>,
    pub grid: GridPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthItem {
    pub value: f64,
    pub unit: LengthUnit,
    pub display_text: String,
    pub accepted_formats: Vec<String>,
}

/// A generated practice item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum ContentItem {
    Number(NumberItem),
    Time(TimeItem),
    Direction(DirectionItem),
    Length(LengthItem),
}

impl ContentItem {
    pub fn category(&self) -> Category {
        match self {
            ContentItem::Number(_) => Category::Number,
            ContentItem::Time(_) => Category::Time,
            ContentItem::Direction(_) => Category::Direction,
            ContentItem::Length(_) => Category::Length,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            ContentItem::Number(item) => &item.display_text,
            ContentItem::Time(item) => &item.display_text,
            ContentItem::Direction(item) => &item.display_text,
            ContentItem::Length(item) => &item.display_text,
        }
    }

    pub fn accepted_formats(&self) -> &[String] {
        match self {
            ContentItem::Number(item) => &item.accepted_formats,
            ContentItem::Time(item) => &item.accepted_formats,
            ContentItem::Direction(item) => &item.accepted_formats,
            ContentItem::Length(item) => &item.accepted_formats,
        }
    }

    /// Canonical value rendered as text, independent of the locale where
    /// possible (ISO dates, English weekday abbreviations, unit symbols).
    pub fn value_text(&self) -> String {
        match self {
            ContentItem::Number(item) => item.value.to_string(),
            ContentItem::Time(item) => match item.value {
                TimeValue::Year(year) => year.to_string(),
                TimeValue::Month(month) | TimeValue::Day(month) => month.to_string(),
                TimeValue::Weekday(weekday) => weekday.to_string(),
                TimeValue::FullDate(date) => date.format("%Y-%m-%d").to_string(),
            },
            ContentItem::Direction(item) => item.value.clone(),
            ContentItem::Length(item) => format!("{}{}", item.value, item.unit.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_direction() -> ContentItem {
        ContentItem::Direction(DirectionItem {
            direction: Direction::North,
            kind: DirectionKind::Cardinal,
            value: "nord".to_string(),
            display_text: "nord".to_string(),
            accepted_formats: vec!["nord".to_string()],
            grid: Direction::North.grid(),
        })
    }

    #[test]
    fn test_accessors() {
        let item = sample_direction();
        assert_eq!(item.category(), Category::Direction);
        assert_eq!(item.display_text(), "nord");
        assert_eq!(item.accepted_formats(), &["nord".to_string()]);
        assert_eq!(item.value_text(), "nord");
    }

    #[test]
    fn test_time_value_kind() {
        assert_eq!(TimeValue::Year(1999).kind(), TimeKind::Year);
        assert_eq!(TimeValue::Weekday(Weekday::Fri).kind(), TimeKind::Weekday);
        let date = NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
        assert_eq!(TimeValue::FullDate(date).kind(), TimeKind::FullDate);
    }

    #[test]
    fn test_value_text_for_dates_and_lengths() {
        let date = NaiveDate::from_ymd_opt(1987, 3, 5).unwrap();
        let item = ContentItem::Time(TimeItem {
            value: TimeValue::FullDate(date),
            display_text: "03/05/1987".to_string(),
            accepted_formats: vec!["03/05/1987".to_string()],
        });
        assert_eq!(item.value_text(), "1987-03-05");

        let length = ContentItem::Length(LengthItem {
            value: 2.5,
            unit: LengthUnit::Kilometer,
            display_text: "2.5 kilometers".to_string(),
            accepted_formats: vec!["2.5 kilometers".to_string()],
        });
        assert_eq!(length.value_text(), "2.5km");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample_direction()).unwrap();
        assert_eq!(json["category"], "direction");
        assert_eq!(json["kind"], "cardinal");
        assert_eq!(json["displayText"], "nord");
        assert_eq!(json["acceptedFormats"][0], "nord");
        assert_eq!(json["grid"]["row"], 0);
        assert_eq!(json["grid"]["col"], 1);
    }

    #[test]
    fn test_time_value_serialized_with_subtype() {
        let item = ContentItem::Time(TimeItem {
            value: TimeValue::Year(2024),
            display_text: "2024".to_string(),
            accepted_formats: vec!["2024".to_string()],
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "time");
        assert_eq!(json["value"]["subtype"], "year");
        assert_eq!(json["value"]["value"], 2024);

        let restored: ContentItem = serde_json::from_value(json).unwrap();
        assert_eq!(restored, item);
    }
}
