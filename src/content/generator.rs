//! Practice item generation.
//!
//! [`Generator`] is a cheap view over the shared locale and synonym tables.
//! It validates a [`GenerateRequest`], then draws each item independently:
//! one subtype picked uniformly from the requested set, then a value.

use crate::content::item::{
    ContentItem, DirectionItem, LengthItem, NumberItem, TimeItem, TimeKind, TimeValue,
};
use crate::content::{direction, length, number, time};
use crate::error::{DrillError, Result};
use crate::locale::{
    Direction, DirectionKind, LengthUnit, LocaleConfig, LocaleRegistry, SynonymTable,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Inclusive numeric range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(DrillError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// What to generate, per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum GenerateRequest {
    Number {
        range: ValueRange,
    },
    Time {
        subtypes: Vec<TimeKind>,
    },
    Direction {
        subtypes: Vec<DirectionKind>,
    },
    /// An empty `units` list means the locale's preferred units.
    Length {
        range: ValueRange,
        #[serde(default)]
        units: Vec<LengthUnit>,
    },
}

impl GenerateRequest {
    fn validate(&self) -> Result<()> {
        match self {
            GenerateRequest::Number { range } | GenerateRequest::Length { range, .. } => {
                range.validate()
            }
            GenerateRequest::Time { subtypes } if subtypes.is_empty() => {
                Err(DrillError::EmptySubtypes { category: "time" })
            }
            GenerateRequest::Direction { subtypes } if subtypes.is_empty() => {
                Err(DrillError::EmptySubtypes {
                    category: "direction",
                })
            }
            _ => Ok(()),
        }
    }
}

/// Order-preserving dedup so repeated subtypes don't skew the uniform pick.
fn distinct<T: Copy + PartialEq>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(value) {
            out.push(*value);
        }
    }
    out
}

#[derive(Clone, Copy)]
pub struct Generator<'a> {
    registry: &'a LocaleRegistry,
    synonyms: &'a SynonymTable,
}

impl Generator<'static> {
    /// Generator over the shared built-in tables.
    pub fn global() -> Self {
        Self::new(LocaleRegistry::get(), SynonymTable::get())
    }
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a LocaleRegistry, synonyms: &'a SynonymTable) -> Self {
        Self { registry, synonyms }
    }

    fn locale(&self, code: &str) -> &'a LocaleConfig {
        match self.registry.get_by_code(code) {
            Some(config) => config,
            None => {
                let reference = self.registry.reference();
                warn!(
                    "Unknown locale '{}', generating with '{}'",
                    code, reference.code
                );
                reference
            }
        }
    }

    /// Generate `quantity` items for `locale`.
    ///
    /// Returns an error for an empty subtype set or a range with
    /// `min >= max`; a quantity of zero yields an empty list.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerateRequest,
        quantity: usize,
        locale: &str,
        rng: &mut R,
    ) -> Result<Vec<ContentItem>> {
        request.validate()?;
        if quantity == 0 {
            return Ok(Vec::new());
        }

        let config = self.locale(locale);
        debug!(
            "Generating {} item(s) for {:?} in {}",
            quantity, request, config.code
        );

        let items = match request {
            GenerateRequest::Number { range } => (0..quantity)
                .map(|_| {
                    let value = number::random_value(rng, range.min, range.max);
                    ContentItem::Number(self.number_in(value, config))
                })
                .collect(),
            GenerateRequest::Time { subtypes } => {
                let subtypes = distinct(subtypes);
                (0..quantity)
                    .map(|_| {
                        let kind = pick(&subtypes, rng, TimeKind::Year);
                        let value = time::random_value(rng, kind);
                        ContentItem::Time(self.time_in(value, config))
                    })
                    .collect()
            }
            GenerateRequest::Direction { subtypes } => {
                let subtypes = distinct(subtypes);
                (0..quantity)
                    .map(|_| {
                        let kind = pick(&subtypes, rng, DirectionKind::Cardinal);
                        let direction = direction::random_direction(rng, kind);
                        ContentItem::Direction(self.direction_in(direction, config))
                    })
                    .collect()
            }
            GenerateRequest::Length { range, units } => {
                let units = if units.is_empty() {
                    config.units.preferred.to_vec()
                } else {
                    distinct(units)
                };
                (0..quantity)
                    .map(|_| {
                        let unit = pick(&units, rng, LengthUnit::Meter);
                        let value = length::random_value(rng, range.min, range.max, unit);
                        ContentItem::Length(self.length_in(value, unit, config))
                    })
                    .collect()
            }
        };

        Ok(items)
    }

    // ==================== Builders ====================

    /// Number item for an explicit value.
    pub fn number_item(&self, value: i64, locale: &str) -> ContentItem {
        ContentItem::Number(self.number_in(value, self.locale(locale)))
    }

    pub fn time_item(&self, value: TimeValue, locale: &str) -> ContentItem {
        ContentItem::Time(self.time_in(value, self.locale(locale)))
    }

    pub fn direction_item(&self, direction: Direction, locale: &str) -> ContentItem {
        ContentItem::Direction(self.direction_in(direction, self.locale(locale)))
    }

    pub fn length_item(&self, value: f64, unit: LengthUnit, locale: &str) -> ContentItem {
        ContentItem::Length(self.length_in(value, unit, self.locale(locale)))
    }

    fn number_in(&self, value: i64, config: &LocaleConfig) -> NumberItem {
        number::build(value, config, self.synonyms.for_locale(config.code))
    }

    fn time_in(&self, value: TimeValue, config: &LocaleConfig) -> TimeItem {
        time::build(value, config, self.synonyms.for_locale(config.code))
    }

    fn direction_in(&self, direction: Direction, config: &LocaleConfig) -> DirectionItem {
        direction::build(direction, config, self.registry.reference())
    }

    fn length_in(&self, value: f64, unit: LengthUnit, config: &LocaleConfig) -> LengthItem {
        length::build(
            value,
            unit,
            config,
            self.registry.reference(),
            self.synonyms.for_locale(config.code),
        )
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(options: &[T], rng: &mut R, default: T) -> T {
    options.choose(rng).copied().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    // ==================== Request Validation ====================

    #[test]
    fn test_value_range_rejects_inverted() {
        assert_eq!(
            ValueRange::new(5, 5),
            Err(DrillError::InvalidRange { min: 5, max: 5 })
        );
        assert!(ValueRange::new(10, 1).is_err());
        assert!(ValueRange::new(1, 10).is_ok());
    }

    #[test]
    fn test_malformed_range_reported_not_corrected() {
        let request = GenerateRequest::Number {
            range: ValueRange { min: 9, max: 2 },
        };
        let result = Generator::global().generate(&request, 3, "en-US", &mut rng());
        assert_eq!(result, Err(DrillError::InvalidRange { min: 9, max: 2 }));
    }

    #[test]
    fn test_empty_subtypes_rejected() {
        let generator = Generator::global();
        let time = GenerateRequest::Time { subtypes: vec![] };
        assert_eq!(
            generator.generate(&time, 1, "en-US", &mut rng()),
            Err(DrillError::EmptySubtypes { category: "time" })
        );

        let direction = GenerateRequest::Direction { subtypes: vec![] };
        assert!(generator.generate(&direction, 1, "en-US", &mut rng()).is_err());
    }

    #[test]
    fn test_empty_subtypes_rejected_even_for_zero_quantity() {
        let request = GenerateRequest::Direction { subtypes: vec![] };
        assert!(Generator::global()
            .generate(&request, 0, "en-US", &mut rng())
            .is_err());
    }

    #[test]
    fn test_zero_quantity_is_empty() {
        let request = GenerateRequest::Number {
            range: ValueRange { min: 1, max: 10 },
        };
        let items = Generator::global()
            .generate(&request, 0, "en-US", &mut rng())
            .unwrap();
        assert!(items.is_empty());
    }

    // ==================== Generation ====================

    #[test]
    fn test_numbers_in_range() {
        let request = GenerateRequest::Number {
            range: ValueRange { min: 1, max: 100 },
        };
        let items = Generator::global()
            .generate(&request, 50, "es-ES", &mut rng())
            .unwrap();
        assert_eq!(items.len(), 50);
        for item in items {
            match item {
                ContentItem::Number(n) => assert!((1..=100).contains(&n.value)),
                other => panic!("unexpected item {:?}", other),
            }
        }
    }

    #[test]
    fn test_direction_subtype_purity() {
        let request = GenerateRequest::Direction {
            subtypes: vec![DirectionKind::Cardinal],
        };
        let items = Generator::global()
            .generate(&request, 8, "fr-FR", &mut rng())
            .unwrap();
        assert_eq!(items.len(), 8);
        for item in items {
            match item {
                ContentItem::Direction(d) => assert_eq!(d.kind, DirectionKind::Cardinal),
                other => panic!("unexpected item {:?}", other),
            }
        }
    }

    #[test]
    fn test_mixed_subtypes_all_drawn() {
        let request = GenerateRequest::Time {
            subtypes: TimeKind::ALL.to_vec(),
        };
        let items = Generator::global()
            .generate(&request, 200, "de-DE", &mut rng())
            .unwrap();
        for kind in TimeKind::ALL {
            assert!(items.iter().any(|item| match item {
                ContentItem::Time(t) => t.value.kind() == kind,
                _ => false,
            }));
        }
    }

    #[test]
    fn test_length_defaults_to_preferred_units() {
        let request = GenerateRequest::Length {
            range: ValueRange { min: 1, max: 20 },
            units: vec![],
        };
        let items = Generator::global()
            .generate(&request, 40, "en-US", &mut rng())
            .unwrap();
        let preferred = LocaleRegistry::get().config("en-US").units.preferred;
        for item in items {
            match item {
                ContentItem::Length(l) => assert!(preferred.contains(&l.unit)),
                other => panic!("unexpected item {:?}", other),
            }
        }
    }

    #[test]
    fn test_length_uses_requested_units() {
        let request = GenerateRequest::Length {
            range: ValueRange { min: 1, max: 20 },
            units: vec![LengthUnit::Meter, LengthUnit::Meter],
        };
        let items = Generator::global()
            .generate(&request, 10, "zh-CN", &mut rng())
            .unwrap();
        assert!(items.iter().all(|item| match item {
            ContentItem::Length(l) => l.unit == LengthUnit::Meter,
            _ => false,
        }));
    }

    #[test]
    fn test_unknown_locale_uses_reference_rules() {
        let request = GenerateRequest::Direction {
            subtypes: vec![DirectionKind::Relative],
        };
        let items = Generator::global()
            .generate(&request, 5, "xx-XX", &mut rng())
            .unwrap();
        let english = ["front", "back", "left", "right"];
        for item in items {
            assert!(english.contains(&item.display_text()));
        }
    }

    #[test]
    fn test_same_seed_same_items() {
        let request = GenerateRequest::Length {
            range: ValueRange { min: 1, max: 50 },
            units: vec![],
        };
        let generator = Generator::global();
        let a = generator.generate(&request, 10, "ja-JP", &mut rng()).unwrap();
        let b = generator.generate(&request, 10, "ja-JP", &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    // ==================== Builders ====================

    #[test]
    fn test_builders_produce_matching_categories() {
        let generator = Generator::global();
        assert_eq!(generator.number_item(7, "en-US").category(), Category::Number);
        assert_eq!(
            generator.time_item(TimeValue::Month(1), "en-US").category(),
            Category::Time
        );
        assert_eq!(
            generator.direction_item(Direction::Up, "en-US").category(),
            Category::Direction
        );
        assert_eq!(
            generator
                .length_item(5.0, LengthUnit::Meter, "zh-CN")
                .display_text(),
            "5米"
        );
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let json = r#"{"category":"length","range":{"min":1,"max":10}}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            GenerateRequest::Length {
                range: ValueRange { min: 1, max: 10 },
                units: vec![],
            }
        );
    }
}
