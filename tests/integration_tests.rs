//! Integration tests for dictation-drill
//!
//! These tests drive generation, formatting and validation together through
//! the public API, across every supported locale.

use chrono::Datelike;
use dictation_drill::content::{
    ContentItem, GenerateRequest, Generator, TimeKind, TimeValue, ValueRange, MAX_YEAR, MIN_YEAR,
};
use dictation_drill::formatter::Formatter;
use dictation_drill::locale::{Direction, DirectionKind, LengthUnit, LocaleRegistry};
use dictation_drill::validation::{MatchType, ValidationOptions, Validator};
use dictation_drill::DrillError;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ==================== Test Helpers ====================

fn all_requests() -> Vec<GenerateRequest> {
    vec![
        GenerateRequest::Number {
            range: ValueRange { min: 0, max: 5000 },
        },
        GenerateRequest::Time {
            subtypes: TimeKind::ALL.to_vec(),
        },
        GenerateRequest::Direction {
            subtypes: DirectionKind::ALL.to_vec(),
        },
        GenerateRequest::Length {
            range: ValueRange { min: 1, max: 200 },
            units: LengthUnit::ALL.to_vec(),
        },
    ]
}

fn generate_all(locale: &str, seed: u64, quantity: usize) -> Vec<ContentItem> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let generator = Generator::global();
    all_requests()
        .iter()
        .flat_map(|request| {
            generator
                .generate(request, quantity, locale, &mut rng)
                .expect("valid request")
        })
        .collect()
}

fn codes() -> Vec<&'static str> {
    LocaleRegistry::get().supported_codes()
}

// ==================== Item Invariants ====================

#[test]
fn test_display_text_always_accepted() {
    for code in codes() {
        for item in generate_all(code, 1, 25) {
            let formats = item.accepted_formats();
            assert!(!formats.is_empty(), "{}: no formats for {:?}", code, item);
            assert_eq!(formats[0], item.display_text(), "{}: display not first", code);
        }
    }
}

#[test]
fn test_accepted_formats_deduplicated() {
    for code in codes() {
        for item in generate_all(code, 2, 25) {
            let formats = item.accepted_formats();
            let mut unique = formats.to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), formats.len(), "{}: duplicates in {:?}", code, formats);
        }
    }
}

// ==================== Round Trips ====================

#[test]
fn test_canonical_round_trip_every_locale() {
    let validator = Validator::global();
    for code in codes() {
        for item in generate_all(code, 3, 20) {
            let result =
                validator.validate(item.display_text(), &item, code, &ValidationOptions::default());
            assert!(result.is_valid, "{}: {:?} rejected", code, item.display_text());
            assert_eq!(result.confidence, 1.0);
            assert_eq!(result.match_type, Some(MatchType::Exact));
        }
    }
}

#[test]
fn test_every_accepted_format_validates() {
    let validator = Validator::global();
    for code in codes() {
        for item in generate_all(code, 4, 10) {
            for format in item.accepted_formats() {
                let result = validator.validate(format, &item, code, &ValidationOptions::default());
                assert!(result.is_valid, "{}: '{}' rejected for {:?}", code, format, item);
            }
        }
    }
}

#[test]
fn test_uppercase_display_accepted() {
    let validator = Validator::global();
    for code in codes() {
        for item in generate_all(code, 5, 10) {
            let upper = item.display_text().to_uppercase();
            let result = validator.validate(&upper, &item, code, &ValidationOptions::default());
            assert!(result.is_valid, "{}: '{}' rejected", code, upper);
        }
    }
}

// ==================== Generation Contract ====================

#[test]
fn test_quantity_zero_returns_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for request in all_requests() {
        let items = Generator::global()
            .generate(&request, 0, "en-US", &mut rng)
            .unwrap();
        assert!(items.is_empty());
    }
}

#[test]
fn test_french_cardinal_purity() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let request = GenerateRequest::Direction {
        subtypes: vec![DirectionKind::Cardinal],
    };
    let items = Generator::global()
        .generate(&request, 8, "fr-FR", &mut rng)
        .unwrap();
    assert_eq!(items.len(), 8);
    for item in items {
        match item {
            ContentItem::Direction(direction) => {
                assert_eq!(direction.kind, DirectionKind::Cardinal);
                assert_eq!(direction.grid, direction.direction.grid());
            }
            other => panic!("expected a direction, got {:?}", other),
        }
    }
}

#[test]
fn test_unknown_locale_falls_back() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let request = GenerateRequest::Time {
        subtypes: vec![TimeKind::Month],
    };
    let items = Generator::global()
        .generate(&request, 12, "xx-XX", &mut rng)
        .unwrap();
    let english = LocaleRegistry::get().reference().lexicon.months;
    for item in items {
        assert!(english.contains(&item.display_text()));
    }
}

#[test]
fn test_english_year_scenario() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let request = GenerateRequest::Time {
        subtypes: vec![TimeKind::Year],
    };
    let items = Generator::global()
        .generate(&request, 1, "en-US", &mut rng)
        .unwrap();
    assert_eq!(items.len(), 1);

    match &items[0] {
        ContentItem::Time(time) => match time.value {
            TimeValue::Year(year) => {
                assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
                assert_eq!(time.display_text, year.to_string());
                assert!(time.accepted_formats.contains(&year.to_string()));
            }
            other => panic!("expected a year, got {:?}", other),
        },
        other => panic!("expected a time item, got {:?}", other),
    }
}

#[test]
fn test_full_dates_are_valid_calendar_dates() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let request = GenerateRequest::Time {
        subtypes: vec![TimeKind::FullDate],
    };
    let items = Generator::global()
        .generate(&request, 300, "ko-KR", &mut rng)
        .unwrap();
    for item in items {
        match item {
            ContentItem::Time(time) => match time.value {
                TimeValue::FullDate(date) => {
                    assert!((MIN_YEAR..=MAX_YEAR).contains(&date.year()))
                }
                other => panic!("expected a date, got {:?}", other),
            },
            other => panic!("expected a time item, got {:?}", other),
        }
    }
}

#[test]
fn test_configuration_errors_reported() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let generator = Generator::global();

    let bad_range = GenerateRequest::Length {
        range: ValueRange { min: 10, max: 10 },
        units: vec![],
    };
    assert_eq!(
        generator.generate(&bad_range, 1, "en-US", &mut rng),
        Err(DrillError::InvalidRange { min: 10, max: 10 })
    );

    let no_subtypes = GenerateRequest::Time { subtypes: vec![] };
    assert_eq!(
        generator.generate(&no_subtypes, 1, "en-US", &mut rng),
        Err(DrillError::EmptySubtypes { category: "time" })
    );
}

// ==================== Validation Scenarios ====================

#[test]
fn test_french_direction_scenarios() {
    let item = Generator::global().direction_item(Direction::North, "fr-FR");
    let validator = Validator::global();

    let upper = validator.validate_direction("NORD", &item, "fr-FR");
    assert!(upper.is_valid);
    assert_eq!(upper.match_type, Some(MatchType::Exact));

    let letter = validator.validate_direction("n", &item, "fr-FR");
    assert!(letter.is_valid);
    assert_eq!(letter.match_type, Some(MatchType::Synonym));
}

#[test]
fn test_chinese_length_scenarios() {
    let item = Generator::global().length_item(5.0, LengthUnit::Meter, "zh-CN");
    let validator = Validator::global();

    assert!(validator.validate_length("5m", &item, "zh-CN").is_valid);

    let converted = validator.validate_length("500 厘米", &item, "zh-CN");
    assert!(converted.is_valid);
    assert_eq!(converted.match_type, Some(MatchType::FormatVariant));

    assert!(!validator.validate_length("50 厘米", &item, "zh-CN").is_valid);
}

#[test]
fn test_fuzzy_boundary() {
    let validator = Validator::global();
    let options = ValidationOptions::default();

    let long = vec!["abcdefgh".to_string()];
    let result = validator.validate("abcdefgx", &long, "en-US", &options);
    assert_eq!(result.match_type, Some(MatchType::Fuzzy));

    let short = vec!["abcd".to_string()];
    let result = validator.validate("axyz", &short, "en-US", &options);
    assert!(!result.is_valid);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_wrong_answer_rejected() {
    let item = Generator::global().direction_item(Direction::Left, "es-ES");
    let result = Validator::global().validate_direction("arriba", &item, "es-ES");
    assert!(!result.is_valid);
    assert_eq!(result.normalized_expected, "izquierda");
}

// ==================== Formatter ====================

#[test]
fn test_formatter_never_empty() {
    let formatter = Formatter::global();
    for code in codes() {
        for item in generate_all(code, 12, 10) {
            let speech = formatter.format(&item, code);
            assert!(!speech.text.trim().is_empty(), "{}: empty speech for {:?}", code, item);
            assert_eq!(speech.lang, code);
        }
    }
}

// ==================== Serialization ====================

#[test]
fn test_items_survive_json() {
    for item in generate_all("de-DE", 13, 5) {
        let json = serde_json::to_string(&item).unwrap();
        let restored: ContentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, item);
    }
}

// ==================== Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_for_any_seed(seed in any::<u64>(), index in 0usize..14) {
        let registry = LocaleRegistry::get();
        let code = registry.supported_codes()[index % registry.supported_codes().len()];
        let validator = Validator::global();

        for item in generate_all(code, seed, 3) {
            prop_assert!(item.accepted_formats().iter().any(|f| f == item.display_text()));
            let result = validator.validate(
                item.display_text(),
                &item,
                code,
                &ValidationOptions::default(),
            );
            prop_assert!(result.is_valid);
            prop_assert_eq!(result.confidence, 1.0);
        }
    }

    #[test]
    fn prop_numbers_stay_in_range(seed in any::<u64>(), min in -1000i64..1000, span in 1i64..1000) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let request = GenerateRequest::Number {
            range: ValueRange { min, max: min + span },
        };
        let items = Generator::global().generate(&request, 5, "en-US", &mut rng).unwrap();
        for item in items {
            match item {
                ContentItem::Number(number) => {
                    prop_assert!(number.value >= min && number.value <= min + span)
                }
                other => prop_assert!(false, "unexpected item {:?}", other),
            }
        }
    }

    #[test]
    fn prop_inverted_ranges_rejected(min in -1000i64..1000, drop in 0i64..1000) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let request = GenerateRequest::Number {
            range: ValueRange { min, max: min - drop },
        };
        prop_assert!(Generator::global().generate(&request, 1, "en-US", &mut rng).is_err());
    }

    #[test]
    fn prop_confidence_in_unit_interval(input in "\\PC{0,16}") {
        let item = Generator::global().direction_item(Direction::Southwest, "it-IT");
        let result = Validator::global().validate_direction(&input, &item, "it-IT");
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert_eq!(result.is_valid, result.match_type.is_some());
    }
}
