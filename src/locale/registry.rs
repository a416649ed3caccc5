//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is built from static tables and never mutated afterwards.
//! Construction runs a consistency check over every locale so that tables
//! read positionally (direction words, unit names) are guaranteed to line up
//! with the reference locale.

use crate::error::{DrillError, Result};
use crate::locale::data::default_locales;
use crate::locale::lexicon::{DirectionKind, LengthUnit, Lexicon, UnitSystem};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Decimal and thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub thousands_separator: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Dmy,
    Mdy,
    Ymd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub order: DateOrder,
    pub separator: char,
}

/// Which length units a locale practices and how strict conversions are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPreference {
    pub system: UnitSystem,
    pub preferred: &'static [LengthUnit],
    /// Relative difference accepted after converting to the base unit
    pub tolerance: f64,
}

/// Speech-pacing hints for the external TTS engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtsConfig {
    pub pause_after_numbers: bool,
    pub digit_grouping: bool,
    pub use_ordinals: bool,
    pub pause_marker: &'static str,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Script-specific cleanup applied to answers before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCleanup {
    None,
    /// Strip bidi marks, tatweel and harakat; fold Arabic-Indic digits
    RightToLeft,
    /// Strip ideographic spaces
    Cjk,
    /// Fold Devanagari digits
    Devanagari,
}

/// Configuration for one supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// BCP 47 code (e.g., "en-US", "zh-CN")
    pub code: &'static str,

    /// English name (e.g., "French (France)")
    pub name: &'static str,

    /// Native name (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the reference locale (exactly one)
    pub is_reference: bool,

    pub number: NumberFormat,
    pub date: DateFormat,
    pub units: UnitPreference,
    pub tts: TtsConfig,
    pub script: ScriptCleanup,
    pub lexicon: Lexicon,
}

/// Registry of every supported locale.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    reference: usize,
}

/// Shared registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Build the registry from the built-in tables.
    pub fn new() -> Result<Self> {
        Self::with_locales(default_locales())
    }

    /// Build a registry from explicit tables, checking their consistency.
    pub fn with_locales(locales: Vec<LocaleConfig>) -> Result<Self> {
        let reference = check_consistency(&locales)?;
        Ok(Self { locales, reference })
    }

    /// Get the shared registry built from the built-in tables.
    ///
    /// # Panics
    /// Panics if the built-in tables fail their consistency check. That is a
    /// defect in the static data, caught by this crate's own tests.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| match LocaleRegistry::new() {
            Ok(registry) => registry,
            Err(e) => panic!("Built-in locale tables are inconsistent: {}", e),
        })
    }

    /// Get a locale by code. Matching ignores ASCII case and accepts `_` as
    /// the separator.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        let code = code.trim().replace('_', "-");
        self.locales
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(&code))
    }

    /// Configuration for `code`, falling back to the reference locale.
    pub fn config(&self, code: &str) -> &LocaleConfig {
        self.get_by_code(code).unwrap_or_else(|| self.reference())
    }

    /// The locale used as fallback and as the alignment anchor.
    pub fn reference(&self) -> &LocaleConfig {
        &self.locales[self.reference]
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    pub fn supported_codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|locale| locale.code).collect()
    }

    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }
}

/// Verify the tables and return the index of the reference locale.
fn check_consistency(locales: &[LocaleConfig]) -> Result<usize> {
    let references: Vec<usize> = locales
        .iter()
        .enumerate()
        .filter(|(_, locale)| locale.is_reference)
        .map(|(i, _)| i)
        .collect();

    let reference = match references.as_slice() {
        [single] => *single,
        _ => {
            return Err(DrillError::InconsistentLocaleTable {
                locale: "*",
                detail: format!("expected one reference locale, found {}", references.len()),
            })
        }
    };

    let mut seen = HashSet::new();
    for locale in locales {
        let fail = |detail: String| DrillError::InconsistentLocaleTable {
            locale: locale.code,
            detail,
        };

        if !seen.insert(locale.code.to_ascii_lowercase()) {
            return Err(fail("duplicate locale code".to_string()));
        }

        // Direction words are read positionally against the reference order.
        for kind in DirectionKind::ALL {
            let words = locale.lexicon.direction_words(kind);
            let expected = kind.directions().len();
            if words.len() != expected {
                return Err(fail(format!(
                    "{} list has {} words, expected {}",
                    kind.as_str(),
                    words.len(),
                    expected
                )));
            }
            let unique: HashSet<_> = words.iter().collect();
            if unique.len() != words.len() || words.iter().any(|w| w.trim().is_empty()) {
                return Err(fail(format!(
                    "{} list has blank or repeated words",
                    kind.as_str()
                )));
            }
        }

        for unit in LengthUnit::ALL {
            let count = locale
                .lexicon
                .units
                .iter()
                .filter(|names| names.unit == unit)
                .count();
            if count != 1 {
                return Err(fail(format!("unit {:?} named {} times", unit, count)));
            }
        }

        if !matches!(locale.lexicon.month_variants.len(), 0 | 12) {
            return Err(fail("month variants must cover all 12 months".to_string()));
        }
        if !matches!(locale.lexicon.weekday_variants.len(), 0 | 7) {
            return Err(fail("weekday variants must cover all 7 days".to_string()));
        }

        if locale.units.preferred.is_empty() {
            return Err(fail("no preferred length units".to_string()));
        }
        if !(locale.units.tolerance > 0.0 && locale.units.tolerance < 1.0) {
            return Err(fail(format!(
                "conversion tolerance {} outside (0, 1)",
                locale.units.tolerance
            )));
        }
    }

    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_builtin_tables_are_consistent() {
        assert!(LocaleRegistry::new().is_ok());
    }

    #[test]
    fn test_fourteen_locales() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.supported_codes().len(), 14);
        assert_eq!(registry.list_all().len(), 14);
    }

    #[test]
    fn test_reference_is_en_us() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.reference().code, "en-US");
        assert!(registry.reference().is_reference);
    }

    #[test]
    fn test_get_by_code_french() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("fr-FR").expect("fr-FR should exist");
        assert_eq!(config.code, "fr-FR");
        assert_eq!(config.native_name, "Français");
        assert_eq!(config.number.decimal_separator, ',');
        assert!(!config.is_reference);
    }

    #[test]
    fn test_get_by_code_is_lenient() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.get_by_code("zh_cn").unwrap().code, "zh-CN");
        assert_eq!(registry.get_by_code(" DE-de ").unwrap().code, "de-DE");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("xx-XX").is_none());
        assert!(!registry.is_supported("xx-XX"));
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn test_config_falls_back_to_reference() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.config("xx-XX").code, "en-US");
        assert_eq!(registry.config("").code, "en-US");
        assert_eq!(registry.config("ja-JP").code, "ja-JP");
    }

    #[test]
    fn test_every_locale_supported() {
        let registry = LocaleRegistry::get();
        for code in registry.supported_codes() {
            assert!(registry.is_supported(code));
            assert_eq!(registry.config(code).code, code);
        }
    }

    #[test]
    fn test_rejects_misaligned_direction_list() {
        let mut locales = default_locales();
        let french = locales
            .iter_mut()
            .find(|locale| locale.code == "fr-FR")
            .unwrap();
        french.lexicon.cardinal = &["nord", "est", "sud", "ouest"];

        match LocaleRegistry::with_locales(locales) {
            Err(DrillError::InconsistentLocaleTable { locale, detail }) => {
                assert_eq!(locale, "fr-FR");
                assert!(detail.contains("cardinal"));
            }
            other => panic!("expected inconsistency error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_rejects_repeated_direction_word() {
        let mut locales = default_locales();
        locales[1].lexicon.relative = &["front", "front", "left", "right"];
        assert!(LocaleRegistry::with_locales(locales).is_err());
    }

    #[test]
    fn test_rejects_two_references() {
        let mut locales = default_locales();
        locales[1].is_reference = true;
        assert!(LocaleRegistry::with_locales(locales).is_err());
    }

    #[test]
    fn test_rejects_missing_unit() {
        let mut locales = default_locales();
        let units = locales[0].lexicon.units;
        locales[0].lexicon.units = &units[..7];
        assert!(LocaleRegistry::with_locales(locales).is_err());
    }

    #[test]
    fn test_tolerances_default_to_five_percent() {
        for locale in LocaleRegistry::get().list_all() {
            assert_eq!(locale.units.tolerance, 0.05, "{}", locale.code);
        }
    }
}
