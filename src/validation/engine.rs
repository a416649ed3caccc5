//! Tiered answer matching.
//!
//! For each accepted answer, in order, the tiers below are tried and the
//! first success decides the verdict:
//!
//! 1. exact match after normalization (confidence 1.0)
//! 2. synonym, direct 0.9 or through a shared form 0.8
//! 3. format variant: same number, date or length (0.95)
//! 4. fuzzy, edit-distance ratio at or above the threshold (confidence = ratio)

use crate::config::{DrillConfig, DEFAULT_DIRECTION_FUZZY_THRESHOLD, DEFAULT_FUZZY_THRESHOLD};
use crate::content::ContentItem;
use crate::locale::{
    LengthUnit, LocaleConfig, LocaleRegistry, SynonymMap, SynonymRelation, SynonymTable,
};
use crate::validation::fuzzy::similarity_ratio;
use crate::validation::normalize::{normalize, NormalizeOptions};
use crate::validation::variants::{self, VariantContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const EXACT_CONFIDENCE: f64 = 1.0;
const FORMAT_VARIANT_CONFIDENCE: f64 = 0.95;
const DIRECT_SYNONYM_CONFIDENCE: f64 = 0.9;
const SHARED_SYNONYM_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// Compare without case folding
    pub case_sensitive: bool,
    pub allow_synonyms: bool,
    pub allow_format_variants: bool,
    /// Minimum similarity ratio for the fuzzy tier
    pub fuzzy_threshold: f64,
    /// Keep punctuation and skip the fuzzy tier
    pub strict_mode: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            allow_synonyms: true,
            allow_format_variants: true,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            strict_mode: false,
        }
    }
}

impl ValidationOptions {
    /// Defaults with the looser threshold used for direction words.
    pub fn direction() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_DIRECTION_FUZZY_THRESHOLD,
            ..Self::default()
        }
    }

    pub fn from_config(config: &DrillConfig) -> Self {
        Self {
            fuzzy_threshold: config.fuzzy_threshold,
            ..Self::default()
        }
    }

    pub fn for_direction(config: &DrillConfig) -> Self {
        Self {
            fuzzy_threshold: config.direction_fuzzy_threshold,
            ..Self::default()
        }
    }

    fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            case_sensitive: self.case_sensitive,
            strict: self.strict_mode,
        }
    }
}

/// Tier that accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    Exact,
    Synonym,
    FormatVariant,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub confidence: f64,
    /// `None` when no tier matched
    pub match_type: Option<MatchType>,
    pub normalized_input: String,
    pub normalized_expected: String,
}

impl ValidationResult {
    fn rejected(normalized_input: String, normalized_expected: String) -> Self {
        Self {
            is_valid: false,
            confidence: 0.0,
            match_type: None,
            normalized_input,
            normalized_expected,
        }
    }
}

/// What an answer is checked against.
#[derive(Debug, Clone, Copy)]
pub enum Expected<'a> {
    /// A generated item; its accepted formats are the candidates and a length
    /// item's value and unit drive unit conversion
    Item(&'a ContentItem),
    /// A bare list of accepted strings
    Formats(&'a [String]),
}

impl<'a> Expected<'a> {
    fn candidates(&self) -> &'a [String] {
        match *self {
            Expected::Item(item) => item.accepted_formats(),
            Expected::Formats(formats) => formats,
        }
    }

    fn length_target(&self) -> Option<(f64, LengthUnit)> {
        match self {
            Expected::Item(ContentItem::Length(length)) => Some((length.value, length.unit)),
            _ => None,
        }
    }
}

impl<'a> From<&'a ContentItem> for Expected<'a> {
    fn from(item: &'a ContentItem) -> Self {
        Expected::Item(item)
    }
}

impl<'a> From<&'a [String]> for Expected<'a> {
    fn from(formats: &'a [String]) -> Self {
        Expected::Formats(formats)
    }
}

impl<'a> From<&'a Vec<String>> for Expected<'a> {
    fn from(formats: &'a Vec<String>) -> Self {
        Expected::Formats(formats.as_slice())
    }
}

#[derive(Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a LocaleRegistry,
    synonyms: &'a SynonymTable,
    /// Overrides the locale's conversion tolerance when set
    length_tolerance: Option<f64>,
}

impl Validator<'static> {
    /// Validator over the shared built-in tables.
    pub fn global() -> Self {
        Self::new(LocaleRegistry::get(), SynonymTable::get())
    }
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a LocaleRegistry, synonyms: &'a SynonymTable) -> Self {
        Self {
            registry,
            synonyms,
            length_tolerance: None,
        }
    }

    pub fn with_length_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    fn locale(&self, code: &str) -> &'a LocaleConfig {
        match self.registry.get_by_code(code) {
            Some(config) => config,
            None => {
                let reference = self.registry.reference();
                warn!(
                    "Unknown locale '{}', validating with '{}'",
                    code, reference.code
                );
                reference
            }
        }
    }

    /// Judge `input` against `expected` under `locale`'s rules.
    ///
    /// Blank input is rejected without trying any tier. On failure the
    /// result carries the normalized form of the first accepted answer.
    pub fn validate<'e>(
        &self,
        input: &str,
        expected: impl Into<Expected<'e>>,
        locale: &str,
        options: &ValidationOptions,
    ) -> ValidationResult {
        let expected = expected.into();
        let config = self.locale(locale);
        let normalize_options = options.normalize_options();
        let norm = |text: &str| normalize(text, config.script, normalize_options);

        let candidates = expected.candidates();
        let first_expected = candidates
            .first()
            .map(|c| norm(c.as_str()))
            .unwrap_or_default();

        if input.trim().is_empty() {
            return ValidationResult::rejected(String::new(), first_expected);
        }
        let normalized_input = norm(input);
        if normalized_input.is_empty() {
            return ValidationResult::rejected(normalized_input, first_expected);
        }

        let synonyms = self.synonyms.for_locale(config.code);
        let ctx = VariantContext {
            locale: config,
            fallback: self.registry.reference(),
            normalize: &norm,
            tolerance: self.length_tolerance.unwrap_or(config.units.tolerance),
        };
        let target = expected.length_target();

        for candidate in candidates {
            let normalized = norm(candidate.as_str());
            if normalized.is_empty() {
                continue;
            }

            if let Some((match_type, confidence)) =
                match_candidate(&normalized_input, &normalized, target, synonyms, &ctx, options)
            {
                debug!(
                    "Accepted '{}' as {:?} of '{}' ({:.2})",
                    normalized_input, match_type, normalized, confidence
                );
                return ValidationResult {
                    is_valid: true,
                    confidence,
                    match_type: Some(match_type),
                    normalized_input,
                    normalized_expected: normalized,
                };
            }
        }

        debug!("Rejected '{}' for {}", normalized_input, config.code);
        ValidationResult::rejected(normalized_input, first_expected)
    }

    /// Validate a direction answer with the direction fuzzy threshold.
    pub fn validate_direction<'e>(
        &self,
        input: &str,
        expected: impl Into<Expected<'e>>,
        locale: &str,
    ) -> ValidationResult {
        self.validate(input, expected, locale, &ValidationOptions::direction())
    }

    /// Validate a length answer with default options. Unit conversion needs
    /// the length item itself; a bare format list falls back to parsing
    /// each accepted string.
    pub fn validate_length<'e>(
        &self,
        input: &str,
        expected: impl Into<Expected<'e>>,
        locale: &str,
    ) -> ValidationResult {
        self.validate(input, expected, locale, &ValidationOptions::default())
    }
}

fn match_candidate(
    input: &str,
    candidate: &str,
    target: Option<(f64, LengthUnit)>,
    synonyms: &SynonymMap,
    ctx: &VariantContext,
    options: &ValidationOptions,
) -> Option<(MatchType, f64)> {
    if input == candidate {
        return Some((MatchType::Exact, EXACT_CONFIDENCE));
    }

    if options.allow_synonyms {
        match synonyms.relation(input, candidate, ctx.normalize) {
            Some(SynonymRelation::Direct) => {
                return Some((MatchType::Synonym, DIRECT_SYNONYM_CONFIDENCE))
            }
            Some(SynonymRelation::Shared) => {
                return Some((MatchType::Synonym, SHARED_SYNONYM_CONFIDENCE))
            }
            None => {}
        }
    }

    if options.allow_format_variants && variants::equivalent(input, candidate, target, ctx) {
        return Some((MatchType::FormatVariant, FORMAT_VARIANT_CONFIDENCE));
    }

    if !options.strict_mode {
        let ratio = similarity_ratio(input, candidate);
        if ratio >= options.fuzzy_threshold {
            return Some((MatchType::Fuzzy, ratio));
        }
    }

    None
}
