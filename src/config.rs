use anyhow::{bail, Context, Result};

/// Default similarity ratio a near-miss answer must reach.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Direction words are short, so one typo costs a larger share of the ratio.
pub const DEFAULT_DIRECTION_FUZZY_THRESHOLD: f64 = 0.7;

/// Relative difference accepted between two lengths after unit conversion.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct DrillConfig {
    // Matching
    pub fuzzy_threshold: f64,
    pub direction_fuzzy_threshold: f64,

    /// Overrides every locale's conversion tolerance when set
    pub length_tolerance: Option<f64>,

    // Locale
    pub default_locale: String,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            direction_fuzzy_threshold: DEFAULT_DIRECTION_FUZZY_THRESHOLD,
            length_tolerance: None,
            default_locale: "en-US".to_string(),
        }
    }
}

impl DrillConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            fuzzy_threshold: fraction_var("DRILL_FUZZY_THRESHOLD")?
                .unwrap_or(defaults.fuzzy_threshold),
            direction_fuzzy_threshold: fraction_var("DRILL_DIRECTION_FUZZY_THRESHOLD")?
                .unwrap_or(defaults.direction_fuzzy_threshold),
            length_tolerance: tolerance_var("DRILL_LENGTH_TOLERANCE")?,
            default_locale: std::env::var("DRILL_DEFAULT_LOCALE")
                .unwrap_or(defaults.default_locale),
        })
    }
}

/// Read an optional env var holding a fraction in `[0, 1]`.
fn fraction_var(name: &str) -> Result<Option<f64>> {
    let raw = match std::env::var(name) {
        Ok(raw) => raw,
        Err(_) => return Ok(None),
    };

    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{} must be a number, got '{}'", name, raw))?;

    if !(0.0..=1.0).contains(&value) {
        bail!("{} must be between 0 and 1, got {}", name, value);
    }

    Ok(Some(value))
}

/// Like [`fraction_var`], but 0 and 1 are rejected as well, matching the
/// bounds on locale tolerances.
fn tolerance_var(name: &str) -> Result<Option<f64>> {
    let value = fraction_var(name)?;
    if let Some(value) = value {
        if value <= 0.0 || value >= 1.0 {
            bail!("{} must be strictly between 0 and 1, got {}", name, value);
        }
    }
    Ok(value)
}
