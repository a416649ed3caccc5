//! Locale-aware dictation practice: item generation, speech formatting and
//! answer validation across fourteen locales.

pub mod config;
pub mod content;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod validation;

pub use content::{ContentItem, GenerateRequest, Generator, ValueRange};
pub use error::{DrillError, Result};
pub use formatter::{Formatter, SpeechText};
pub use validation::{MatchType, ValidationOptions, ValidationResult, Validator};
