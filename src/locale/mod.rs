//! Locale tables for item generation and answer matching.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their settings
//! - `data`: The built-in locale records
//! - `lexicon`: Word tables (months, weekdays, directions, units) and the
//!   language-independent keys they are indexed by
//! - `numbers`: Numeral-to-word spellers
//! - `synonyms`: Interchangeable surface forms per locale
//!
//! # Example
//!
//! ```rust
//! use dictation_drill::locale::LocaleRegistry;
//!
//! let registry = LocaleRegistry::get();
//! assert!(registry.is_supported("fr-FR"));
//!
//! // Unknown codes resolve to the reference locale
//! assert_eq!(registry.config("xx-XX").code, "en-US");
//! ```

mod data;
mod lexicon;
mod numbers;
mod registry;
mod synonyms;

pub use lexicon::{
    DateCounters, Direction, DirectionKind, GridPosition, LengthUnit, Lexicon, OrdinalStyle,
    UnitNames, UnitSystem,
};
pub use numbers::{NumberSpeller, MAX_SPELLED};
pub use registry::{
    DateFormat, DateOrder, LocaleConfig, LocaleRegistry, NumberFormat, ScriptCleanup, TtsConfig,
    UnitPreference,
};
pub use synonyms::{SynonymMap, SynonymRelation, SynonymTable};
