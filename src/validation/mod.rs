//! Free-text answer validation.
//!
//! # Architecture
//!
//! - `normalize`: Folding applied to both sides before comparison
//! - `fuzzy`: Edit distance and similarity ratio
//! - `variants`: Number, date and length equivalence
//! - `engine`: The tiered matcher and its options
//!
//! # Example
//!
//! ```rust
//! use dictation_drill::content::Generator;
//! use dictation_drill::locale::Direction;
//! use dictation_drill::validation::{MatchType, Validator};
//!
//! let item = Generator::global().direction_item(Direction::North, "fr-FR");
//! let result = Validator::global().validate_direction("n", &item, "fr-FR");
//!
//! assert!(result.is_valid);
//! assert_eq!(result.match_type, Some(MatchType::Synonym));
//! ```

mod engine;
mod fuzzy;
mod normalize;
mod variants;

pub use engine::{Expected, MatchType, ValidationOptions, ValidationResult, Validator};
pub use fuzzy::{levenshtein, similarity_ratio};
pub use normalize::{normalize, NormalizeOptions};
pub use variants::{lengths_match, parse_date, parse_number};
