//! Practice content: the item model and the per-category generators.
//!
//! # Example
//!
//! ```rust
//! use dictation_drill::content::{GenerateRequest, Generator};
//! use dictation_drill::locale::DirectionKind;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let request = GenerateRequest::Direction {
//!     subtypes: vec![DirectionKind::Cardinal],
//! };
//! let items = Generator::global()
//!     .generate(&request, 3, "fr-FR", &mut rng)
//!     .unwrap();
//!
//! assert_eq!(items.len(), 3);
//! for item in &items {
//!     assert!(item.accepted_formats().contains(&item.display_text().to_string()));
//! }
//! ```

mod direction;
mod formats;
mod generator;
mod item;
mod length;
mod number;
mod time;

pub use formats::{format_decimal, group_thousands};
pub use generator::{GenerateRequest, Generator, ValueRange};
pub use item::{
    Category, ContentItem, DirectionItem, LengthItem, NumberItem, TimeItem, TimeKind, TimeValue,
};
pub use length::{
    adjust_range, LARGE_UNIT_RANGE_DIVISOR, LARGE_UNIT_SCALE, SMALL_UNIT_RANGE_FACTOR,
    SMALL_UNIT_SCALE,
};
pub use time::{days_in_month, is_leap_year, MAX_YEAR, MIN_YEAR};
