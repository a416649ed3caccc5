//! Word tables a locale needs to generate practice items.
//!
//! Direction and unit words are stored as plain lists laid out in the
//! reference order defined by [`Direction`] and [`LengthUnit`]. The registry
//! checks every locale against that order at construction time.

use crate::locale::numbers::NumberSpeller;
use serde::{Deserialize, Serialize};

// ==================== Directions ====================

/// The three families of direction practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectionKind {
    Cardinal,
    Relative,
    Spatial,
}

impl DirectionKind {
    pub const ALL: [DirectionKind; 3] = [
        DirectionKind::Cardinal,
        DirectionKind::Relative,
        DirectionKind::Spatial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionKind::Cardinal => "cardinal",
            DirectionKind::Relative => "relative",
            DirectionKind::Spatial => "spatial",
        }
    }

    /// Directions of this kind, in reference order.
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            DirectionKind::Cardinal => &CARDINAL_ORDER,
            DirectionKind::Relative => &RELATIVE_ORDER,
            DirectionKind::Spatial => &SPATIAL_ORDER,
        }
    }

    /// Button-grid cells for this kind, parallel to [`Self::directions`].
    fn grid(&self) -> &'static [GridPosition] {
        match self {
            DirectionKind::Cardinal => &CARDINAL_GRID,
            DirectionKind::Relative => &RELATIVE_GRID,
            DirectionKind::Spatial => &SPATIAL_GRID,
        }
    }
}

/// A direction, independent of any language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
    Inside,
    Outside,
}

const CARDINAL_ORDER: [Direction; 8] = [
    Direction::North,
    Direction::Northeast,
    Direction::East,
    Direction::Southeast,
    Direction::South,
    Direction::Southwest,
    Direction::West,
    Direction::Northwest,
];

const RELATIVE_ORDER: [Direction; 4] = [
    Direction::Front,
    Direction::Back,
    Direction::Left,
    Direction::Right,
];

const SPATIAL_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Inside,
    Direction::Outside,
];

// Cardinals sit on a 3x3 compass rose with the centre left empty.
const CARDINAL_GRID: [GridPosition; 8] = [
    GridPosition::new(0, 1),
    GridPosition::new(0, 2),
    GridPosition::new(1, 2),
    GridPosition::new(2, 2),
    GridPosition::new(2, 1),
    GridPosition::new(2, 0),
    GridPosition::new(1, 0),
    GridPosition::new(0, 0),
];

const RELATIVE_GRID: [GridPosition; 4] = [
    GridPosition::new(0, 1),
    GridPosition::new(2, 1),
    GridPosition::new(1, 0),
    GridPosition::new(1, 2),
];

const SPATIAL_GRID: [GridPosition; 4] = [
    GridPosition::new(0, 1),
    GridPosition::new(2, 1),
    GridPosition::new(1, 1),
    GridPosition::new(1, 2),
];

impl Direction {
    pub fn kind(&self) -> DirectionKind {
        match self {
            Direction::North
            | Direction::Northeast
            | Direction::East
            | Direction::Southeast
            | Direction::South
            | Direction::Southwest
            | Direction::West
            | Direction::Northwest => DirectionKind::Cardinal,
            Direction::Front | Direction::Back | Direction::Left | Direction::Right => {
                DirectionKind::Relative
            }
            Direction::Up | Direction::Down | Direction::Inside | Direction::Outside => {
                DirectionKind::Spatial
            }
        }
    }

    /// Position within its kind's reference list.
    pub fn index(&self) -> usize {
        self.kind()
            .directions()
            .iter()
            .position(|d| d == self)
            .unwrap_or(0)
    }

    /// Grid cell shared by this direction in every locale.
    pub fn grid(&self) -> GridPosition {
        self.kind().grid()[self.index()]
    }
}

/// Row/column of a direction button in the answer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u8,
    pub col: u8,
}

impl GridPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

// ==================== Length Units ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "yd")]
    Yard,
    #[serde(rename = "mi")]
    Mile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// Size of one unit in meters, the shared base unit.
    pub fn scale(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    /// International symbol, recognized in every locale.
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    pub fn system(&self) -> UnitSystem {
        match self {
            LengthUnit::Millimeter
            | LengthUnit::Centimeter
            | LengthUnit::Meter
            | LengthUnit::Kilometer => UnitSystem::Metric,
            LengthUnit::Inch | LengthUnit::Foot | LengthUnit::Yard | LengthUnit::Mile => {
                UnitSystem::Imperial
            }
        }
    }
}

/// How one locale names one length unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitNames {
    pub unit: LengthUnit,
    /// Form used in display text for any value other than one
    pub name: &'static str,
    /// Form used in display text for exactly one
    pub singular: &'static str,
    /// Other full spellings accepted as answers
    pub alternates: &'static [&'static str],
    /// Locale-specific short forms, in addition to [`LengthUnit::symbol`]
    pub abbreviations: &'static [&'static str],
}

impl UnitNames {
    /// Full spellings: name, singular and alternates.
    pub fn full_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.name, self.singular]
            .into_iter()
            .chain(self.alternates.iter().copied())
    }

    /// Short forms: the international symbol followed by locale abbreviations.
    pub fn short_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.unit.symbol()).chain(self.abbreviations.iter().copied())
    }
}

// ==================== Dates ====================

/// Counter words CJK locales attach to calendar numbers (年 / 月 / 日).
#[derive(Debug, Clone, Copy)]
pub struct DateCounters {
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    /// Extra day counters accepted as answers (e.g. 号)
    pub day_alternates: &'static [&'static str],
    /// Whether a space separates counted components in a full date
    pub spaced: bool,
}

/// How a locale marks day-of-month ordinals in speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalStyle {
    /// 1st, 2nd, 3rd, 4th, 11th
    English,
    /// 1er, then plain cardinals
    French,
    /// 15.
    Period,
    /// 15º
    MasculineIndicator,
    None,
}

impl OrdinalStyle {
    pub fn suffix(&self, n: u32) -> Option<&'static str> {
        match self {
            OrdinalStyle::English => Some(match (n % 10, n % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            }),
            OrdinalStyle::French if n == 1 => Some("er"),
            OrdinalStyle::French => None,
            OrdinalStyle::Period => Some("."),
            OrdinalStyle::MasculineIndicator => Some("º"),
            OrdinalStyle::None => None,
        }
    }

    pub fn apply(&self, n: u32) -> Option<String> {
        self.suffix(n).map(|suffix| format!("{}{}", n, suffix))
    }
}

// ==================== Lexicon ====================

/// All words a locale contributes to item generation.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub months: [&'static str; 12],
    /// Either empty or one list of extra forms per month
    pub month_variants: &'static [&'static [&'static str]],
    /// Monday first
    pub weekdays: [&'static str; 7],
    /// Either empty or one list of extra forms per weekday
    pub weekday_variants: &'static [&'static [&'static str]],

    pub cardinal: &'static [&'static str],
    pub relative: &'static [&'static str],
    pub spatial: &'static [&'static str],

    pub units: &'static [UnitNames],

    pub number_words: Option<NumberSpeller>,
    /// Word spoken for the decimal point ("point", "virgule", 点)
    pub decimal_word: &'static str,
    /// Placed between a value and its unit ("" for CJK)
    pub joiner: &'static str,
    pub ordinal: OrdinalStyle,
    pub date_counters: Option<DateCounters>,
}

impl Lexicon {
    pub fn direction_words(&self, kind: DirectionKind) -> &'static [&'static str] {
        match kind {
            DirectionKind::Cardinal => self.cardinal,
            DirectionKind::Relative => self.relative,
            DirectionKind::Spatial => self.spatial,
        }
    }

    /// Word for a direction, looked up positionally.
    pub fn direction_word(&self, direction: Direction) -> Option<&'static str> {
        self.direction_words(direction.kind())
            .get(direction.index())
            .copied()
    }

    pub fn unit_names(&self, unit: LengthUnit) -> Option<&'static UnitNames> {
        self.units.iter().find(|names| names.unit == unit)
    }

    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        self.months.get(month.checked_sub(1)? as usize).copied()
    }

    pub fn month_extra_forms(&self, month: u32) -> &'static [&'static str] {
        month
            .checked_sub(1)
            .and_then(|i| self.month_variants.get(i as usize))
            .copied()
            .unwrap_or(&[])
    }

    /// `index` counts from Monday = 0.
    pub fn weekday_extra_forms(&self, index: usize) -> &'static [&'static str] {
        self.weekday_variants.get(index).copied().unwrap_or(&[])
    }

    /// Resolve a unit word (full name or short form) to its unit.
    ///
    /// Full names win over short forms so that a locale abbreviation can
    /// never shadow another unit's spelled-out name.
    ///
    /// `token` must already be normalized; table words go through `normalize`
    /// before comparison.
    pub fn resolve_unit(
        &self,
        token: &str,
        normalize: &dyn Fn(&str) -> String,
    ) -> Option<LengthUnit> {
        let matches = |candidate: &str| normalize(candidate) == token;
        self.units
            .iter()
            .find(|names| names.full_names().any(matches))
            .or_else(|| self.units.iter().find(|names| names.short_names().any(matches)))
            .map(|names| names.unit)
    }
}
