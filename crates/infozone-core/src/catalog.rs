//! Static name tables for sections and column types.
//!
//! Lookups are exact, case-sensitive matches. Anything that does not match
//! resolves to the `Unknown` sentinel instead of failing.

use serde::{Deserialize, Serialize};

// ===========================================================================
// Sections
// ===========================================================================

/// A `[SECTION]` of the main configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Unknown,
    Main,
    Hud,
    Lang,
    Radio,
}

const SECTION_NAMES: [(&str, SectionKind); 4] = [
    ("MAIN", SectionKind::Main),
    ("HUD", SectionKind::Hud),
    ("LANG", SectionKind::Lang),
    ("RADIO", SectionKind::Radio),
];

impl SectionKind {
    /// Resolve a section header name. Unrecognized names yield `Unknown`.
    pub fn lookup(name: &str) -> Self {
        SECTION_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(SectionKind::Unknown, |&(_, kind)| kind)
    }

    /// The header name of this section, empty for `Unknown`.
    pub fn name(self) -> &'static str {
        SECTION_NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("", |&(n, _)| n)
    }

    /// The implicit format of sections that do not need a declarator.
    pub fn default_format(self) -> Option<&'static str> {
        match self {
            SectionKind::Hud => Some("[en] [ru] xcoord ycoord red green blue"),
            SectionKind::Lang => Some("phrase [en] [ru]"),
            SectionKind::Radio => Some("menuid radio [en] [ru]"),
            SectionKind::Main | SectionKind::Unknown => None,
        }
    }
}

// ===========================================================================
// Column types
// ===========================================================================

/// The semantic kind of one positional field of a data line.
///
/// `Translation` never appears by name in a format string; it is inferred
/// from bracketed tokens such as `[en]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Unknown,
    Param,
    Value,
    Origin,
    Mins,
    Maxs,
    LCorner,
    HCorner,
    MenuId,
    Radio,
    Red,
    Green,
    Blue,
    XCoord,
    YCoord,
    Phrase,
    Translation,
}

const COLUMN_NAMES: [(&str, ColumnType); 15] = [
    ("param", ColumnType::Param),
    ("value", ColumnType::Value),
    ("origin", ColumnType::Origin),
    ("mins", ColumnType::Mins),
    ("maxs", ColumnType::Maxs),
    ("lcorner", ColumnType::LCorner),
    ("hcorner", ColumnType::HCorner),
    ("menuid", ColumnType::MenuId),
    ("radio", ColumnType::Radio),
    ("red", ColumnType::Red),
    ("green", ColumnType::Green),
    ("blue", ColumnType::Blue),
    ("xcoord", ColumnType::XCoord),
    ("ycoord", ColumnType::YCoord),
    ("phrase", ColumnType::Phrase),
];

/// How the token of a column is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Three float components.
    Vector,
    /// Bounded text, copied verbatim.
    Text,
    /// Permissive base-10 integer.
    Integer,
    /// Permissive decimal float.
    Float,
    /// No conversion rule exists; any row using the column fails.
    Invalid,
}

impl ColumnType {
    /// Resolve a format token. Unrecognized names yield `Unknown`.
    pub fn lookup(name: &str) -> Self {
        COLUMN_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(ColumnType::Unknown, |&(_, ty)| ty)
    }

    /// The format-string name of this column type. `Translation` and
    /// `Unknown` have no name.
    pub fn name(self) -> &'static str {
        COLUMN_NAMES
            .iter()
            .find(|(_, ty)| *ty == self)
            .map_or("", |&(n, _)| n)
    }

    pub fn value_kind(self) -> ValueKind {
        match self {
            ColumnType::Origin
            | ColumnType::Mins
            | ColumnType::Maxs
            | ColumnType::LCorner
            | ColumnType::HCorner => ValueKind::Vector,
            ColumnType::Param
            | ColumnType::Value
            | ColumnType::Radio
            | ColumnType::Phrase
            | ColumnType::Translation => ValueKind::Text,
            ColumnType::MenuId | ColumnType::Red | ColumnType::Green | ColumnType::Blue => {
                ValueKind::Integer
            }
            ColumnType::XCoord | ColumnType::YCoord => ValueKind::Float,
            ColumnType::Unknown => ValueKind::Invalid,
        }
    }
}
