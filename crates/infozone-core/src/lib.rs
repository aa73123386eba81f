//! InfoZone Core -- the schema-driven row parser behind the InfoZone
//! configuration files.
//!
//! Every InfoZone data file shares one line grammar: a *format declarator*
//! (`{ phrase [en] [ru] }`) defines what each following data line means,
//! column by column. This crate turns declarators into typed [`schema::Schema`]
//! values and converts data lines into typed [`row::Row`] values.
//!
//! # Parsing Pipeline
//!
//! 1. **Catalog** -- Section and column names resolve to [`catalog::SectionKind`]
//!    and [`catalog::ColumnType`] through fixed, case-sensitive tables.
//! 2. **Schema** -- A declarator is tokenized; `[tag]` tokens become
//!    translation columns bound to a [`id::LangId`] from the
//!    [`language::LanguageRegistry`].
//! 3. **Row** -- A data line is tokenized and each token converted according
//!    to its column. Numbers are permissive (garbage becomes zero), shape is
//!    strict (column count, vector arity, unknown columns abort the row).
//! 4. **Translations** -- [`row::Row::translations`] collects the text of
//!    every translation column in schema order.
//!
//! ```rust,ignore
//! let schema = Schema::parse_declarator("{phrase [en] [ru]}", &mut registry)?;
//! let row = Row::parse("greeting Hello Привет", &schema)?;
//! let names = row.translations(MAX_TRANSLATIONS);
//! ```

pub mod catalog;
pub mod id;
pub mod language;
pub mod row;
pub mod schema;
pub mod text;
pub mod vector;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{ColumnType, SectionKind, ValueKind};
pub use id::LangId;
pub use language::{LanguageRegistry, MAX_TRANSLATIONS, Translation};
pub use row::{Cell, CellValue, MAX_TEXT_CHARS, Row, RowError};
pub use schema::{Column, MAX_COLUMNS, Schema, SchemaError};
pub use vector::{Vec3, parse_vector};
