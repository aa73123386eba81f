//! Data-line parsing against an established [`Schema`].
//!
//! Conversions are permissive for numbers (non-numeric text becomes zero)
//! and strict for shape: a wrong token count, a vector without exactly three
//! components or a column of unknown type aborts the whole row, so
//! misaligned data never lands in a different column.

use crate::catalog::{ColumnType, ValueKind};
use crate::language::Translation;
use crate::schema::{Column, Schema};
use crate::text::{parse_float_lenient, parse_int_lenient, split_line, truncate_chars};
use crate::vector::{Vec3, parse_vector};

/// Maximum number of characters kept in a text cell; longer text is cut.
pub const MAX_TEXT_CHARS: usize = 64;

// ===========================================================================
// Errors
// ===========================================================================

/// Structural problems that reject a data line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The line has a different number of tokens than the schema has columns.
    #[error("expected {expected} fields, found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    /// A vector column did not hold exactly three components.
    #[error("invalid vector data in field {index}")]
    InvalidVector { index: usize },

    /// The column type has no conversion rule.
    #[error("invalid field type {column_type:?} (pos {index})")]
    InvalidColumnType {
        index: usize,
        column_type: ColumnType,
    },
}

// ===========================================================================
// Cells
// ===========================================================================

/// A converted field value. The variant is determined by the column type.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Vector(Vec3),
    Text(String),
    Integer(i32),
    Float(f32),
}

/// One column of a parsed row together with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub column: Column,
    pub value: CellValue,
}

impl Cell {
    pub fn column_type(&self) -> ColumnType {
        self.column.column_type
    }

    pub fn as_vector(&self) -> Option<Vec3> {
        match self.value {
            CellValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self.value {
            CellValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            CellValue::Float(f) => Some(f),
            _ => None,
        }
    }
}

fn convert(index: usize, column: &Column, token: &str) -> Result<CellValue, RowError> {
    match column.column_type.value_kind() {
        ValueKind::Vector => parse_vector(token)
            .map(CellValue::Vector)
            .ok_or(RowError::InvalidVector { index }),
        ValueKind::Text => Ok(CellValue::Text(
            truncate_chars(token, MAX_TEXT_CHARS).to_string(),
        )),
        ValueKind::Integer => Ok(CellValue::Integer(parse_int_lenient(token))),
        ValueKind::Float => Ok(CellValue::Float(parse_float_lenient(token))),
        ValueKind::Invalid => Err(RowError::InvalidColumnType {
            index,
            column_type: column.column_type,
        }),
    }
}

// ===========================================================================
// Row
// ===========================================================================

/// A fully converted data line, one cell per schema column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Tokenize `line` and convert every token against `schema`.
    pub fn parse(line: &str, schema: &Schema) -> Result<Self, RowError> {
        let tokens = split_line(line);
        if tokens.len() != schema.len() {
            return Err(RowError::ColumnCountMismatch {
                expected: schema.len(),
                found: tokens.len(),
            });
        }

        let cells = schema
            .columns()
            .iter()
            .zip(tokens)
            .enumerate()
            .map(|(index, (column, token))| {
                Ok(Cell {
                    column: *column,
                    value: convert(index, column, token)?,
                })
            })
            .collect::<Result<Vec<_>, RowError>>()?;

        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The first cell whose column has the given type.
    pub fn cell_of_type(&self, column_type: ColumnType) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column_type() == column_type)
    }

    pub fn vector(&self, column_type: ColumnType) -> Option<Vec3> {
        self.cell_of_type(column_type).and_then(Cell::as_vector)
    }

    pub fn text(&self, column_type: ColumnType) -> Option<&str> {
        self.cell_of_type(column_type).and_then(Cell::as_text)
    }

    pub fn integer(&self, column_type: ColumnType) -> Option<i32> {
        self.cell_of_type(column_type).and_then(Cell::as_integer)
    }

    pub fn float(&self, column_type: ColumnType) -> Option<f32> {
        self.cell_of_type(column_type).and_then(Cell::as_float)
    }

    /// Text of every translation column in schema order, at most `max`.
    pub fn translations(&self, max: usize) -> Vec<Translation> {
        self.cells
            .iter()
            .filter_map(|cell| match (&cell.column.lang, &cell.value) {
                (Some(lang), CellValue::Text(text))
                    if cell.column_type() == ColumnType::Translation =>
                {
                    Some(Translation::new(*lang, text.clone()))
                }
                _ => None,
            })
            .take(max)
            .collect()
    }
}
