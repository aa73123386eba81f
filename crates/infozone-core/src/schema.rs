//! Column schemas built from format declarators.
//!
//! A declarator such as `{ [en] origin mins maxs }` becomes an ordered list
//! of [`Column`]s. Bracketed tokens are translation columns whose language is
//! fixed here, at build time, not per data row.

use crate::catalog::ColumnType;
use crate::id::LangId;
use crate::language::LanguageRegistry;
use crate::text::split_line;

/// Maximum number of columns in a schema.
pub const MAX_COLUMNS: usize = 32;

// ===========================================================================
// Errors
// ===========================================================================

/// Reasons a format declarator is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The declarator does not end with `}`.
    #[error("format declarator is missing the closing '}}'")]
    MissingClosingBrace,

    /// The declarator holds no column tokens.
    #[error("format declarator has no columns")]
    Empty,

    /// More columns than a schema can hold.
    #[error("format declarator has {count} columns, at most {max} are allowed", max = MAX_COLUMNS)]
    TooManyColumns { count: usize },

    /// A `[tag` token without its `]`, or an empty `[]`.
    #[error("invalid language tag '{token}' in column {index}")]
    InvalidLanguageTag { index: usize, token: String },

    /// The registry has no room for another language.
    #[error("cannot register language '{tag}': language limit reached")]
    LanguageLimit { tag: String },
}

// ===========================================================================
// Column
// ===========================================================================

/// One positional column of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub column_type: ColumnType,
    /// Set only for `Translation` columns.
    pub lang: Option<LangId>,
}

impl Column {
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            lang: None,
        }
    }

    pub fn translation(lang: LangId) -> Self {
        Self {
            column_type: ColumnType::Translation,
            lang: Some(lang),
        }
    }
}

// ===========================================================================
// Schema
// ===========================================================================

/// An ordered, non-empty list of at most [`MAX_COLUMNS`] columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Parse a full declarator line: an optional leading `{`, the column
    /// tokens and a mandatory trailing `}`.
    pub fn parse_declarator<R: LanguageRegistry + ?Sized>(
        line: &str,
        registry: &mut R,
    ) -> Result<Self, SchemaError> {
        let body = line.strip_prefix('{').unwrap_or(line);
        let body = body
            .strip_suffix('}')
            .ok_or(SchemaError::MissingClosingBrace)?;
        Self::parse_format(body, registry)
    }

    /// Parse the column tokens of a format, without surrounding braces.
    /// Used directly for the built-in default formats.
    pub fn parse_format<R: LanguageRegistry + ?Sized>(
        format: &str,
        registry: &mut R,
    ) -> Result<Self, SchemaError> {
        let tokens = split_line(format);
        if tokens.is_empty() {
            return Err(SchemaError::Empty);
        }
        if tokens.len() > MAX_COLUMNS {
            return Err(SchemaError::TooManyColumns {
                count: tokens.len(),
            });
        }

        let mut columns = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.into_iter().enumerate() {
            let column = match token.strip_prefix('[') {
                Some(tagged) => {
                    let tag = tagged
                        .strip_suffix(']')
                        .filter(|tag| !tag.is_empty())
                        .ok_or_else(|| SchemaError::InvalidLanguageTag {
                            index,
                            token: token.to_string(),
                        })?;
                    let lang = registry
                        .add_language(tag)
                        .ok_or_else(|| SchemaError::LanguageLimit {
                            tag: tag.to_string(),
                        })?;
                    Column::translation(lang)
                }
                // Unknown names are kept; rows using them fail at conversion.
                None => Column::new(ColumnType::lookup(token)),
            };
            columns.push(column);
        }

        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a successfully built schema.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// The first column of the given type.
    pub fn column_of_type(&self, column_type: ColumnType) -> Option<&Column> {
        self.columns.iter().find(|c| c.column_type == column_type)
    }

    /// Number of translation columns.
    pub fn translation_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.column_type == ColumnType::Translation)
            .count()
    }
}
