//! Line-by-line section scanner.
//!
//! The scanner classifies each line (blank/comment, section header, format
//! declarator, data row) and keeps three pieces of state: the active
//! section, the active schema and the line number. A failing line is
//! reported and skipped; it never invalidates the active schema or stops the
//! scan.

use infozone_core::text::strip_bom;
use infozone_core::{LanguageRegistry, Row, RowError, Schema, SchemaError, SectionKind};

use crate::diagnostics::{DiagnosticSink, LineReport};
use crate::loader::EntryError;

// ===========================================================================
// Dialects
// ===========================================================================

/// The per-file differences in line grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Lines starting with this character are skipped.
    pub comment: Option<char>,
    /// Whether `[NAME]` lines switch sections.
    pub sections: bool,
    /// Format in effect before any declarator.
    pub initial_format: Option<&'static str>,
    /// Longest accepted line, in bytes.
    pub max_line_len: usize,
}

/// Default line limit of the main configuration file.
pub const MAIN_MAX_LINE_LEN: usize = 8192;

/// Default line limit of zone files.
pub const ZONES_MAX_LINE_LEN: usize = 2048;

/// The fixed format of zone files.
pub const ZONES_FORMAT: &str = "[en] origin mins maxs";

impl Dialect {
    /// `#` comments, `[SECTION]` headers, no schema until a header.
    pub const fn main_config(max_line_len: usize) -> Self {
        Self {
            comment: Some('#'),
            sections: true,
            initial_format: None,
            max_line_len,
        }
    }

    /// No comments, no sections, the zone format from the first line.
    pub const fn zones(max_line_len: usize) -> Self {
        Self {
            comment: None,
            sections: false,
            initial_format: Some(ZONES_FORMAT),
            max_line_len,
        }
    }
}

// ===========================================================================
// Errors
// ===========================================================================

/// Everything that can go wrong on a single line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineError {
    #[error("line is {len} bytes long, at most {max} are allowed")]
    TooLong { len: usize, max: usize },

    #[error("invalid section header '{header}'")]
    SectionHeader { header: String },

    #[error("invalid format string: {0}")]
    Format(#[from] SchemaError),

    #[error("invalid fields: {0}")]
    Row(#[from] RowError),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

// ===========================================================================
// Scanner
// ===========================================================================

/// What a successfully classified line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Blank, comment, or ignored because no section is active.
    Skipped,
    /// A section header; the section is now active.
    Section(SectionKind),
    /// A format declarator; the schema was rebuilt.
    Format,
    /// A data row parsed against the active schema.
    Data(Row),
}

/// The scanner state machine.
#[derive(Debug, Clone)]
pub struct SectionScanner {
    dialect: Dialect,
    section: SectionKind,
    schema: Option<Schema>,
    line_number: usize,
}

impl SectionScanner {
    pub fn new<R: LanguageRegistry + ?Sized>(dialect: Dialect, registry: &mut R) -> Self {
        let schema = dialect
            .initial_format
            .and_then(|format| Schema::parse_format(format, registry).ok());
        Self {
            dialect,
            section: SectionKind::Unknown,
            schema,
            line_number: 0,
        }
    }

    pub fn section(&self) -> SectionKind {
        self.section
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// 1-based number of the last line fed to the scanner.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Classify and process the next raw line of the file.
    pub fn next_line<R: LanguageRegistry + ?Sized>(
        &mut self,
        raw: &str,
        registry: &mut R,
    ) -> Result<LineKind, LineError> {
        self.line_number += 1;

        let line = strip_bom(raw.trim());
        if line.is_empty() {
            return Ok(LineKind::Skipped);
        }
        if let Some(marker) = self.dialect.comment {
            if line.starts_with(marker) {
                return Ok(LineKind::Skipped);
            }
        }

        let header = line.strip_prefix('[').filter(|_| self.dialect.sections);
        if self.dialect.sections && header.is_none() && self.section == SectionKind::Unknown {
            return Ok(LineKind::Skipped);
        }

        // Only lines that would be processed are held to the length limit.
        if raw.len() > self.dialect.max_line_len {
            return Err(LineError::TooLong {
                len: raw.len(),
                max: self.dialect.max_line_len,
            });
        }

        if let Some(header) = header {
            return self.enter_section(header, registry);
        }

        if line.starts_with('{') {
            // A failed declarator leaves no schema until the next valid one.
            self.schema = None;
            self.schema = Some(Schema::parse_declarator(line, registry)?);
            return Ok(LineKind::Format);
        }

        let row = match &self.schema {
            Some(schema) => Row::parse(line, schema)?,
            None => {
                return Err(RowError::ColumnCountMismatch {
                    expected: 0,
                    found: infozone_core::text::split_line(line).len(),
                }
                .into());
            }
        };
        Ok(LineKind::Data(row))
    }

    fn enter_section<R: LanguageRegistry + ?Sized>(
        &mut self,
        header: &str,
        registry: &mut R,
    ) -> Result<LineKind, LineError> {
        let name = header
            .strip_suffix(']')
            .ok_or_else(|| LineError::SectionHeader {
                header: format!("[{header}"),
            })?;

        self.section = SectionKind::lookup(name);
        self.schema = self
            .section
            .default_format()
            .and_then(|format| Schema::parse_format(format, registry).ok());

        tracing::debug!(section = name, line = self.line_number, "entering section");
        Ok(LineKind::Section(self.section))
    }
}

// ===========================================================================
// Driving a whole file
// ===========================================================================

/// Turns parsed rows into entries. Implemented per file kind.
///
/// Handlers are also the language registry the scanner builds schemas with.
pub trait RowHandler: LanguageRegistry {
    /// Consume one data row of `section`. Non-fatal problems can be reported
    /// through `report`; an `Err` rejects the whole row.
    fn handle_row(
        &mut self,
        section: SectionKind,
        row: &Row,
        report: &mut LineReport<'_>,
    ) -> Result<(), EntryError>;
}

/// Counters for one scanned file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines read, including blank and comment lines.
    pub lines: usize,
    /// Data rows handed to a sink.
    pub rows_accepted: usize,
    /// Lines rejected with a diagnostic.
    pub rows_rejected: usize,
}

/// Scan `source` line by line, handing each data row to `handler`.
pub fn scan_source<H: RowHandler + ?Sized>(
    source: &str,
    file: &str,
    dialect: Dialect,
    handler: &mut H,
    diagnostics: &mut dyn DiagnosticSink,
) -> ScanSummary {
    let mut scanner = SectionScanner::new(dialect, handler);
    let mut summary = ScanSummary::default();

    for raw in source.lines() {
        let outcome = scanner.next_line(raw, handler);
        let mut report = LineReport::new(file, scanner.line_number(), diagnostics);

        match outcome {
            Ok(LineKind::Data(row)) => {
                match handler.handle_row(scanner.section(), &row, &mut report) {
                    Ok(()) => summary.rows_accepted += 1,
                    Err(e) => {
                        report.report(LineError::from(e));
                        summary.rows_rejected += 1;
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                report.report(e);
                summary.rows_rejected += 1;
            }
        }
    }

    summary.lines = scanner.line_number();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use infozone_core::test_utils::MemoryRegistry;
    use infozone_core::{ColumnType, Vec3};

    fn main_scanner(reg: &mut MemoryRegistry) -> SectionScanner {
        SectionScanner::new(Dialect::main_config(MAIN_MAX_LINE_LEN), reg)
    }

    fn data(kind: Result<LineKind, LineError>) -> Row {
        match kind {
            Ok(LineKind::Data(row)) => row,
            other => panic!("expected data row, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);

        assert_eq!(scanner.next_line("   ", &mut reg), Ok(LineKind::Skipped));
        assert_eq!(scanner.next_line("# note", &mut reg), Ok(LineKind::Skipped));
        assert_eq!(scanner.line_number(), 2);
    }

    #[test]
    fn lines_before_any_section_are_ignored() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);

        assert_eq!(scanner.next_line("{param value}", &mut reg), Ok(LineKind::Skipped));
        assert_eq!(scanner.next_line("log_mode 2", &mut reg), Ok(LineKind::Skipped));
        assert!(scanner.schema().is_none());
    }

    #[test]
    fn section_header_loads_default_format() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);

        assert_eq!(
            scanner.next_line("[LANG]", &mut reg),
            Ok(LineKind::Section(SectionKind::Lang))
        );
        assert_eq!(scanner.schema().unwrap().len(), 3);

        let row = data(scanner.next_line("hello Hello Привет", &mut reg));
        assert_eq!(row.text(ColumnType::Phrase), Some("hello"));
    }

    #[test]
    fn main_section_requires_declarator() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);

        scanner.next_line("[HUD]", &mut reg).unwrap();
        assert_eq!(
            scanner.next_line("[MAIN]", &mut reg),
            Ok(LineKind::Section(SectionKind::Main))
        );
        assert!(scanner.schema().is_none());
        assert_eq!(
            scanner.next_line("log_mode 2", &mut reg),
            Err(LineError::Row(RowError::ColumnCountMismatch {
                expected: 0,
                found: 2
            }))
        );

        assert_eq!(scanner.next_line("{param value}", &mut reg), Ok(LineKind::Format));
        let row = data(scanner.next_line("log_mode 2", &mut reg));
        assert_eq!(row.text(ColumnType::Value), Some("2"));
    }

    #[test]
    fn unknown_section_disables_data() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);

        scanner.next_line("[LANG]", &mut reg).unwrap();
        assert_eq!(
            scanner.next_line("[OTHER]", &mut reg),
            Ok(LineKind::Section(SectionKind::Unknown))
        );
        assert_eq!(scanner.next_line("a b c", &mut reg), Ok(LineKind::Skipped));
    }

    #[test]
    fn malformed_header_keeps_state() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);

        scanner.next_line("[LANG]", &mut reg).unwrap();
        assert!(matches!(
            scanner.next_line("[HUD", &mut reg),
            Err(LineError::SectionHeader { .. })
        ));
        assert_eq!(scanner.section(), SectionKind::Lang);
        assert_eq!(scanner.schema().unwrap().len(), 3);
    }

    #[test]
    fn bad_declarator_unsets_schema_until_next_one() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = SectionScanner::new(Dialect::zones(ZONES_MAX_LINE_LEN), &mut reg);
        assert!(scanner.schema().is_some());

        assert!(matches!(
            scanner.next_line("{[en origin}", &mut reg),
            Err(LineError::Format(SchemaError::InvalidLanguageTag { .. }))
        ));
        assert!(scanner.schema().is_none());
        assert!(scanner.next_line("Base 0;0;0 1;1;1 2;2;2", &mut reg).is_err());

        assert_eq!(
            scanner.next_line("{[en] lcorner hcorner}", &mut reg),
            Ok(LineKind::Format)
        );
        let row = data(scanner.next_line("Base 0;0;0 8;8;8", &mut reg));
        assert_eq!(row.vector(ColumnType::HCorner), Some(Vec3::new(8.0, 8.0, 8.0)));
    }

    #[test]
    fn zone_lines_with_hash_are_data() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = SectionScanner::new(Dialect::zones(ZONES_MAX_LINE_LEN), &mut reg);
        let row = data(scanner.next_line("#1 0;0;0 -1;-1;-1 1;1;1", &mut reg));
        assert_eq!(row.translations(16)[0].text, "#1");
    }

    #[test]
    fn bom_is_stripped() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = main_scanner(&mut reg);
        assert_eq!(
            scanner.next_line("\u{feff}[RADIO]", &mut reg),
            Ok(LineKind::Section(SectionKind::Radio))
        );
    }

    #[test]
    fn overlong_skipped_lines_stay_silent() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = SectionScanner::new(Dialect::main_config(16), &mut reg);
        let long_comment = format!("# {}", "c".repeat(40));
        let long_data = "x".repeat(40);

        assert_eq!(scanner.next_line(&long_comment, &mut reg), Ok(LineKind::Skipped));
        assert_eq!(scanner.next_line(&long_data, &mut reg), Ok(LineKind::Skipped));
        scanner.next_line("[OTHER]", &mut reg).unwrap();
        assert_eq!(scanner.next_line(&long_data, &mut reg), Ok(LineKind::Skipped));
        assert_eq!(scanner.next_line(&" ".repeat(40), &mut reg), Ok(LineKind::Skipped));

        scanner.next_line("[LANG]", &mut reg).unwrap();
        assert_eq!(
            scanner.next_line(&long_data, &mut reg),
            Err(LineError::TooLong { len: 40, max: 16 })
        );
        assert_eq!(scanner.line_number(), 7);
    }

    #[test]
    fn overlong_line_is_rejected() {
        let mut reg = MemoryRegistry::new();
        let mut scanner = SectionScanner::new(Dialect::zones(16), &mut reg);
        assert_eq!(
            scanner.next_line(&"x".repeat(17), &mut reg),
            Err(LineError::TooLong { len: 17, max: 16 })
        );
        assert_eq!(scanner.line_number(), 1);
    }
}
