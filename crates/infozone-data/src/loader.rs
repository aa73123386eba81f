//! Loading pipeline: reads configuration files and routes parsed rows into
//! the sinks.
//!
//! Also provides format detection (RON/JSON/TOML) and deserialization
//! helpers used for the loader's own settings file.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use infozone_core::{ColumnType, LangId, LanguageRegistry, MAX_TRANSLATIONS, Row, SectionKind};

use crate::diagnostics::{DiagnosticSink, LineReport};
use crate::radio::RadioEntry;
use crate::scanner::{Dialect, RowHandler, ScanSummary, scan_source};
use crate::settings::{Settings, apply_param};
use crate::sinks::{
    HudRule, HudRuleSink, LanguageStore, RadioSink, VariableStore, ZoneShape, ZoneSink,
};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that prevent a file from being loaded at all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },
}

impl LoadError {
    /// True if the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A parsed row that cannot become an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// The row has no translation text where a name is required.
    #[error("invalid {entry} without translations")]
    NoTranslations { entry: &'static str },

    /// A column the entry needs is absent from the schema.
    #[error("invalid {entry}: missing '{}' column", .column.name())]
    MissingColumn {
        entry: &'static str,
        column: ColumnType,
    },

    /// A zone row has neither origin/mins/maxs nor lcorner/hcorner.
    #[error("not enough coordinates to create zone")]
    NotEnoughCoordinates,

    /// Neither a setting nor a variable has this name.
    #[error("invalid or unknown parameter '{name}'")]
    UnknownParameter { name: String },

    /// One language of a radio row holds neither 3 nor 5 phrases.
    #[error("invalid radio phrases count {count} for language #{}", .lang.0)]
    RadioPhraseCount { lang: LangId, count: usize },
}

fn require<T>(value: Option<T>, entry: &'static str, column: ColumnType) -> Result<T, EntryError> {
    value.ok_or(EntryError::MissingColumn { entry, column })
}

fn names(row: &Row, entry: &'static str) -> Result<Vec<infozone_core::Translation>, EntryError> {
    let names = row.translations(MAX_TRANSLATIONS);
    if names.is_empty() {
        return Err(EntryError::NoTranslations { entry });
    }
    Ok(names)
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported loader settings formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(LoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |detail: String| LoadError::Parse {
        file: path.to_path_buf(),
        detail,
    };
    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Read a configuration file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ===========================================================================
// Main configuration
// ===========================================================================

/// Everything the main configuration file writes into.
pub struct MainConfigContext<'a> {
    pub settings: &'a mut Settings,
    pub languages: &'a mut dyn LanguageStore,
    pub hud: &'a mut dyn HudRuleSink,
    pub radio: &'a mut dyn RadioSink,
    pub variables: &'a mut dyn VariableStore,
}

impl LanguageRegistry for MainConfigContext<'_> {
    fn add_language(&mut self, tag: &str) -> Option<LangId> {
        self.languages.add_language(tag)
    }
}

impl MainConfigContext<'_> {
    fn param(&mut self, row: &Row) -> Result<(), EntryError> {
        let name = require(row.text(ColumnType::Param), "parameter", ColumnType::Param)?;
        let value = require(row.text(ColumnType::Value), "parameter", ColumnType::Value)?;

        if apply_param(self.settings, self.variables, name, value) {
            Ok(())
        } else {
            Err(EntryError::UnknownParameter {
                name: name.to_string(),
            })
        }
    }

    fn hud_rule(&mut self, row: &Row) -> Result<(), EntryError> {
        let names = names(row, "hud mode")?;
        let rule = HudRule {
            names,
            x: require(row.float(ColumnType::XCoord), "hud mode", ColumnType::XCoord)?,
            y: require(row.float(ColumnType::YCoord), "hud mode", ColumnType::YCoord)?,
            red: require(row.integer(ColumnType::Red), "hud mode", ColumnType::Red)?,
            green: require(row.integer(ColumnType::Green), "hud mode", ColumnType::Green)?,
            blue: require(row.integer(ColumnType::Blue), "hud mode", ColumnType::Blue)?,
        };
        self.hud.add_rule(rule);
        Ok(())
    }

    fn phrase(&mut self, row: &Row) -> Result<(), EntryError> {
        let translations = names(row, "phrase")?;
        let key = require(row.text(ColumnType::Phrase), "phrase", ColumnType::Phrase)?;
        self.languages.add_phrase(key, translations);
        Ok(())
    }

    fn radio(&mut self, row: &Row, report: &mut LineReport<'_>) -> Result<(), EntryError> {
        let translations = names(row, "radio")?;
        let menu_id = require(row.integer(ColumnType::MenuId), "radio", ColumnType::MenuId)?;
        let command = require(row.text(ColumnType::Radio), "radio", ColumnType::Radio)?;

        let entry = RadioEntry::build(menu_id, command, &translations, |e| report.report(e));
        self.radio.add_entry(entry);
        Ok(())
    }
}

impl RowHandler for MainConfigContext<'_> {
    fn handle_row(
        &mut self,
        section: SectionKind,
        row: &Row,
        report: &mut LineReport<'_>,
    ) -> Result<(), EntryError> {
        match section {
            SectionKind::Main => self.param(row),
            SectionKind::Hud => self.hud_rule(row),
            SectionKind::Lang => self.phrase(row),
            SectionKind::Radio => self.radio(row, report),
            SectionKind::Unknown => Ok(()),
        }
    }
}

/// Scan main configuration text already in memory.
pub fn scan_main_config(
    source: &str,
    file: &str,
    ctx: &mut MainConfigContext<'_>,
    diagnostics: &mut dyn DiagnosticSink,
    max_line_len: usize,
) -> ScanSummary {
    scan_source(source, file, Dialect::main_config(max_line_len), ctx, diagnostics)
}

/// Read and scan the main configuration file.
///
/// Only a failure to read the file is an error; problems on individual lines
/// are reported to `diagnostics`.
pub fn load_main_config(
    path: &Path,
    ctx: &mut MainConfigContext<'_>,
    diagnostics: &mut dyn DiagnosticSink,
    max_line_len: usize,
) -> Result<ScanSummary, LoadError> {
    let source = read_source(path)?;
    let file = path.display().to_string();
    Ok(scan_main_config(&source, &file, ctx, diagnostics, max_line_len))
}

// ===========================================================================
// Zone files
// ===========================================================================

/// Everything a zone file writes into.
pub struct ZonesContext<'a> {
    pub languages: &'a mut dyn LanguageRegistry,
    pub zones: &'a mut dyn ZoneSink,
}

impl LanguageRegistry for ZonesContext<'_> {
    fn add_language(&mut self, tag: &str) -> Option<LangId> {
        self.languages.add_language(tag)
    }
}

fn zone_shape(row: &Row) -> Result<ZoneShape, EntryError> {
    let boxed = (
        row.vector(ColumnType::Origin),
        row.vector(ColumnType::Mins),
        row.vector(ColumnType::Maxs),
    );
    if let (Some(origin), Some(mins), Some(maxs)) = boxed {
        return Ok(ZoneShape::Box { origin, mins, maxs });
    }

    match (row.vector(ColumnType::LCorner), row.vector(ColumnType::HCorner)) {
        (Some(low), Some(high)) => Ok(ZoneShape::Corners { low, high }),
        _ => Err(EntryError::NotEnoughCoordinates),
    }
}

impl RowHandler for ZonesContext<'_> {
    fn handle_row(
        &mut self,
        _section: SectionKind,
        row: &Row,
        _report: &mut LineReport<'_>,
    ) -> Result<(), EntryError> {
        let names = names(row, "zone")?;
        let shape = zone_shape(row)?;
        self.zones.add_zone(names, shape);
        Ok(())
    }
}

/// Scan zone file text already in memory.
pub fn scan_zones_config(
    source: &str,
    file: &str,
    ctx: &mut ZonesContext<'_>,
    diagnostics: &mut dyn DiagnosticSink,
    max_line_len: usize,
) -> ScanSummary {
    scan_source(source, file, Dialect::zones(max_line_len), ctx, diagnostics)
}

/// Read and scan one map's zone file.
pub fn load_zones_config(
    path: &Path,
    ctx: &mut ZonesContext<'_>,
    diagnostics: &mut dyn DiagnosticSink,
    max_line_len: usize,
) -> Result<ScanSummary, LoadError> {
    let source = read_source(path)?;
    let file = path.display().to_string();
    Ok(scan_zones_config(&source, &file, ctx, diagnostics, max_line_len))
}
