//! InfoZone Data -- loads the InfoZone main configuration and per-map zone
//! files into typed tables.
//!
//! The main file (`info_zone.ini`) is split into `[MAIN]`, `[HUD]`, `[LANG]`
//! and `[RADIO]` sections; each map has its own zone file
//! (`info_zone/info_zone_<map>.ini`). Both are read line by line by the
//! [`scanner`], which builds schemas and rows with `infozone-core` and hands
//! each row to a section handler in [`loader`]. Handlers write into the sink
//! traits of [`sinks`]; [`tables`] provides in-memory implementations.
//!
//! Per-line problems never abort a load. They are reported to a
//! [`diagnostics::DiagnosticSink`] and the line is skipped.
//!
//! ```rust,ignore
//! let mut data = InfoZoneData::new(LoaderConfig::load(Path::new("loader.ron"))?);
//! data.load_main_config(&mut TracingDiagnostics)?;
//! let zones = data.load_map_zones("de_dust2", &mut TracingDiagnostics)?;
//! ```

pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod radio;
pub mod scanner;
pub mod settings;
pub mod sinks;
pub mod store;
pub mod tables;

pub use config::LoaderConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
pub use loader::{EntryError, LoadError};
pub use radio::RadioEntry;
pub use scanner::{Dialect, LineError, ScanSummary};
pub use settings::{PlayerOptions, Settings};
pub use sinks::{HudRule, ZoneShape};
pub use store::InfoZoneData;
