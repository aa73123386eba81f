//! [`InfoZoneData`]: all tables plus the two load entry points.

use infozone_core::LanguageRegistry;

use crate::config::LoaderConfig;
use crate::diagnostics::DiagnosticSink;
use crate::loader::{
    LoadError, MainConfigContext, ZonesContext, load_main_config, load_zones_config,
};
use crate::scanner::ScanSummary;
use crate::settings::Settings;
use crate::sinks::HudRuleSink;
use crate::tables::{HudTable, LanguageTable, RadioTable, VariableTable, ZoneManager};

/// Everything the InfoZone configuration files produce.
#[derive(Debug, Clone)]
pub struct InfoZoneData {
    pub config: LoaderConfig,
    pub settings: Settings,
    pub languages: LanguageTable,
    pub zones: ZoneManager,
    pub hud: HudTable,
    pub radio: RadioTable,
    pub variables: VariableTable,
}

impl InfoZoneData {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            settings: Settings::default(),
            languages: LanguageTable::default(),
            zones: ZoneManager::default(),
            hud: HudTable::default(),
            radio: RadioTable::default(),
            variables: VariableTable::with_defaults(),
        }
    }

    /// Load the main configuration file.
    ///
    /// Settings, HUD rules and radio entries are reset first. Variables are
    /// registered with their defaults before the file can override them. A
    /// missing or unreadable file is an error.
    pub fn load_main_config(
        &mut self,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<ScanSummary, LoadError> {
        self.settings = Settings::default();
        self.hud.reset_rules();
        self.radio.clear();
        self.variables = VariableTable::with_defaults();

        let path = self.config.main_config_path();
        let mut ctx = MainConfigContext {
            settings: &mut self.settings,
            languages: &mut self.languages,
            hud: &mut self.hud,
            radio: &mut self.radio,
            variables: &mut self.variables,
        };
        let summary = load_main_config(&path, &mut ctx, diagnostics, self.config.main_max_line_len)?;

        tracing::info!(
            path = %path.display(),
            rows = summary.rows_accepted,
            rejected = summary.rows_rejected,
            "Main config loaded"
        );
        Ok(summary)
    }

    /// Replace the current zones with those of `map`. Returns the number of
    /// zones loaded.
    ///
    /// A missing zone file is not an error: it is logged and leaves the map
    /// without zones.
    pub fn load_map_zones(
        &mut self,
        map: &str,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<usize, LoadError> {
        self.zones.clear();

        let path = self.config.zones_config_path(map);
        let mut ctx = ZonesContext {
            languages: &mut self.languages,
            zones: &mut self.zones,
        };
        match load_zones_config(&path, &mut ctx, diagnostics, self.config.zones_max_line_len) {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                tracing::warn!(path = %path.display(), "Zones file not found");
                return Ok(0);
            }
            Err(e) => return Err(e),
        }

        let count = self.zones.len();
        tracing::info!(count, map, "Loaded {count} zones for map {map}");
        Ok(count)
    }

    /// Register a language tag outside of any file. `None` once the
    /// language table is full.
    pub fn add_language(&mut self, tag: &str) -> Option<infozone_core::LangId> {
        self.languages.add_language(tag)
    }
}

impl Default for InfoZoneData {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
