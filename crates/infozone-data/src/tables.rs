//! In-memory tables implementing every sink trait.
//!
//! These are what [`crate::InfoZoneData`] loads into. A game host with its
//! own storage implements the traits in [`crate::sinks`] instead.

use std::collections::HashMap;

use infozone_core::text::parse_float_lenient;
use infozone_core::{LangId, LanguageRegistry, Translation};
use serde::Serialize;

use crate::radio::RadioEntry;
use crate::sinks::{HudRule, HudRuleSink, LanguageSink, RadioSink, VariableStore, ZoneShape, ZoneSink};

fn text_for(translations: &[Translation], lang: LangId) -> Option<&str> {
    translations
        .iter()
        .find(|t| t.lang == lang)
        .map(|t| t.text.as_str())
}

// ===========================================================================
// Languages
// ===========================================================================

/// Registered language tags and `[LANG]` phrases.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    tags: Vec<String>,
    ids: HashMap<String, LangId>,
    phrases: HashMap<String, Vec<Translation>>,
}

impl LanguageTable {
    pub fn lang_id(&self, tag: &str) -> Option<LangId> {
        self.ids.get(tag).copied()
    }

    pub fn tag(&self, id: LangId) -> Option<&str> {
        self.tags.get(id.index()).map(String::as_str)
    }

    pub fn languages(&self) -> &[String] {
        &self.tags
    }

    pub fn phrase(&self, key: &str) -> Option<&[Translation]> {
        self.phrases.get(key).map(Vec::as_slice)
    }

    /// The text of `key` in language `lang`.
    pub fn lookup(&self, key: &str, lang: LangId) -> Option<&str> {
        text_for(self.phrase(key)?, lang)
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

impl LanguageRegistry for LanguageTable {
    fn add_language(&mut self, tag: &str) -> Option<LangId> {
        if let Some(id) = self.lang_id(tag) {
            return Some(id);
        }
        let id = LangId::from_index(self.tags.len())?;
        self.tags.push(tag.to_string());
        self.ids.insert(tag.to_string(), id);
        Some(id)
    }
}

/// A repeated key replaces the earlier phrase.
impl LanguageSink for LanguageTable {
    fn add_phrase(&mut self, key: &str, translations: Vec<Translation>) {
        self.phrases.insert(key.to_string(), translations);
    }
}

// ===========================================================================
// Zones
// ===========================================================================

/// A named region of the current map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub names: Vec<Translation>,
    pub shape: ZoneShape,
}

impl Zone {
    pub fn name(&self, lang: LangId) -> Option<&str> {
        text_for(&self.names, lang)
    }
}

/// The zones of the current map.
#[derive(Debug, Clone, Default)]
pub struct ZoneManager {
    zones: Vec<Zone>,
}

impl ZoneManager {
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }
}

impl ZoneSink for ZoneManager {
    fn add_zone(&mut self, names: Vec<Translation>, shape: ZoneShape) {
        self.zones.push(Zone { names, shape });
    }
}

// ===========================================================================
// HUD
// ===========================================================================

#[derive(Debug, Clone, Default)]
pub struct HudTable {
    rules: Vec<HudRule>,
}

impl HudTable {
    pub fn rules(&self) -> &[HudRule] {
        &self.rules
    }
}

impl HudRuleSink for HudTable {
    fn add_rule(&mut self, rule: HudRule) {
        self.rules.push(rule);
    }

    fn reset_rules(&mut self) {
        self.rules.clear();
    }
}

// ===========================================================================
// Radio
// ===========================================================================

#[derive(Debug, Clone, Default)]
pub struct RadioTable {
    entries: Vec<RadioEntry>,
}

impl RadioTable {
    pub fn entries(&self) -> &[RadioEntry] {
        &self.entries
    }

    pub fn find(&self, menu_id: i32, command: &str) -> Option<&RadioEntry> {
        self.entries
            .iter()
            .find(|e| e.menu_id == menu_id && e.command == command)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl RadioSink for RadioTable {
    fn add_entry(&mut self, entry: RadioEntry) {
        self.entries.push(entry);
    }
}

// ===========================================================================
// Variables
// ===========================================================================

/// Tunable variables registered before the main config is read, with their
/// default values.
pub const DEFAULT_VARIABLES: [(&str, &str); 5] = [
    ("iz_zone_leave_time", "0.5"),
    ("iz_use_interval", "3.0"),
    ("iz_smooth_positioning", "1"),
    ("iz_max_aim_angle", "3.0"),
    ("iz_item_max_radius", "48.0"),
];

/// Named string variables. Only registered names can be set.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    values: HashMap<String, String>,
}

impl VariableTable {
    /// A table holding [`DEFAULT_VARIABLES`].
    pub fn with_defaults() -> Self {
        let mut table = Self::default();
        for (name, value) in DEFAULT_VARIABLES {
            table.register(name, value);
        }
        table
    }

    /// Register `name`, or reset it to `value` if it already exists.
    pub fn register(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.get(name).map(parse_float_lenient)
    }
}

impl VariableStore for VariableTable {
    fn try_set(&mut self, name: &str, value: &str) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }
}
