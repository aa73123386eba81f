//! Capabilities the loaders write parsed entries into.
//!
//! The loaders only depend on these traits. The in-memory tables in
//! [`crate::tables`] implement all of them; a game host can provide its own.

use infozone_core::{LanguageRegistry, Translation, Vec3};
use serde::Serialize;

use crate::radio::RadioEntry;

// ===========================================================================
// Entities
// ===========================================================================

/// The geometry of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ZoneShape {
    /// An origin with offsets to the low and high corners.
    Box { origin: Vec3, mins: Vec3, maxs: Vec3 },
    /// Two opposite corners in world space.
    Corners { low: Vec3, high: Vec3 },
}

impl ZoneShape {
    /// Absolute `(min, max)` corners of the zone.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        match *self {
            ZoneShape::Box { origin, mins, maxs } => (
                Vec3::new(origin.x + mins.x, origin.y + mins.y, origin.z + mins.z),
                Vec3::new(origin.x + maxs.x, origin.y + maxs.y, origin.z + maxs.z),
            ),
            ZoneShape::Corners { low, high } => (
                Vec3::new(low.x.min(high.x), low.y.min(high.y), low.z.min(high.z)),
                Vec3::new(low.x.max(high.x), low.y.max(high.y), low.z.max(high.z)),
            ),
        }
    }
}

/// A HUD display mode: its localized name, screen position and color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudRule {
    pub names: Vec<Translation>,
    pub x: f32,
    pub y: f32,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

// ===========================================================================
// Sink traits
// ===========================================================================

/// Receives zones from the zone file.
pub trait ZoneSink {
    fn add_zone(&mut self, names: Vec<Translation>, shape: ZoneShape);
}

/// Receives `[LANG]` phrases.
pub trait LanguageSink {
    fn add_phrase(&mut self, key: &str, translations: Vec<Translation>);
}

/// A language table that both assigns language ids and stores phrases.
pub trait LanguageStore: LanguageRegistry + LanguageSink {}

impl<T: LanguageRegistry + LanguageSink + ?Sized> LanguageStore for T {}

/// Receives `[HUD]` rules.
pub trait HudRuleSink {
    fn add_rule(&mut self, rule: HudRule);
    fn reset_rules(&mut self);
}

/// Receives `[RADIO]` entries.
pub trait RadioSink {
    fn add_entry(&mut self, entry: RadioEntry);
}

/// Named tunable variables that `[MAIN]` parameters fall back to.
pub trait VariableStore {
    /// Set `name` to `value`. Returns false if no such variable exists.
    fn try_set(&mut self, name: &str, value: &str) -> bool;
}
