//! `[MAIN]` parameters.
//!
//! A handful of parameters are owned by [`Settings`]; every other name is
//! passed through to the [`VariableStore`].

use std::ops::BitOrAssign;

use infozone_core::text::parse_int_lenient;
use serde::{Deserialize, Serialize};

use crate::sinks::VariableStore;

// ===========================================================================
// Player options
// ===========================================================================

/// Per-player option bits applied to new players.
///
/// Bits 0..=3 hold the HUD position, bit 4 blocks radio, bit 5 blocks
/// "fire in the hole" messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerOptions(pub u32);

impl PlayerOptions {
    pub const HUD_POSITION_MASK: u32 = 0x0F;
    pub const BLOCK_RADIO: u32 = 1 << 4;
    pub const BLOCK_FITH: u32 = 1 << 5;

    pub fn with_hud_position(position: u32) -> Self {
        Self(position & Self::HUD_POSITION_MASK)
    }

    pub fn with_block_radio(block: bool) -> Self {
        Self(if block { Self::BLOCK_RADIO } else { 0 })
    }

    pub fn with_block_fith(block: bool) -> Self {
        Self(if block { Self::BLOCK_FITH } else { 0 })
    }

    pub fn hud_position(self) -> u32 {
        self.0 & Self::HUD_POSITION_MASK
    }

    pub fn block_radio(self) -> bool {
        self.0 & Self::BLOCK_RADIO != 0
    }

    pub fn block_fith(self) -> bool {
        self.0 & Self::BLOCK_FITH != 0
    }
}

impl BitOrAssign for PlayerOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ===========================================================================
// Settings
// ===========================================================================

/// Settings read from the `[MAIN]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub log_mode: i32,
    pub bots_fix: bool,
    pub default_options: PlayerOptions,
}

impl Settings {
    /// Apply a named setting. Returns false if `name` is not a setting.
    pub fn apply(&mut self, name: &str, value: &str) -> bool {
        let integer = parse_int_lenient(value);

        match name {
            "log_mode" => self.log_mode = integer,
            "bots_fix" => self.bots_fix = integer != 0,
            // Positions are 1-based in the file and 0-based in the bit field.
            "default_hudpos" => {
                self.default_options |=
                    PlayerOptions::with_hud_position((integer as u32).wrapping_sub(1))
            }
            "default_block_radio" => {
                self.default_options |= PlayerOptions::with_block_radio(integer != 0)
            }
            "default_block_fith" => {
                self.default_options |= PlayerOptions::with_block_fith(integer != 0)
            }
            _ => return false,
        }
        true
    }
}

/// Dispatch one `param value` pair: named settings first, then the variable
/// store. Returns false if neither recognizes `name`.
pub fn apply_param(
    settings: &mut Settings,
    variables: &mut dyn VariableStore,
    name: &str,
    value: &str,
) -> bool {
    settings.apply(name, value) || variables.try_set(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeVariables(HashMap<String, String>);

    impl VariableStore for FakeVariables {
        fn try_set(&mut self, name: &str, value: &str) -> bool {
            match self.0.get_mut(name) {
                Some(slot) => {
                    *slot = value.to_string();
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn log_mode_and_bots_fix() {
        let mut settings = Settings::default();
        let mut vars = FakeVariables::default();

        assert!(apply_param(&mut settings, &mut vars, "log_mode", "2"));
        assert!(apply_param(&mut settings, &mut vars, "bots_fix", "1"));
        assert_eq!(settings.log_mode, 2);
        assert!(settings.bots_fix);
    }

    #[test]
    fn default_options_accumulate() {
        let mut settings = Settings::default();
        let mut vars = FakeVariables::default();

        assert!(apply_param(&mut settings, &mut vars, "default_hudpos", "3"));
        assert!(apply_param(&mut settings, &mut vars, "default_block_radio", "1"));
        assert!(apply_param(&mut settings, &mut vars, "default_block_fith", "0"));

        let options = settings.default_options;
        assert_eq!(options.hud_position(), 2);
        assert!(options.block_radio());
        assert!(!options.block_fith());
    }

    #[test]
    fn hud_position_zero_wraps_into_field() {
        let mut settings = Settings::default();
        assert!(settings.apply("default_hudpos", "0"));
        assert_eq!(settings.default_options.hud_position(), 0x0F);
        assert!(!settings.default_options.block_radio());
    }

    #[test]
    fn falls_back_to_variables() {
        let mut settings = Settings::default();
        let mut vars = FakeVariables::default();
        vars.0.insert("iz_use_interval".to_string(), "3.0".to_string());

        assert!(apply_param(&mut settings, &mut vars, "iz_use_interval", "5"));
        assert_eq!(vars.0["iz_use_interval"], "5");
        assert!(!apply_param(&mut settings, &mut vars, "no_such_param", "1"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn non_numeric_values_become_zero() {
        let mut settings = Settings::default();
        settings.log_mode = 7;
        assert!(settings.apply("log_mode", "verbose"));
        assert_eq!(settings.log_mode, 0);
    }
}
