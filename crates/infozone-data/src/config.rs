//! Where the loader finds its files.
//!
//! Every field has a default matching the stock AMX Mod X layout, so an empty
//! settings file (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::loader::{LoadError, deserialize_file};
use crate::scanner::{MAIN_MAX_LINE_LEN, ZONES_MAX_LINE_LEN};

fn default_data_dir() -> PathBuf {
    PathBuf::from("addons/amxmodx/data")
}

fn default_main_file() -> String {
    "info_zone.ini".to_string()
}

fn default_zones_dir() -> String {
    "info_zone".to_string()
}

fn default_main_max_line_len() -> usize {
    MAIN_MAX_LINE_LEN
}

fn default_zones_max_line_len() -> usize {
    ZONES_MAX_LINE_LEN
}

/// Paths and limits used by [`crate::InfoZoneData`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Directory holding the main configuration file.
    #[serde(default = "default_data_dir")]
    pub configs_dir: PathBuf,
    /// Directory holding the per-map zone subdirectory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_main_file")]
    pub main_file: String,
    #[serde(default = "default_zones_dir")]
    pub zones_dir: String,
    #[serde(default = "default_main_max_line_len")]
    pub main_max_line_len: usize,
    #[serde(default = "default_zones_max_line_len")]
    pub zones_max_line_len: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            configs_dir: default_data_dir(),
            data_dir: default_data_dir(),
            main_file: default_main_file(),
            zones_dir: default_zones_dir(),
            main_max_line_len: MAIN_MAX_LINE_LEN,
            zones_max_line_len: ZONES_MAX_LINE_LEN,
        }
    }
}

impl LoaderConfig {
    /// Load settings from a `.ron`, `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        deserialize_file(path)
    }

    /// Both directories set to `dir`, everything else default.
    pub fn with_root(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            configs_dir: dir.clone(),
            data_dir: dir,
            ..Self::default()
        }
    }

    pub fn main_config_path(&self) -> PathBuf {
        self.configs_dir.join(&self.main_file)
    }

    /// `{data_dir}/{zones_dir}/info_zone_{map}.ini`
    pub fn zones_config_path(&self, map: &str) -> PathBuf {
        self.data_dir
            .join(&self.zones_dir)
            .join(format!("info_zone_{map}.ini"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infozone_core::test_utils::{cleanup, make_test_dir};
    use std::fs;

    #[test]
    fn default_paths() {
        let config = LoaderConfig::default();
        assert_eq!(
            config.main_config_path(),
            PathBuf::from("addons/amxmodx/data/info_zone.ini")
        );
        assert_eq!(
            config.zones_config_path("de_dust2"),
            PathBuf::from("addons/amxmodx/data/info_zone/info_zone_de_dust2.ini")
        );
        assert_eq!(config.main_max_line_len, 8192);
        assert_eq!(config.zones_max_line_len, 2048);
    }

    #[test]
    fn load_ron_with_partial_fields() {
        let dir = make_test_dir("config_ron");
        let path = dir.join("loader.ron");
        fs::write(&path, r#"(configs_dir: "cfg", zones_max_line_len: 512)"#).unwrap();

        let config = LoaderConfig::load(&path).unwrap();
        assert_eq!(config.configs_dir, PathBuf::from("cfg"));
        assert_eq!(config.zones_max_line_len, 512);
        assert_eq!(config.main_file, "info_zone.ini");

        cleanup(&dir);
    }

    #[test]
    fn load_toml() {
        let dir = make_test_dir("config_toml");
        let path = dir.join("loader.toml");
        fs::write(&path, "data_dir = \"srv/data\"\nzones_dir = \"zones\"\n").unwrap();

        let config = LoaderConfig::load(&path).unwrap();
        assert_eq!(
            config.zones_config_path("cs_office"),
            PathBuf::from("srv/data/zones/info_zone_cs_office.ini")
        );

        cleanup(&dir);
    }

    #[test]
    fn load_json() {
        let dir = make_test_dir("config_json");
        let path = dir.join("loader.json");
        fs::write(&path, r#"{"main_file": "iz.ini"}"#).unwrap();

        let config = LoaderConfig::load(&path).unwrap();
        assert_eq!(
            config.main_config_path(),
            PathBuf::from("addons/amxmodx/data/iz.ini")
        );

        cleanup(&dir);
    }

    #[test]
    fn malformed_settings_are_parse_errors() {
        let dir = make_test_dir("config_bad");
        let path = dir.join("loader.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            LoaderConfig::load(&path),
            Err(LoadError::Parse { .. })
        ));

        cleanup(&dir);
    }

    #[test]
    fn with_root_sets_both_dirs() {
        let config = LoaderConfig::with_root("/tmp/iz");
        assert_eq!(config.main_config_path(), PathBuf::from("/tmp/iz/info_zone.ini"));
        assert_eq!(
            config.zones_config_path("x"),
            PathBuf::from("/tmp/iz/info_zone/info_zone_x.ini")
        );
    }
}
