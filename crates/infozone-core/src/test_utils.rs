//! Shared test helpers for unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so downstream
//! crates can enable them through the `test-utils` feature.

use std::path::{Path, PathBuf};

use crate::id::LangId;
use crate::language::LanguageRegistry;
use crate::schema::Schema;

/// Minimal in-memory language registry. Identifiers are assigned in
/// registration order starting at 0.
#[derive(Debug, Default, Clone)]
pub struct MemoryRegistry {
    tags: Vec<String>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self, id: LangId) -> Option<&str> {
        self.tags.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl LanguageRegistry for MemoryRegistry {
    fn add_language(&mut self, tag: &str) -> Option<LangId> {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            return LangId::from_index(pos);
        }
        let id = LangId::from_index(self.tags.len())?;
        self.tags.push(tag.to_string());
        Some(id)
    }
}

// ===========================================================================
// Schema constructors
// ===========================================================================

/// Build a schema from a bare format string, panicking on failure.
pub fn schema(format: &str, registry: &mut MemoryRegistry) -> Schema {
    Schema::parse_format(format, registry).expect("test format should parse")
}

/// The fixed zone-file format.
pub fn zone_schema(registry: &mut MemoryRegistry) -> Schema {
    schema("[en] origin mins maxs", registry)
}

/// The implicit HUD format.
pub fn hud_schema(registry: &mut MemoryRegistry) -> Schema {
    schema("[en] [ru] xcoord ycoord red green blue", registry)
}

// ===========================================================================
// Temp directories
// ===========================================================================

/// Create an empty directory under the system temp dir, unique per test
/// `name` and process. Any leftover from an earlier run is removed first.
pub fn make_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("infozone_test_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("test dir should be creatable");
    dir
}

/// Remove a directory created by [`make_test_dir`].
pub fn cleanup(dir: &Path) {
    let _ = std::fs::remove_dir_all(dir);
}
