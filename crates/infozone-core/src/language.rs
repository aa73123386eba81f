//! Language identifiers and per-language text.

use serde::{Deserialize, Serialize};

use crate::id::LangId;

/// Maximum number of translations extracted from a single row.
pub const MAX_TRANSLATIONS: usize = 16;

/// One language's text for a multi-language value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub lang: LangId,
    pub text: String,
}

impl Translation {
    pub fn new(lang: LangId, text: impl Into<String>) -> Self {
        Self {
            lang,
            text: text.into(),
        }
    }
}

/// Hands out stable identifiers for language tags (`en`, `ru`, ...).
///
/// Registration is idempotent: adding a tag that is already known returns
/// the identifier it was first given. A new tag is refused with `None` once
/// the registry holds [`LangId::CAPACITY`] tags.
pub trait LanguageRegistry {
    fn add_language(&mut self, tag: &str) -> Option<LangId>;
}

impl<R: LanguageRegistry + ?Sized> LanguageRegistry for &mut R {
    fn add_language(&mut self, tag: &str) -> Option<LangId> {
        (**self).add_language(tag)
    }
}
