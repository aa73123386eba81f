use serde::{Deserialize, Serialize};

/// Identifies a language registered with a [`LanguageRegistry`](crate::LanguageRegistry).
/// Cheap to copy and compare. Stable for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LangId(pub u16);

impl LangId {
    /// Number of distinct ids a registry can hand out.
    pub const CAPACITY: usize = u16::MAX as usize + 1;

    /// The id for a registry position, or `None` past [`LangId::CAPACITY`].
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(LangId)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}
