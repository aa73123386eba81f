//! `[RADIO]` phrase matrices.
//!
//! Each translation of a radio row carries several phrases packed into one
//! field (`"Go;Hold;Fall back"`). The text is split again and spread over a
//! phrase-index x translation-index matrix.

use infozone_core::text::split_delimited;
use infozone_core::Translation;
use serde::Serialize;

use crate::loader::EntryError;

/// Phrases per radio entry in multi-phrase mode.
pub const RADIO_MAX_PHRASES: usize = 5;

/// Phrases per radio entry in the short mode.
pub const RADIO_MIN_PHRASES: usize = 3;

const PHRASE_DELIMS: [char; 2] = [';', '\t'];

/// `matrix[phrase][translation]`; a translation whose text was rejected
/// leaves its column empty.
pub type PhraseMatrix = [Vec<Option<Translation>>; RADIO_MAX_PHRASES];

/// A radio menu command with its localized phrases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioEntry {
    pub menu_id: i32,
    pub command: String,
    pub phrases: PhraseMatrix,
    /// Number of translation columns the row supplied.
    pub translations_count: usize,
    /// True if any language supplied five phrases.
    pub multi_phrase: bool,
}

impl RadioEntry {
    /// Split every translation into its phrases and build the entry.
    ///
    /// A translation that does not hold exactly 3 or 5 phrases is passed to
    /// `reject` and skipped; the other translations are kept.
    pub fn build(
        menu_id: i32,
        command: &str,
        translations: &[Translation],
        mut reject: impl FnMut(EntryError),
    ) -> Self {
        let mut phrases: PhraseMatrix =
            std::array::from_fn(|_| vec![None; translations.len()]);
        let mut multi_phrase = false;

        for (index, translation) in translations.iter().enumerate() {
            let parts: Vec<&str> = split_delimited(&translation.text, &PHRASE_DELIMS).collect();

            match parts.len() {
                RADIO_MIN_PHRASES => {}
                RADIO_MAX_PHRASES => multi_phrase = true,
                count => {
                    reject(EntryError::RadioPhraseCount {
                        lang: translation.lang,
                        count,
                    });
                    continue;
                }
            }

            for (slot, part) in phrases.iter_mut().zip(parts) {
                slot[index] = Some(Translation::new(translation.lang, part));
            }
        }

        Self {
            menu_id,
            command: command.to_string(),
            phrases,
            translations_count: translations.len(),
            multi_phrase,
        }
    }

    /// The phrase at `phrase` for translation column `index`, if present.
    pub fn phrase(&self, phrase: usize, index: usize) -> Option<&str> {
        self.phrases
            .get(phrase)?
            .get(index)?
            .as_ref()
            .map(|t| t.text.as_str())
    }
}
