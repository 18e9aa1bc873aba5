// src/context.rs
// Language configuration for a stemmer instance. Tiny, Copy, and 'static only.

use crate::lang::{DEFAULT_LANG, LANG_TABLE, Lang, LangEntry};
use crate::stemmer::StemError;

/// Runtime context handed to every step.
///
/// Contains:
/// - `lang`: human identifier (for logging and error messages)
/// - `lang_entry`: the vowel set, tables and step list used in every hot path
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lang_entry: LangEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG).expect("default language not present in LANG_TABLE – this is a bug")
    }
}

impl Context {
    /// Create a context using the canonical static data for a language.
    #[inline]
    pub fn new(lang: Lang) -> Result<Self, StemError> {
        let lang_entry = Self::lookup(lang)?;
        Ok(Self { lang, lang_entry })
    }

    /// Create a context and allow the caller to mutate any field before use.
    #[inline]
    pub fn with_modified(lang: Lang, f: impl FnOnce(&mut LangEntry)) -> Result<Self, StemError> {
        let mut lang_entry = Self::lookup(lang)?;
        f(&mut lang_entry);
        Ok(Self { lang, lang_entry })
    }

    #[inline(always)]
    fn lookup(lang: Lang) -> Result<LangEntry, StemError> {
        LANG_TABLE
            .get(lang.code())
            .copied()
            .ok_or(StemError::UnsupportedLang(lang.code()))
    }
}
