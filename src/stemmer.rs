use crate::{
    context::Context,
    lang::{DEFAULT_LANG, Lang, LangEntry},
    word::Word,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StemError {
    #[error("no stemmer for language `{0}`")]
    UnsupportedLang(&'static str),
    #[error("unknown language code `{0}`")]
    UnknownLangCode(String),
}

/// Anything that reduces a word to its stem.
pub trait Stemmer: Send + Sync {
    /// Human-readable name – used in logs and reports.
    fn name(&self) -> &'static str;

    /// Stem a single word. Total: any input gives a deterministic result.
    fn stem(&self, word: &str) -> String;
}

/// Rule-based stemmer for one language.
///
/// ```
/// use stemmy::{ENG, NLD, Stemmer, Stemmy};
///
/// let eng = Stemmy::new(ENG).unwrap();
/// assert_eq!(eng.stem("Caresses"), "caress");
///
/// let nld = Stemmy::new(NLD).unwrap();
/// assert_eq!(nld.stem("vliegtuigen"), "vliegtuig");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stemmy {
    ctx: Context,
}

impl Stemmy {
    pub fn new(lang: Lang) -> Result<Self, StemError> {
        Self::builder().lang(lang).build()
    }

    pub fn builder() -> StemmyBuilder {
        StemmyBuilder::default()
    }

    #[inline(always)]
    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    #[inline(always)]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn stem(&self, word: &str) -> String {
        let entry = &self.ctx.lang_entry;
        let lowered = word.to_lowercase();

        if let Some(stem) = entry.irregular_stem(&lowered) {
            return stem.to_owned();
        }
        // Counted on the input: lowercasing may expand a char (`İ`).
        if word.chars().count() < entry.min_len {
            return lowered;
        }

        let mut word = Word::prepare(&lowered, entry);
        entry.pipeline.run(&mut word, &self.ctx);
        word.finish(entry)
    }
}

impl Default for Stemmy {
    fn default() -> Self {
        Self {
            ctx: Context::default(),
        }
    }
}

impl Stemmer for Stemmy {
    fn name(&self) -> &'static str {
        self.ctx.lang.name()
    }

    #[inline]
    fn stem(&self, word: &str) -> String {
        Stemmy::stem(self, word)
    }
}

/// Stem one word with the canonical rules of `lang`.
pub fn stem(lang: Lang, word: &str) -> Result<String, StemError> {
    Ok(Stemmy::new(lang)?.stem(word))
}

type Modifier = Box<dyn FnOnce(&mut LangEntry)>;

pub struct StemmyBuilder {
    lang: Lang,
    modify: Option<Modifier>,
}

impl Default for StemmyBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            modify: None,
        }
    }
}

impl StemmyBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Resolve the language from an ISO 639-3 code at build time.
    pub fn lang_code(self, code: &str) -> Result<Self, StemError> {
        let lang = Lang::from_code(code).ok_or_else(|| StemError::UnknownLangCode(code.into()))?;
        Ok(self.lang(lang))
    }

    /// Override any part of the language entry before the stemmer is built,
    /// e.g. the minimum word length or the exception tables.
    pub fn modify_lang(mut self, f: impl FnOnce(&mut LangEntry) + 'static) -> Self {
        self.modify = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Result<Stemmy, StemError> {
        let ctx = match self.modify {
            Some(f) => Context::with_modified(self.lang, f)?,
            None => Context::new(self.lang)?,
        };
        log::debug!(
            "stemmer for {} ({}) with steps {:?}",
            ctx.lang.name(),
            ctx.lang.code(),
            ctx.lang_entry.pipeline
        );
        Ok(Stemmy { ctx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENG, NLD};

    #[test]
    fn unsupported_language() {
        let klingon = Lang {
            code: "TLH",
            name: "Klingon",
        };
        assert_eq!(
            Stemmy::new(klingon).unwrap_err(),
            StemError::UnsupportedLang("TLH")
        );
    }

    #[test]
    fn lang_code_resolution() {
        let s = Stemmy::builder().lang_code("nld").unwrap().build().unwrap();
        assert_eq!(s.lang(), NLD);
        assert!(matches!(
            Stemmy::builder().lang_code("xx"),
            Err(StemError::UnknownLangCode(code)) if code == "xx"
        ));
    }

    #[test]
    fn modify_lang_overrides_guard() {
        let s = Stemmy::builder()
            .lang(ENG)
            .modify_lang(|e| e.min_len = 0)
            .build()
            .unwrap();
        // without the guard "as" reaches step 1a like any other word
        assert_eq!(s.stem("as"), "as");
        assert_eq!(s.stem("is"), "is");
        assert_eq!(Stemmy::new(ENG).unwrap().stem("Is"), "is");
    }

    #[test]
    fn length_guard_counts_input_chars() {
        let s = Stemmy::new(ENG).unwrap();
        // "İ" lowercases to two chars; the word is still only two long
        assert_eq!("İs".to_lowercase().chars().count(), 3);
        assert_eq!(s.stem("İs"), "İs".to_lowercase());
        assert_eq!(s.stem("ÀS"), "às");
    }

    #[test]
    fn default_is_english() {
        let s = Stemmy::default();
        assert_eq!(s.lang(), ENG);
        assert_eq!(Stemmer::name(&s), "English");
    }

    #[test]
    fn convenience_fn() {
        assert_eq!(stem(ENG, "running").unwrap(), "run");
        assert_eq!(stem(NLD, "katten").unwrap(), "kat");
    }
}
