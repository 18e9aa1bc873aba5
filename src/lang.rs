pub mod data;

use crate::pipeline::Pipeline;
use crate::ENG;
use phf::{Map, Set};

pub use data::{LANG_TABLE, all_langs, from_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Case-insensitive lookup by ISO 639-3 code (`"eng"`, `"NLD"`).
    #[inline]
    pub fn from_code(code: &str) -> Option<Lang> {
        from_code(code)
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// Precomposed character folded to its base form before stemming.
#[derive(Clone, Copy, Debug)]
pub struct FoldMap {
    pub from: char,
    pub to: char,
}

/// Glide characters that are re-classified as consonants for the duration of
/// one stem call. Marked characters are stored upper-cased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkRule {
    /// The first character of the word.
    Initial(char),
    /// Any occurrence directly after a vowel.
    AfterVowel(char),
    /// Any occurrence with a vowel on both sides.
    BetweenVowels(char),
}

impl MarkRule {
    #[inline(always)]
    pub const fn target(&self) -> char {
        match *self {
            MarkRule::Initial(c) | MarkRule::AfterVowel(c) | MarkRule::BetweenVowels(c) => c,
        }
    }
}

/// Everything one stemming variant needs, all `'static`.
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub vowels: &'static [char],
    pub fold_map: &'static [FoldMap],
    pub marks: &'static [MarkRule],
    /// Prefixes that pin R1 to their own length.
    pub region_prefixes: &'static [&'static str],
    /// Lower bound for R1; words shorter than `floor + 1` get `R1 = len`.
    pub r1_floor: Option<usize>,
    /// Words with fewer characters than this are returned lowercased.
    pub min_len: usize,
    pub strip_leading_apostrophe: bool,
    pub irregular: &'static Map<&'static str, &'static str>,
    pub invariant: &'static Set<&'static str>,
    pub pipeline: Pipeline,
}

impl LangEntry {
    #[inline(always)]
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    #[inline]
    pub fn fold_char(&self, c: char) -> char {
        self.fold_map
            .iter()
            .find(|m| m.from == c)
            .map(|m| m.to)
            .unwrap_or(c)
    }

    #[inline]
    pub fn is_marker(&self, c: char) -> bool {
        self.marks
            .iter()
            .any(|m| m.target().to_ascii_uppercase() == c)
    }

    #[inline]
    pub fn irregular_stem(&self, word: &str) -> Option<&'static str> {
        self.irregular.get(word).copied()
    }

    /// Whether `word` is one of the invariant forms. Compares chars in place.
    #[inline]
    pub fn is_invariant(&self, word: &[char]) -> bool {
        self.invariant
            .iter()
            .any(|w| w.chars().eq(word.iter().copied()))
    }
}
