//! Per-call word buffer.
//!
//! A [`Word`] owns the characters of the word being stemmed, the regions last
//! computed over them and the small amount of state steps hand to each other.
//! All look-behind accessors return `Option` so a rule that peeks before the
//! start of the buffer simply fails its condition.

use crate::lang::{LangEntry, MarkRule};
use crate::region::Regions;
use smallvec::SmallVec;
use std::fmt;

pub type WordBuf = SmallVec<[char; 24]>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    chars: WordBuf,
    pub regions: Regions,
    /// Set by the Dutch step 2 when it deleted a final `e`.
    pub e_removed: bool,
}

impl Word {
    /// Normalizer: fold, strip a leading apostrophe where the language asks
    /// for it, then mark glides. `lowered` must already be lowercase.
    pub fn prepare(lowered: &str, entry: &LangEntry) -> Self {
        let mut chars: WordBuf = lowered.chars().map(|c| entry.fold_char(c)).collect();
        if entry.strip_leading_apostrophe && chars.first() == Some(&'\'') {
            chars.remove(0);
        }
        let mut word = Self {
            chars,
            ..Self::default()
        };
        word.mark(entry);
        word.refresh_regions(entry);
        word
    }

    fn mark(&mut self, entry: &LangEntry) {
        for rule in entry.marks {
            match *rule {
                MarkRule::Initial(c) => {
                    if let Some(first) = self.chars.first_mut()
                        && *first == c
                    {
                        *first = c.to_ascii_uppercase();
                    }
                }
                MarkRule::AfterVowel(c) => {
                    for i in 1..self.chars.len() {
                        if self.chars[i] == c && entry.is_vowel(self.chars[i - 1]) {
                            self.chars[i] = c.to_ascii_uppercase();
                        }
                    }
                }
                MarkRule::BetweenVowels(c) => {
                    for i in 1..self.chars.len().saturating_sub(1) {
                        if self.chars[i] == c
                            && entry.is_vowel(self.chars[i - 1])
                            && entry.is_vowel(self.chars[i + 1])
                        {
                            self.chars[i] = c.to_ascii_uppercase();
                        }
                    }
                }
            }
        }
    }

    /// Post-processor: lower every marked glide and hand back the stem.
    pub fn finish(self, entry: &LangEntry) -> String {
        self.chars
            .into_iter()
            .map(|c| {
                if entry.is_marker(c) {
                    c.to_ascii_lowercase()
                } else {
                    c
                }
            })
            .collect()
    }

    #[inline]
    pub fn refresh_regions(&mut self, entry: &LangEntry) {
        self.regions = Regions::compute(&self.chars, entry);
    }

    #[inline(always)]
    pub fn r1(&self) -> usize {
        self.regions.r1
    }

    #[inline(always)]
    pub fn r2(&self) -> usize {
        self.regions.r2
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline(always)]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// View of the first `end` characters.
    #[inline(always)]
    pub fn head(&self, end: usize) -> &[char] {
        &self.chars[..end.min(self.chars.len())]
    }

    #[inline(always)]
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// The character immediately before position `i`.
    #[inline(always)]
    pub fn before(&self, i: usize) -> Option<char> {
        i.checked_sub(1).and_then(|j| self.char_at(j))
    }

    #[inline(always)]
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    #[inline]
    pub fn is_vowel_at(&self, i: usize, entry: &LangEntry) -> bool {
        self.char_at(i).is_some_and(|c| entry.is_vowel(c))
    }

    /// Start of `suffix` if the word ends with it.
    #[inline]
    pub fn suffix_pos(&self, suffix: &str) -> Option<usize> {
        suffix_pos(&self.chars, suffix)
    }

    /// First of `suffixes` the word ends with, and where it starts.
    #[inline]
    pub fn first_suffix<'s>(&self, suffixes: &[&'s str]) -> Option<(usize, &'s str)> {
        suffixes
            .iter()
            .find_map(|&s| self.suffix_pos(s).map(|i| (i, s)))
    }

    #[inline(always)]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.suffix_pos(suffix).is_some()
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.chars.truncate(len);
    }

    /// Drop everything from `at` and append `replacement`.
    #[inline]
    pub fn replace_from(&mut self, at: usize, replacement: &str) {
        self.chars.truncate(at);
        self.chars.extend(replacement.chars());
    }

    #[inline]
    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    #[inline]
    pub fn set_last(&mut self, c: char) {
        if let Some(last) = self.chars.last_mut() {
            *last = c;
        }
    }

    /// Remove the character at `i`, shifting the tail left.
    #[inline]
    pub fn remove(&mut self, i: usize) {
        if i < self.chars.len() {
            self.chars.remove(i);
        }
    }

    /// Does the word end in a doubled character taken from `set`?
    #[inline]
    pub fn ends_with_double(&self, set: &[char]) -> bool {
        match self.chars.as_slice() {
            [.., a, b] => a == b && set.contains(b),
            _ => false,
        }
    }

    /// Drop the last character if the word ends in a doubled one from `set`.
    #[inline]
    pub fn undouble(&mut self, set: &[char]) -> bool {
        let doubled = self.ends_with_double(set);
        if doubled {
            self.chars.pop();
        }
        doubled
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

/// Start of `suffix` inside `chars`, if `chars` ends with it.
pub fn suffix_pos(chars: &[char], suffix: &str) -> Option<usize> {
    let mut i = chars.len();
    for c in suffix.chars().rev() {
        i = i.checked_sub(1)?;
        if chars[i] != c {
            return None;
        }
    }
    Some(i)
}
