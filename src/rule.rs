//! Suffix rule tables.
//!
//! A step looks for the first rule whose suffix ends the word (the rule is
//! *selected*) and rewrites the word only if the suffix starts inside the
//! rule's region (the rule is *applied*). A selected rule ends the step either
//! way, which is why tables list longer suffixes first.

use crate::word::Word;

/// Minimum region a suffix must start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    R1,
    R2,
}

impl Region {
    #[inline(always)]
    pub fn contains(self, pos: usize, word: &Word) -> bool {
        match self {
            Region::R1 => pos >= word.r1(),
            Region::R2 => pos >= word.r2(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub region: Region,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, replacement: &'static str, region: Region) -> Self {
        Self {
            suffix,
            replacement,
            region,
        }
    }

    /// Shorthand for a rule that deletes its suffix.
    pub const fn delete(suffix: &'static str, region: Region) -> Self {
        Self::new(suffix, "", region)
    }
}

/// A rule whose suffix matched, and where.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'r> {
    pub pos: usize,
    pub rule: &'r SuffixRule,
}

impl Selection<'_> {
    /// Rewrite the word if the region allows it. Returns whether it did.
    #[inline]
    pub fn apply(self, word: &mut Word) -> bool {
        if !self.rule.region.contains(self.pos, word) {
            return false;
        }
        word.replace_from(self.pos, self.rule.replacement);
        true
    }
}

/// First rule in `rules` whose suffix ends `word`.
#[inline]
pub fn select<'r>(word: &Word, rules: &'r [SuffixRule]) -> Option<Selection<'r>> {
    rules.iter().find_map(|rule| {
        word.suffix_pos(rule.suffix)
            .map(|pos| Selection { pos, rule })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENG, context::Context};

    const RULES: &[SuffixRule] = &[
        SuffixRule::new("ational", "ate", Region::R1),
        SuffixRule::new("tional", "tion", Region::R1),
        SuffixRule::delete("al", Region::R2),
    ];

    fn word(s: &str) -> Word {
        let ctx = Context::new(ENG).unwrap();
        Word::prepare(s, &ctx.lang_entry)
    }

    #[test]
    fn selects_first_listed_match() {
        let w = word("relational");
        let sel = select(&w, RULES).unwrap();
        assert_eq!(sel.rule.suffix, "ational");
        assert_eq!(sel.pos, 3);
    }

    #[test]
    fn selection_without_application() {
        // "rational": R1 starts at 3, "ational" starts at 1
        let mut w = word("rational");
        let sel = select(&w, RULES).unwrap();
        assert_eq!(sel.rule.suffix, "ational");
        assert!(!sel.apply(&mut w));
        assert_eq!(w.as_chars().iter().collect::<String>(), "rational");
    }

    #[test]
    fn applies_replacement() {
        let mut w = word("conditional");
        let sel = select(&w, RULES).unwrap();
        assert_eq!(sel.rule.suffix, "tional");
        assert!(sel.apply(&mut w));
        assert_eq!(w.as_chars().iter().collect::<String>(), "condition");
    }

    #[test]
    fn region_boundaries_are_inclusive() {
        // relational: R1 = "ational" (3), R2 = "ional" (5)
        let w = word("relational");
        assert!(!Region::R1.contains(2, &w));
        assert!(Region::R1.contains(3, &w));
        assert!(!Region::R2.contains(4, &w));
        assert!(Region::R2.contains(5, &w));
        assert!(Region::R2.contains(w.len(), &w));
    }

    #[test]
    fn no_match() {
        let w = word("stem");
        assert!(select(&w, RULES).is_none());
    }
}
