//! R1 / R2 computation.
//!
//! R1 is the position just after the first non-vowel that follows a vowel
//! (or the end of the word); R2 is the same scan repeated from R1. Both are
//! char offsets into the word buffer and always satisfy
//! `0 <= r1 <= r2 <= len`.

use crate::lang::LangEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

impl Regions {
    pub fn compute(chars: &[char], entry: &LangEntry) -> Self {
        let r1 = prefix_r1(chars, entry).unwrap_or_else(|| scan(chars, entry));
        let r2 = r1 + scan(&chars[r1..], entry);
        let r1 = match entry.r1_floor {
            Some(floor) if r1 < floor => {
                if chars.len() <= floor {
                    chars.len()
                } else {
                    floor
                }
            }
            _ => r1,
        };
        Self { r1, r2 }
    }
}

/// Position after the first vowel/non-vowel transition, or `chars.len()`.
#[inline]
fn scan(chars: &[char], entry: &LangEntry) -> usize {
    chars
        .windows(2)
        .position(|w| entry.is_vowel(w[0]) && !entry.is_vowel(w[1]))
        .map_or(chars.len(), |i| i + 2)
}

#[inline]
fn prefix_r1(chars: &[char], entry: &LangEntry) -> Option<usize> {
    entry.region_prefixes.iter().find_map(|prefix| {
        let n = prefix.chars().count();
        (chars.len() >= n && chars.iter().copied().take(n).eq(prefix.chars())).then_some(n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENG, NLD, context::Context};

    fn regions(word: &str, ctx: &Context) -> (usize, usize) {
        let chars: Vec<char> = word.chars().collect();
        let r = Regions::compute(&chars, &ctx.lang_entry);
        (r.r1, r.r2)
    }

    #[test]
    fn english_reference_words() {
        let ctx = Context::new(ENG).unwrap();
        // beautiful: R1 = "iful", R2 = "ul"
        assert_eq!(regions("beautiful", &ctx), (5, 7));
        // beauty: R1 = "y", R2 empty
        assert_eq!(regions("beauty", &ctx), (5, 6));
        assert_eq!(regions("beau", &ctx), (4, 4));
        // animadversion: R1 = "imadversion", R2 = "adversion"
        assert_eq!(regions("animadversion", &ctx), (2, 4));
        // sprinkled: R1 = "kled", R2 empty
        assert_eq!(regions("sprinkled", &ctx), (5, 9));
        // eucharist: R1 = "harist", R2 = "ist"
        assert_eq!(regions("eucharist", &ctx), (3, 6));
    }

    #[test]
    fn english_prefix_exceptions_pin_r1() {
        let ctx = Context::new(ENG).unwrap();
        assert_eq!(regions("generate", &ctx), (5, 7));
        assert_eq!(regions("communism", &ctx), (6, 8));
        assert_eq!(regions("arsenal", &ctx), (5, 7));
        // "gene" is shorter than the prefix, ordinary scan applies
        assert_eq!(regions("gene", &ctx), (3, 4));
    }

    #[test]
    fn marked_glide_is_a_consonant() {
        let ctx = Context::new(ENG).unwrap();
        assert_eq!(regions("saYing", &ctx), (3, 5));
        assert_eq!(regions("saying", &ctx), (5, 6));
    }

    #[test]
    fn dutch_r1_floor() {
        let ctx = Context::new(NLD).unwrap();
        // raw R1 would be 2
        assert_eq!(regions("opheffen", &ctx), (3, 5));
        // shorter than four characters: R1 is the whole word
        assert_eq!(regions("abc", &ctx), (3, 3));
        assert_eq!(regions("vliegtuigen", &ctx), (5, 9));
    }

    #[test]
    fn empty_word() {
        let ctx = Context::new(NLD).unwrap();
        assert_eq!(regions("", &ctx), (0, 0));
        let ctx = Context::new(ENG).unwrap();
        assert_eq!(regions("", &ctx), (0, 0));
    }
}
