//! English (Porter2) steps.
//!
//! Regions are computed once over the marked word and kept through step 1;
//! steps 2 to 5 recompute them over the word they receive.

use super::{Flow, Step};
use crate::{
    context::Context,
    lang::LangEntry,
    region::Regions,
    rule::{Region, SuffixRule, select},
    word::Word,
};

/// Consonants undoubled after an `-ed`/`-ing` removal.
const DOUBLES: &[char] = &['b', 'd', 'f', 'g', 'm', 'n', 'p', 'r', 't'];

/// Letters that may precede a deletable `li`.
const LI_ENDINGS: &[char] = &['c', 'd', 'e', 'g', 'h', 'k', 'm', 'n', 'r', 't'];

const POSSESSIVES: &[&str] = &["'s'", "'s", "'"];

const STEP1B_EED: &[SuffixRule] = &[
    SuffixRule::new("eed", "ee", Region::R1),
    SuffixRule::new("eedly", "ee", Region::R1),
];

const STEP1B_ING_ED: &[&str] = &["ingly", "edly", "ing", "ed"];

const STEP2: &[SuffixRule] = &[
    SuffixRule::new("fulness", "ful", Region::R1),
    SuffixRule::new("ousness", "ous", Region::R1),
    SuffixRule::new("iveness", "ive", Region::R1),
    SuffixRule::new("ational", "ate", Region::R1),
    SuffixRule::new("ization", "ize", Region::R1),
    SuffixRule::new("tional", "tion", Region::R1),
    SuffixRule::new("biliti", "ble", Region::R1),
    SuffixRule::new("lessli", "less", Region::R1),
    SuffixRule::new("fulli", "ful", Region::R1),
    SuffixRule::new("ousli", "ous", Region::R1),
    SuffixRule::new("iviti", "ive", Region::R1),
    SuffixRule::new("alism", "al", Region::R1),
    SuffixRule::new("ation", "ate", Region::R1),
    SuffixRule::new("entli", "ent", Region::R1),
    SuffixRule::new("aliti", "al", Region::R1),
    SuffixRule::new("enci", "ence", Region::R1),
    SuffixRule::new("anci", "ance", Region::R1),
    SuffixRule::new("abli", "able", Region::R1),
    SuffixRule::new("izer", "ize", Region::R1),
    SuffixRule::new("ator", "ate", Region::R1),
    SuffixRule::new("alli", "al", Region::R1),
    SuffixRule::new("bli", "ble", Region::R1),
];

const STEP3: &[SuffixRule] = &[
    SuffixRule::new("ational", "ate", Region::R1),
    SuffixRule::new("tional", "tion", Region::R1),
    SuffixRule::new("alize", "al", Region::R1),
    SuffixRule::new("icate", "ic", Region::R1),
    SuffixRule::new("iciti", "ic", Region::R1),
    SuffixRule::new("ical", "ic", Region::R1),
    SuffixRule::delete("ful", Region::R1),
    SuffixRule::delete("ness", Region::R1),
];

const STEP4: &[SuffixRule] = &[
    SuffixRule::delete("ement", Region::R2),
    SuffixRule::delete("able", Region::R2),
    SuffixRule::delete("ible", Region::R2),
    SuffixRule::delete("ance", Region::R2),
    SuffixRule::delete("ence", Region::R2),
    SuffixRule::delete("ment", Region::R2),
    SuffixRule::delete("ant", Region::R2),
    SuffixRule::delete("ent", Region::R2),
    SuffixRule::delete("ism", Region::R2),
    SuffixRule::delete("ate", Region::R2),
    SuffixRule::delete("iti", Region::R2),
    SuffixRule::delete("ous", Region::R2),
    SuffixRule::delete("ive", Region::R2),
    SuffixRule::delete("ize", Region::R2),
    SuffixRule::delete("al", Region::R2),
    SuffixRule::delete("er", Region::R2),
    SuffixRule::delete("ic", Region::R2),
];

/// Non-vowel, vowel, non-vowel at the end, the last one not `w`, `x` or a
/// marked `Y`.
pub fn ends_with_short_syllable(chars: &[char], entry: &LangEntry) -> bool {
    match chars {
        [.., a, b, c] => {
            !entry.is_vowel(*a)
                && entry.is_vowel(*b)
                && !entry.is_vowel(*c)
                && !matches!(c, 'w' | 'x' | 'Y')
        }
        _ => false,
    }
}

/// R1 is empty and the word is a short syllable (or vowel + non-vowel).
pub fn is_short_word(chars: &[char], entry: &LangEntry) -> bool {
    if Regions::compute(chars, entry).r1 != chars.len() {
        return false;
    }
    match chars {
        [a, b] => entry.is_vowel(*a) && !entry.is_vowel(*b),
        _ => ends_with_short_syllable(chars, entry),
    }
}

#[inline]
fn has_vowel(chars: &[char], entry: &LangEntry) -> bool {
    chars.iter().any(|&c| entry.is_vowel(c))
}

/// Possessive apostrophes.
pub struct Step0;

impl Step for Step0 {
    fn name(&self) -> &'static str {
        "step0"
    }

    fn apply(&self, word: &mut Word, _ctx: &Context) -> Flow {
        for suffix in POSSESSIVES {
            if let Some(i) = word.suffix_pos(suffix) {
                word.truncate(i);
            }
        }
        Flow::Continue
    }
}

/// Plurals and third-person endings.
pub struct Step1a;

impl Step for Step1a {
    fn name(&self) -> &'static str {
        "step1a"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        if let Some(i) = word.suffix_pos("sses") {
            word.replace_from(i, "ss");
            return Flow::Continue;
        }

        // ties -> tie, cries -> cri
        if let Some((i, _)) = word.first_suffix(&["ied", "ies"]) {
            word.replace_from(i, if i > 1 { "i" } else { "ie" });
            return Flow::Continue;
        }

        if word.ends_with("us") || word.ends_with("ss") {
            return Flow::Continue;
        }

        // gas -> gas, gaps -> gap, kiwis -> kiwi
        if let Some(i) = word.suffix_pos("s")
            && i >= 2
            && has_vowel(word.head(i - 1), &ctx.lang_entry)
        {
            word.truncate(i);
        }
        Flow::Continue
    }
}

/// Words that must leave the pipeline untouched once step 1a is done.
pub struct Invariant;

impl Step for Invariant {
    fn name(&self) -> &'static str {
        "invariant"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        if ctx.lang_entry.is_invariant(word.as_chars()) {
            Flow::Done
        } else {
            Flow::Continue
        }
    }
}

/// `-eed`, `-ed`, `-ing` and their `-ly` forms.
pub struct Step1b;

impl Step for Step1b {
    fn name(&self) -> &'static str {
        "step1b"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        if let Some(sel) = select(word, STEP1B_EED) {
            sel.apply(word);
            return Flow::Continue;
        }

        let entry = &ctx.lang_entry;
        let Some((i, _)) = word.first_suffix(STEP1B_ING_ED) else {
            return Flow::Continue;
        };
        if !has_vowel(word.head(i), entry) {
            return Flow::Continue;
        }
        word.truncate(i);

        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            word.push('e');
        } else if !word.undouble(DOUBLES) && is_short_word(word.as_chars(), entry) {
            word.push('e');
        }
        Flow::Continue
    }
}

/// Final `y` after a consonant becomes `i` (cry -> cri, by -> by, say -> say).
pub struct Step1c;

impl Step for Step1c {
    fn name(&self) -> &'static str {
        "step1c"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        let len = word.len();
        if len > 2
            && matches!(word.last(), Some('y' | 'Y'))
            && !word.is_vowel_at(len - 2, &ctx.lang_entry)
        {
            word.set_last('i');
        }
        Flow::Continue
    }
}

pub struct Step2;

impl Step for Step2 {
    fn name(&self) -> &'static str {
        "step2"
    }

    fn refresh_regions(&self) -> bool {
        true
    }

    fn apply(&self, word: &mut Word, _ctx: &Context) -> Flow {
        if let Some(sel) = select(word, STEP2) {
            sel.apply(word);
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("ogi")
            && i >= word.r1()
        {
            if word.before(i) == Some('l') {
                word.replace_from(i, "og");
            }
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("li")
            && i >= word.r1()
            && word.before(i).is_some_and(|c| LI_ENDINGS.contains(&c))
        {
            word.truncate(i);
        }
        Flow::Continue
    }
}

pub struct Step3;

impl Step for Step3 {
    fn name(&self) -> &'static str {
        "step3"
    }

    fn refresh_regions(&self) -> bool {
        true
    }

    fn apply(&self, word: &mut Word, _ctx: &Context) -> Flow {
        if let Some(sel) = select(word, STEP3) {
            sel.apply(word);
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("ative")
            && i >= word.r2()
        {
            word.truncate(i);
        }
        Flow::Continue
    }
}

pub struct Step4;

impl Step for Step4 {
    fn name(&self) -> &'static str {
        "step4"
    }

    fn refresh_regions(&self) -> bool {
        true
    }

    fn apply(&self, word: &mut Word, _ctx: &Context) -> Flow {
        if let Some(sel) = select(word, STEP4) {
            sel.apply(word);
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("ion")
            && i >= word.r2()
            && matches!(word.before(i), Some('s' | 't'))
        {
            word.truncate(i);
        }
        Flow::Continue
    }
}

/// Final `e` and `ll`.
pub struct Step5;

impl Step for Step5 {
    fn name(&self) -> &'static str {
        "step5"
    }

    fn refresh_regions(&self) -> bool {
        true
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        let len = word.len();
        if len > 1 && word.last() == Some('e') {
            let i = len - 1;
            if i >= word.r2()
                || (i >= word.r1()
                    && i >= 3
                    && !ends_with_short_syllable(word.head(i), &ctx.lang_entry))
            {
                word.truncate(i);
            }
            return Flow::Continue;
        }

        if len > 2 && len - 1 >= word.r2() && word.ends_with("ll") {
            word.truncate(len - 1);
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENG, context::Context};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn short_syllables() {
        let ctx = Context::new(ENG).unwrap();
        let e = &ctx.lang_entry;
        assert!(ends_with_short_syllable(&chars("rap"), e));
        assert!(ends_with_short_syllable(&chars("entrap"), e));
        assert!(!ends_with_short_syllable(&chars("uproot"), e));
        assert!(!ends_with_short_syllable(&chars("bestow"), e));
        assert!(!ends_with_short_syllable(&chars("box"), e));
        assert!(!ends_with_short_syllable(&chars("saY"), e));
        assert!(!ends_with_short_syllable(&chars("ap"), e));
    }

    #[test]
    fn short_words() {
        let ctx = Context::new(ENG).unwrap();
        let e = &ctx.lang_entry;
        assert!(is_short_word(&chars("bed"), e));
        assert!(is_short_word(&chars("shed"), e));
        assert!(is_short_word(&chars("shred"), e));
        assert!(is_short_word(&chars("at"), e));
        assert!(!is_short_word(&chars("bead"), e));
        assert!(!is_short_word(&chars("embed"), e));
        assert!(!is_short_word(&chars("beds"), e));
    }

    fn run(step: &dyn Step, input: &str) -> String {
        let ctx = Context::new(ENG).unwrap();
        let mut word = Word::prepare(input, &ctx.lang_entry);
        if step.refresh_regions() {
            word.refresh_regions(&ctx.lang_entry);
        }
        step.apply(&mut word, &ctx);
        word.finish(&ctx.lang_entry)
    }

    #[test]
    fn step0_strips_possessives() {
        assert_eq!(run(&Step0, "dog's"), "dog");
        assert_eq!(run(&Step0, "dogs'"), "dogs");
        assert_eq!(run(&Step0, "dog's'"), "dog");
        assert_eq!(run(&Step0, "dog"), "dog");
    }

    #[test]
    fn step1a_plurals() {
        assert_eq!(run(&Step1a, "caresses"), "caress");
        assert_eq!(run(&Step1a, "ponies"), "poni");
        assert_eq!(run(&Step1a, "ties"), "tie");
        assert_eq!(run(&Step1a, "cries"), "cri");
        assert_eq!(run(&Step1a, "caress"), "caress");
        assert_eq!(run(&Step1a, "bus"), "bus");
        assert_eq!(run(&Step1a, "gas"), "gas");
        assert_eq!(run(&Step1a, "this"), "this");
        assert_eq!(run(&Step1a, "gaps"), "gap");
        assert_eq!(run(&Step1a, "kiwis"), "kiwi");
    }

    #[test]
    fn invariant_matches_whole_buffer() {
        let ctx = Context::new(ENG).unwrap();
        let e = &ctx.lang_entry;
        assert!(e.is_invariant(&chars("exceed")));
        assert!(e.is_invariant(&chars("herring")));
        assert!(!e.is_invariant(&chars("exceeds")));
        assert!(!e.is_invariant(&chars("ceed")));
        assert!(!e.is_invariant(&[]));

        let mut word = Word::prepare("succeed", e);
        assert_eq!(Invariant.apply(&mut word, &ctx), Flow::Done);
        let mut word = Word::prepare("succeeds", e);
        assert_eq!(Invariant.apply(&mut word, &ctx), Flow::Continue);
    }

    #[test]
    fn step1b_endings() {
        assert_eq!(run(&Step1b, "agreed"), "agree");
        assert_eq!(run(&Step1b, "feed"), "feed");
        assert_eq!(run(&Step1b, "luxuriated"), "luxuriate");
        assert_eq!(run(&Step1b, "hopping"), "hop");
        assert_eq!(run(&Step1b, "hoping"), "hope");
        assert_eq!(run(&Step1b, "filing"), "file");
        assert_eq!(run(&Step1b, "sing"), "sing");
        assert_eq!(run(&Step1b, "falling"), "fall");
    }

    #[test]
    fn step1c_y_to_i() {
        assert_eq!(run(&Step1c, "cry"), "cri");
        assert_eq!(run(&Step1c, "by"), "by");
        assert_eq!(run(&Step1c, "say"), "say");
    }

    #[test]
    fn step2_special_suffixes() {
        assert_eq!(run(&Step2, "archaeologi"), "archaeolog");
        assert_eq!(run(&Step2, "analogi"), "analog");
        assert_eq!(run(&Step2, "demagogi"), "demagogi");
        assert_eq!(run(&Step2, "convincingli"), "convincing");
        assert_eq!(run(&Step2, "relational"), "relate");
    }

    #[test]
    fn step5_final_e_and_ll() {
        assert_eq!(run(&Step5, "agree"), "agre");
        assert_eq!(run(&Step5, "hope"), "hope");
        assert_eq!(run(&Step5, "controll"), "control");
    }
}
