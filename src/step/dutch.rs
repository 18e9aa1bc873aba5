//! Dutch steps.
//!
//! Regions are computed once over the folded, marked word and never
//! recomputed; step 2 leaves a note on the word for the `bar` rule of step 3.

use super::{Flow, Step};
use crate::{context::Context, lang::LangEntry, word::Word};

/// Consonants undoubled after a deletion.
const DOUBLES: &[char] = &['k', 'd', 't'];

/// Undoubled vowels of step 4.
const LONG_VOWELS: &[char] = &['a', 'e', 'o', 'u'];

/// A non-vowel that is not the end of `gem`.
fn valid_en_ending(stem: &[char], entry: &LangEntry) -> bool {
    match stem {
        [.., 'g', 'e', 'm'] => false,
        [.., last] => !entry.is_vowel(*last),
        [] => false,
    }
}

/// A non-vowel other than `j`.
fn valid_s_ending(stem: &[char], entry: &LangEntry) -> bool {
    stem.last()
        .is_some_and(|&c| c != 'j' && !entry.is_vowel(c))
}

/// Delete `en` at `i` when it sits in R1 after a valid en-ending, then
/// undouble.
fn delete_en(word: &mut Word, i: usize, entry: &LangEntry) {
    if i >= word.r1() && valid_en_ending(word.head(i), entry) {
        word.truncate(i);
        word.undouble(DOUBLES);
    }
}

/// Delete a final `e` in R1 preceded by a non-vowel.
fn delete_e(word: &mut Word, entry: &LangEntry) -> bool {
    let Some(i) = word.len().checked_sub(1) else {
        return false;
    };
    let preceded_by_consonant = word.before(i).is_some_and(|c| !entry.is_vowel(c));
    if i >= word.r1() && word.last() == Some('e') && preceded_by_consonant {
        word.truncate(i);
        return true;
    }
    false
}

/// `-heden`, `-en(e)`, `-s(e)`.
pub struct Step1;

impl Step for Step1 {
    fn name(&self) -> &'static str {
        "step1"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        let entry = &ctx.lang_entry;

        if let Some(i) = word.suffix_pos("heden") {
            if i >= word.r1() {
                word.replace_from(i, "heid");
            }
            return Flow::Continue;
        }

        if let Some((i, _)) = word.first_suffix(&["ene", "en"]) {
            delete_en(word, i, entry);
            return Flow::Continue;
        }

        if let Some((i, _)) = word.first_suffix(&["se", "s"])
            && i >= word.r1()
            && valid_s_ending(word.head(i), entry)
        {
            word.truncate(i);
        }
        Flow::Continue
    }
}

/// Final `e`.
pub struct Step2;

impl Step for Step2 {
    fn name(&self) -> &'static str {
        "step2"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        word.e_removed = delete_e(word, &ctx.lang_entry);
        if word.e_removed {
            word.undouble(DOUBLES);
        }
        Flow::Continue
    }
}

/// `-heid`, with a preceding `en` treated as in step 1.
pub struct Step3a;

impl Step for Step3a {
    fn name(&self) -> &'static str {
        "step3a"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        if let Some(i) = word.suffix_pos("heid")
            && i >= word.r2()
            && word.before(i) != Some('c')
        {
            word.truncate(i);
            if let Some(j) = word.suffix_pos("en") {
                delete_en(word, j, &ctx.lang_entry);
            }
        }
        Flow::Continue
    }
}

/// `-end`/`-ing`, `-ig`, `-lijk`, `-baar`, `-bar`; first match wins.
pub struct Step3b;

impl Step for Step3b {
    fn name(&self) -> &'static str {
        "step3b"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        let entry = &ctx.lang_entry;

        if let Some((i, _)) = word.first_suffix(&["end", "ing"]) {
            if i >= word.r2() {
                word.truncate(i);
                match word.suffix_pos("ig") {
                    Some(j) if j >= word.r2() && word.before(j) != Some('e') => word.truncate(j),
                    _ => {
                        word.undouble(DOUBLES);
                    }
                }
            }
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("ig") {
            if i >= word.r2() && word.before(i) != Some('e') {
                word.truncate(i);
            }
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("lijk") {
            if i >= word.r2() {
                word.truncate(i);
                delete_e(word, entry);
                word.undouble(DOUBLES);
            }
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("baar") {
            if i >= word.r2() {
                word.truncate(i);
            }
            return Flow::Continue;
        }

        if let Some(i) = word.suffix_pos("bar")
            && word.e_removed
            && i >= word.r2()
        {
            word.truncate(i);
        }
        Flow::Continue
    }
}

/// Undouble the vowel of a final consonant + `aa/ee/oo/uu` + consonant
/// (maan -> man, brood -> brod).
pub struct Step4;

impl Step for Step4 {
    fn name(&self) -> &'static str {
        "step4"
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow {
        let entry = &ctx.lang_entry;
        if let [.., c, v1, v2, d] = *word.as_chars()
            && v1 == v2
            && LONG_VOWELS.contains(&v1)
            && !entry.is_vowel(c)
            && !entry.is_vowel(d)
            && d != 'I'
        {
            let len = word.len();
            word.remove(len - 2);
        }
        Flow::Continue
    }
}
