use crate::lang::{FoldMap, Lang, LangEntry, MarkRule};
use crate::pipeline::Pipeline;
use crate::step::{Step, dutch, english};

use paste::paste;
use phf::{Map, Set, phf_map, phf_set};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        vowels: [ $($v:expr),* $(,)? ],
        fold: [ $($ffrom:expr => $fto:expr),* $(,)? ],
        marks: [ $($mark:expr),* $(,)? ],
        region_prefixes: [ $($prefix:literal),* $(,)? ],
        r1_floor: $floor:expr,
        min_len: $min_len:expr,
        strip_apostrophe: $apos:expr,
        irregular: $irregular:path,
        invariant: $invariant:path,
        steps: [ $($step:expr),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static VOWELS: &[char] = &[$($v),*];

                    pub static FOLD: &[FoldMap] = &[
                        $(FoldMap { from: $ffrom, to: $fto }),*
                    ];

                    pub static MARKS: &[MarkRule] = &[$($mark),*];

                    pub static REGION_PREFIXES: &[&str] = &[$($prefix),*];

                    pub const R1_FLOOR: Option<usize> = $floor;
                    pub const MIN_LEN: usize = $min_len;
                    pub const STRIP_APOSTROPHE: bool = $apos;

                    pub static STEPS: &[&dyn Step] = &[$($step),*];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        vowels: [<$code:lower _data>]::VOWELS,
                        fold_map: [<$code:lower _data>]::FOLD,
                        marks: [<$code:lower _data>]::MARKS,
                        region_prefixes: [<$code:lower _data>]::REGION_PREFIXES,
                        r1_floor: [<$code:lower _data>]::R1_FLOOR,
                        min_len: [<$code:lower _data>]::MIN_LEN,
                        strip_leading_apostrophe: [<$code:lower _data>]::STRIP_APOSTROPHE,
                        irregular: &$irregular,
                        invariant: &$invariant,
                        pipeline: Pipeline::new([<$code:lower _data>]::STEPS),
                    }
                ),*
            };
        }

        static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Every language with a stemmer, in declaration order.
        pub fn all_langs() -> &'static [Lang] {
            ALL_LANGS
        }

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Exception tables
// ---------------------------------------------------------------------------

/// Irregular English forms, looked up before anything else runs.
static ENG_IRREGULAR: Map<&'static str, &'static str> = phf_map! {
    // special changes
    "skis" => "ski",
    "skies" => "sky",
    "dying" => "die",
    "lying" => "lie",
    "tying" => "tie",
    // special -LY cases
    "idly" => "idl",
    "gently" => "gentl",
    "ugly" => "ugli",
    "early" => "earli",
    "only" => "onli",
    "singly" => "singl",
    // invariant forms
    "sky" => "sky",
    "news" => "news",
    "howe" => "howe",
    // not plural forms
    "atlas" => "atlas",
    "cosmos" => "cosmos",
    "bias" => "bias",
    "andes" => "andes",
};

/// English words left untouched once step 1a is done.
static ENG_INVARIANT: Set<&'static str> = phf_set! {
    "inning",
    "outing",
    "canning",
    "herring",
    "earring",
    "proceed",
    "exceed",
    "succeed",
};

static NO_IRREGULAR: Map<&'static str, &'static str> = phf_map! {};
static NO_INVARIANT: Set<&'static str> = phf_set! {};

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "ENG", "English",
        vowels: ['a', 'e', 'i', 'o', 'u', 'y'],
        fold: [],
        marks: [MarkRule::Initial('y'), MarkRule::AfterVowel('y')],
        region_prefixes: ["gener", "commun", "arsen"],
        r1_floor: None,
        min_len: 3,
        strip_apostrophe: true,
        irregular: ENG_IRREGULAR,
        invariant: ENG_INVARIANT,
        steps: [
            &english::Step0,
            &english::Step1a,
            &english::Invariant,
            &english::Step1b,
            &english::Step1c,
            &english::Step2,
            &english::Step3,
            &english::Step4,
            &english::Step5,
        ],

    NLD, "NLD", "Dutch",
        vowels: ['a', 'e', 'i', 'o', 'u', 'y', 'è'],
        fold: [
            'ä' => 'a', 'ë' => 'e', 'ï' => 'i', 'ö' => 'o', 'ü' => 'u',
            'á' => 'a', 'é' => 'e', 'í' => 'i', 'ó' => 'o', 'ú' => 'u',
        ],
        marks: [
            MarkRule::Initial('y'),
            MarkRule::AfterVowel('y'),
            MarkRule::BetweenVowels('i'),
        ],
        region_prefixes: [],
        r1_floor: Some(3),
        min_len: 0,
        strip_apostrophe: false,
        irregular: NO_IRREGULAR,
        invariant: NO_INVARIANT,
        steps: [
            &dutch::Step1,
            &dutch::Step2,
            &dutch::Step3a,
            &dutch::Step3b,
            &dutch::Step4,
        ],
}
