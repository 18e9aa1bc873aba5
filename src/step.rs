//! Core stemming step abstraction.
//!
//! A language's algorithm is an ordered list of [`Step`]s sharing one
//! [`Word`]. Each step rewrites the word at most once and then hands over to
//! the next one; the only way to leave early is [`Flow::Done`].
//!
//! Steps are unit structs referenced from the `'static` language table, so a
//! pipeline is nothing more than a slice of trait-object references.

pub mod dutch;
pub mod english;

use crate::context::Context;
use crate::word::Word;

/// What the pipeline does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Stop here; the current word is the stem.
    Done,
}

/// A single rewriting step.
pub trait Step: Send + Sync {
    /// Human-readable name – used for tracing.
    fn name(&self) -> &'static str;

    /// Whether R1/R2 must be recomputed over the current word before this
    /// step runs. The default keeps the regions from the previous step.
    #[inline]
    fn refresh_regions(&self) -> bool {
        false
    }

    fn apply(&self, word: &mut Word, ctx: &Context) -> Flow;
}
