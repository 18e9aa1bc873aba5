// src/pipeline.rs
use crate::{
    context::Context,
    step::{Flow, Step},
    word::Word,
};
use std::fmt;

/// The ordered steps of one language, fixed at compile time.
#[derive(Clone, Copy)]
pub struct Pipeline {
    steps: &'static [&'static dyn Step],
}

impl Pipeline {
    pub const fn new(steps: &'static [&'static dyn Step]) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &'static [&'static dyn Step] {
        self.steps
    }

    pub fn run(&self, word: &mut Word, ctx: &Context) {
        for step in self.steps {
            if step.refresh_regions() {
                word.refresh_regions(&ctx.lang_entry);
            }

            let before: Option<String> = log::log_enabled!(log::Level::Trace)
                .then(|| word.as_chars().iter().collect());
            let flow = step.apply(word, ctx);
            if let Some(before) = before {
                let after: String = word.as_chars().iter().collect();
                if before != after {
                    log::trace!("[{}] {}: {before} -> {after}", ctx.lang.code(), step.name());
                }
            }

            if flow == Flow::Done {
                log::trace!("[{}] {}: done", ctx.lang.code(), step.name());
                break;
            }
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|s| s.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ENG, NLD, context::Context, word::Word};

    fn names(ctx: &Context) -> Vec<&'static str> {
        ctx.lang_entry.pipeline.steps().iter().map(|s| s.name()).collect()
    }

    #[test]
    fn step_order() {
        let eng = Context::new(ENG).unwrap();
        assert_eq!(names(&eng).first(), Some(&"step0"));
        assert_eq!(names(&eng).last(), Some(&"step5"));
        assert_eq!(names(&Context::new(NLD).unwrap()).len(), 5);
    }

    #[test]
    fn invariant_word_stops_the_pipeline() {
        let ctx = Context::new(ENG).unwrap();
        let mut word = Word::prepare("proceed", &ctx.lang_entry);
        ctx.lang_entry.pipeline.run(&mut word, &ctx);
        assert_eq!(word.finish(&ctx.lang_entry), "proceed");
    }
}
