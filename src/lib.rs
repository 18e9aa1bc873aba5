pub mod context;
pub mod fixture;
pub mod lang;
pub mod pipeline;
pub mod region;
pub mod rule;
pub mod step;
pub mod stemmer;
pub mod word;

pub use lang::Lang;
pub use lang::data::{ENG, NLD, all_langs};
pub use stemmer::{StemError, Stemmer, Stemmy, StemmyBuilder, stem};
