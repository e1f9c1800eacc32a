//! Word-level Markov chain text generation library.
//!
//! This crate builds a first-order Markov chain over the words of a corpus
//! and samples short pseudo-random sentences ("tweets") from it:
//! - Whitespace tokenization of a corpus file, with an optional token limit
//! - A first-seen-ordered dictionary of words and their weighted successors
//! - Uniform start-word sampling and weighted successor sampling
//! - Bounded sentence generation, sequential or parallel, from a seed
//!
//! Generation only ever reads the model, so a single built `ChainModel`
//! can be shared across threads.

/// Chain model, samplers and sentence generation.
pub mod model;

/// Crate error type and `Result` alias.
pub mod error;

/// Corpus reading and tokenization.
pub mod io;

pub use error::{Error, Result};
pub use model::chain::{ChainBuilder, ChainModel, ChainStats};
pub use model::config::{BuildOptions, GenerationConfig};
pub use model::generator::{Sentence, SentenceGenerator, Termination};
pub use model::word::{Word, WordId};
