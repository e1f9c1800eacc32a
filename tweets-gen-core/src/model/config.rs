use crate::error::{Error, Result};

/// Default number of words a sentence may add after its start word.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Default set of sentence-terminating marks.
pub const DEFAULT_TERMINATORS: &str = ".";

/// Parameters for building a `ChainModel` from a token stream.
///
/// # Invariants
/// - `terminators` is never empty once validated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
	/// Maximum number of tokens to ingest; `None` reads the whole corpus.
	pub max_tokens: Option<usize>,

	/// Characters that end a sentence when they are the last character of a token.
	pub terminators: Vec<char>,
}

impl Default for BuildOptions {
	fn default() -> Self {
		Self {
			max_tokens: None,
			terminators: DEFAULT_TERMINATORS.chars().collect(),
		}
	}
}

impl BuildOptions {
	/// Sets the token limit from a signed count; negative means unlimited.
	pub fn with_token_limit(mut self, limit: i64) -> Self {
		self.max_tokens = usize::try_from(limit).ok();
		self
	}

	/// Replaces the terminator set with the characters of `marks`.
	pub fn with_terminators(mut self, marks: &str) -> Self {
		self.terminators = marks.chars().collect();
		self
	}

	/// # Errors
	/// Returns an error if the terminator set is empty.
	pub fn validate(&self) -> Result<()> {
		if self.terminators.is_empty() {
			return Err(Error::InvalidConfig("at least one sentence terminator is required".to_owned()));
		}
		Ok(())
	}

	/// True if `text` ends in one of the terminators.
	pub fn ends_sentence(&self, text: &str) -> bool {
		text.chars().next_back().is_some_and(|c| self.terminators.contains(&c))
	}
}

/// Parameters controlling sentence generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
	/// Maximum number of words added after the start word.
	pub max_words: usize,

	/// Worker threads for parallel batches; `None` uses the number of CPUs.
	pub jobs: Option<usize>,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			max_words: DEFAULT_MAX_WORDS,
			jobs: None,
		}
	}
}

impl GenerationConfig {
	/// # Errors
	/// Returns an error if the word budget or the job count is zero.
	pub fn validate(&self) -> Result<()> {
		if self.max_words == 0 {
			return Err(Error::InvalidConfig("max_words must be at least 1".to_owned()));
		}
		if self.jobs == Some(0) {
			return Err(Error::InvalidConfig("jobs must be at least 1".to_owned()));
		}
		Ok(())
	}

	/// Number of worker threads to use for a batch of `count` sentences.
	pub fn effective_jobs(&self, count: usize) -> usize {
		let jobs = self.jobs.unwrap_or_else(num_cpus::get);
		jobs.min(count).max(1)
	}
}
