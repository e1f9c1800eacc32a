use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::BuildOptions;
use super::dictionary::Dictionary;
use super::word::{Word, WordId};
use crate::error::Result;
use crate::io::{read_lines, tokenize};

/// First-order word chain built from a corpus.
///
/// # Responsibilities
/// - Own every distinct word of the corpus, in first-seen order
/// - Expose per-word successor weights for sampling
///
/// # Invariants
/// - Read-only once built; generation only takes `&ChainModel`
/// - `start_candidates` equals the number of words not ending a sentence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainModel {
	dictionary: Dictionary,
	tokens: usize,
	start_candidates: usize,
}

/// Summary of a built model, for logging and reporting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainStats {
	/// Tokens consumed from the corpus.
	pub tokens: usize,
	/// Distinct words.
	pub words: usize,
	/// Words that may start a sentence.
	pub start_candidates: usize,
	/// Distinct `(word, successor)` pairs.
	pub transitions: usize,
}

impl ChainModel {
	/// Builds a model from a token sequence.
	///
	/// Stops pulling tokens once `options.max_tokens` have been ingested.
	pub fn from_tokens<'a, I>(tokens: I, options: &BuildOptions) -> Result<Self>
	where
		I: IntoIterator<Item = &'a str>,
	{
		options.validate()?;
		let mut builder = ChainBuilder::new(options.clone());
		for token in tokens {
			if !builder.push(token) {
				break;
			}
		}
		Ok(builder.finish())
	}

	/// Reads a corpus file and builds a model from its whitespace-delimited tokens.
	///
	/// # Errors
	/// - Returns an error if the options are invalid.
	/// - Returns an error if the file cannot be opened or read; no model is produced.
	pub fn from_file<P: AsRef<Path>>(path: P, options: &BuildOptions) -> Result<Self> {
		options.validate()?;
		let lines = read_lines(&path)?;
		debug!("read {} lines from {}", lines.len(), path.as_ref().display());
		Self::from_tokens(tokenize(&lines), options)
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.dictionary.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dictionary.is_empty()
	}

	pub fn word(&self, id: WordId) -> Option<&Word> {
		self.dictionary.get(id)
	}

	/// Looks a word up by its exact text.
	pub fn lookup(&self, text: &str) -> Option<&Word> {
		self.dictionary.lookup(text).and_then(|id| self.dictionary.get(id))
	}

	/// Number of words that do not end a sentence and can therefore start one.
	pub fn start_candidates(&self) -> usize {
		self.start_candidates
	}

	pub fn stats(&self) -> ChainStats {
		ChainStats {
			tokens: self.tokens,
			words: self.dictionary.len(),
			start_candidates: self.start_candidates,
			transitions: self.dictionary.iter().map(|(_, w)| w.successors().len()).sum(),
		}
	}
}

/// Streaming builder for `ChainModel`.
///
/// Tokens are pushed in corpus order. A cursor remembers the previous word;
/// each push records a transition from it unless it ends a sentence, so a
/// terminated line never bridges into the next one.
#[derive(Debug)]
pub struct ChainBuilder {
	options: BuildOptions,
	dictionary: Dictionary,
	previous: Option<WordId>,
	tokens: usize,
}

impl ChainBuilder {
	pub fn new(options: BuildOptions) -> Self {
		Self {
			options,
			dictionary: Dictionary::new(),
			previous: None,
			tokens: 0,
		}
	}

	/// Number of tokens ingested so far.
	pub fn tokens(&self) -> usize {
		self.tokens
	}

	/// True once the token limit has been reached.
	pub fn is_full(&self) -> bool {
		self.options.max_tokens.is_some_and(|max| self.tokens >= max)
	}

	/// Ingests one token.
	///
	/// Returns `false`, leaving the model untouched, if the token limit was
	/// already reached.
	pub fn push(&mut self, token: &str) -> bool {
		if self.is_full() {
			return false;
		}

		let current = match self.dictionary.lookup(token) {
			Some(id) => {
				if let Some(word) = self.dictionary.get_mut(id) {
					word.add_occurrence();
				}
				id
			}
			None => {
				let ends_sentence = self.options.ends_sentence(token);
				self.dictionary.push(Word::new(token, ends_sentence))
			}
		};

		if let Some(previous) = self.previous {
			if let Some(word) = self.dictionary.get_mut(previous) {
				if !word.ends_sentence() {
					word.add_transition(current);
				}
			}
		}

		self.previous = Some(current);
		self.tokens += 1;
		true
	}

	/// Completes the build.
	pub fn finish(self) -> ChainModel {
		let start_candidates = self.dictionary.iter().filter(|(_, w)| !w.ends_sentence()).count();
		let model = ChainModel {
			dictionary: self.dictionary,
			tokens: self.tokens,
			start_candidates,
		};
		let stats = model.stats();
		debug!(
			"built chain: {} tokens, {} words, {} start candidates, {} transitions",
			stats.tokens, stats.words, stats.start_candidates, stats.transitions
		);
		model
	}
}
