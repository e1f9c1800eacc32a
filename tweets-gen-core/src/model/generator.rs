use std::fmt;
use std::sync::mpsc;
use std::thread;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::chain::ChainModel;
use super::config::GenerationConfig;
use super::sampler::{next_word, start_word};
use super::word::WordId;
use crate::error::Result;

/// Why a sentence stopped growing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
	/// The last word ends in a sentence terminator.
	Punctuation,
	/// The word budget was exhausted; no terminator is appended.
	Limit,
	/// The last word has no recorded successor.
	DeadEnd,
}

/// One generated sentence.
///
/// Always holds at least the start word. A single-word sentence is a valid
/// outcome: the start word may be a dead end.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
	pub words: Vec<String>,
	pub termination: Termination,
	/// Words added while extending; a closing terminator word is not counted.
	#[serde(rename = "extra_words")]
	added: usize,
}

impl Sentence {
	/// Number of words added after the start word, excluding a closing
	/// terminator word. This is the counter checked against the word budget.
	pub fn extra_words(&self) -> usize {
		self.added
	}
}

impl fmt::Display for Sentence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.words.join(" "))
	}
}

/// Generates sentences from a built `ChainModel`.
///
/// # Responsibilities
/// - Draw a start word, then successors, until a terminator, a dead end or
///   the word budget stops the sentence
/// - Produce batches of sentences reproducibly from a seed, sequentially or
///   across worker threads
#[derive(Debug, Clone, Copy)]
pub struct SentenceGenerator<'m> {
	model: &'m ChainModel,
	max_words: usize,
}

impl<'m> SentenceGenerator<'m> {
	/// Creates a generator over `model`.
	///
	/// # Errors
	/// Returns an error if `config` fails validation.
	pub fn new(model: &'m ChainModel, config: &GenerationConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { model, max_words: config.max_words })
	}

	/// Generates one sentence using `rng`.
	///
	/// # Errors
	/// Returns `Error::DegenerateModel` if the model has no possible start word.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sentence> {
		let mut current = start_word(self.model, rng)?;
		let mut words = vec![self.text(current)];

		let mut added = 0;
		let termination = loop {
			if added >= self.max_words {
				break Termination::Limit;
			}
			let Some(word) = self.model.word(current) else {
				break Termination::DeadEnd;
			};
			let Some(next) = next_word(word, rng) else {
				break Termination::DeadEnd;
			};

			words.push(self.text(next));
			if self.model.word(next).is_some_and(|w| w.ends_sentence()) {
				break Termination::Punctuation;
			}
			added += 1;
			current = next;
		};

		trace!("generated {} words, stopped by {:?}", words.len(), termination);
		Ok(Sentence { words, termination, added })
	}

	/// Generates `count` sentences from a single RNG stream seeded with `seed`.
	///
	/// The output is identical for identical `(model, seed, count)`.
	pub fn generate_many(&self, count: usize, seed: u64) -> Result<Vec<Sentence>> {
		let mut rng = StdRng::seed_from_u64(seed);
		(0..count).map(|_| self.generate(&mut rng)).collect()
	}

	/// Generates `count` sentences across `jobs` worker threads.
	///
	/// Sentence `i` uses its own RNG derived from `(seed, i)`, so the output
	/// depends only on the seed, never on `jobs` or scheduling. Sentences are
	/// returned in index order.
	///
	/// # Notes
	/// - Uses MPSC channels to collect sentences from scoped threads.
	/// - The model is shared read-only; every RNG is confined to one thread.
	pub fn generate_parallel(&self, count: usize, seed: u64, jobs: usize) -> Result<Vec<Sentence>> {
		let jobs = jobs.clamp(1, count.max(1));
		let chunk_size = count.div_ceil(jobs).max(1);
		debug!("generating {count} sentences on {jobs} threads ({chunk_size} per chunk)");

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for start in (0..count).step_by(chunk_size) {
				let tx = tx.clone();
				let end = (start + chunk_size).min(count);
				scope.spawn(move || {
					for index in start..end {
						let mut rng = StdRng::seed_from_u64(sentence_seed(seed, index));
						// The receiver outlives the scope, so sending cannot fail.
						let _ = tx.send((index, self.generate(&mut rng)));
					}
				});
			}
		});
		drop(tx);

		let mut slots: Vec<Option<Sentence>> = vec![None; count];
		for (index, sentence) in rx.iter() {
			slots[index] = Some(sentence?);
		}
		Ok(slots.into_iter().flatten().collect())
	}

	fn text(&self, id: WordId) -> String {
		self.model.word(id).map(|w| w.text().to_owned()).unwrap_or_default()
	}
}

/// Derives the RNG seed of sentence `index` in a parallel batch.
fn sentence_seed(seed: u64, index: usize) -> u64 {
	// SplitMix64 finalizer over (seed, index)
	let mut z = seed ^ (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
	z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
	z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
	z ^ (z >> 31)
}
