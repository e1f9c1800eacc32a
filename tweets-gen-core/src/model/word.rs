use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a word inside a `Dictionary`.
///
/// This is the word's position in first-seen order, so ids are dense
/// (`0..dictionary.len()`) and stable once assigned.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) usize);

impl WordId {
	/// Position of the word in first-seen order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for WordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// One observed edge of the chain: `target` followed the owning word `weight` times.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
	pub target: WordId,
	pub weight: usize,
}

/// Represents one distinct token of the corpus.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Count how often the token occurs in the corpus
/// - Accumulate transition weights toward the words that follow it
///
/// ## Invariants
/// - Every transition weight is strictly positive
/// - Each target appears at most once in `successors`
/// - `successors` keeps first-recorded order, so enumeration is deterministic
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
	/// Literal token text.
	text: String,
	/// Number of times the token appeared in the corpus (informational).
	occurrences: usize,
	/// Whether the text ends in a sentence terminator.
	ends_sentence: bool,
	/// Outgoing transitions in first-recorded order.
	/// Example: [ cat => 2, dog => 1 ]
	successors: Vec<Transition>,
	/// Slot of each target inside `successors`.
	slots: HashMap<WordId, usize>,
}

impl Word {
	/// Creates a word seen once, with no transitions yet.
	pub fn new(text: &str, ends_sentence: bool) -> Self {
		Self {
			text: text.to_owned(),
			occurrences: 1,
			ends_sentence,
			successors: Vec::new(),
			slots: HashMap::new(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// True if the text ends in one of the model's sentence terminators.
	pub fn ends_sentence(&self) -> bool {
		self.ends_sentence
	}

	/// Outgoing transitions, in the order they were first recorded.
	pub fn successors(&self) -> &[Transition] {
		&self.successors
	}

	/// Recorded weight of the transition toward `target`, 0 if never observed.
	pub fn weight_of(&self, target: WordId) -> usize {
		self.slots
			.get(&target)
			.map_or(0, |&slot| self.successors[slot].weight)
	}

	/// Sum of all outgoing weights.
	pub fn total_weight(&self) -> usize {
		self.successors.iter().map(|t| t.weight).sum()
	}

	/// A word with no outgoing transition is a dead end for generation.
	pub fn is_dead_end(&self) -> bool {
		self.successors.is_empty()
	}

	pub(crate) fn add_occurrence(&mut self) {
		self.occurrences += 1;
	}

	/// Records an occurrence of a transition toward `target`.
	///
	/// - If the transition already exists, its weight is increased.
	/// - Otherwise, a new transition is appended with an initial weight of 1.
	pub(crate) fn add_transition(&mut self, target: WordId) {
		match self.slots.get(&target) {
			Some(&slot) => self.successors[slot].weight += 1,
			None => {
				self.slots.insert(target, self.successors.len());
				self.successors.push(Transition { target, weight: 1 });
			}
		}
	}
}
