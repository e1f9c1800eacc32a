use rand::Rng;

use super::chain::ChainModel;
use super::word::{Word, WordId};
use crate::error::{Error, Result};

/// Picks a word to start a sentence, drawn uniformly over dictionary positions.
///
/// A position holding a word that ends a sentence is rejected and the draw is
/// repeated. The result is uniform over the first-seen positions of non-terminal
/// words, regardless of how often each word occurs in the corpus.
///
/// # Errors
/// Returns `Error::DegenerateModel` if no word can start a sentence (empty
/// model, or every word ends in a terminator). Otherwise the rejection loop
/// always has a target and terminates almost surely.
pub fn start_word<R: Rng + ?Sized>(model: &ChainModel, rng: &mut R) -> Result<WordId> {
	if model.start_candidates() == 0 {
		return Err(Error::DegenerateModel { words: model.len() });
	}

	let dictionary = model.dictionary();
	loop {
		let id = WordId(rng.random_range(0..dictionary.len()));
		match dictionary.get(id) {
			Some(word) if !word.ends_sentence() => return Ok(id),
			_ => continue,
		}
	}
}

/// Picks the word following `word`, weighted by observed transition counts.
///
/// Draws `r` uniformly in `[0, total)` and returns the first transition, in
/// table order, whose running weight sum exceeds `r`. The probability of a
/// successor is its weight divided by the total weight.
///
/// Returns `None` if the word has no recorded successor.
pub fn next_word<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Option<WordId> {
	let total = word.total_weight();
	if total == 0 {
		return None;
	}

	let r = rng.random_range(0..total);
	let mut running = 0;
	for transition in word.successors() {
		running += transition.weight;
		if running > r {
			return Some(transition.target);
		}
	}

	// Unreachable: `running` ends at `total > r`.
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::config::BuildOptions;
	use rand::rngs::StdRng;
	use rand::{RngCore, SeedableRng};

	fn build(text: &str) -> ChainModel {
		ChainModel::from_tokens(text.split_whitespace(), &BuildOptions::default()).unwrap()
	}

	#[test]
	fn start_word_fails_on_empty_model() {
		let model = build("");
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(start_word(&model, &mut rng), Err(Error::DegenerateModel { words: 0 })));
	}

	#[test]
	fn start_word_fails_when_every_word_is_terminal() {
		let model = build("end. stop. halt.");
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(start_word(&model, &mut rng), Err(Error::DegenerateModel { words: 3 })));
	}

	#[test]
	fn start_word_never_returns_a_terminal_word() {
		let model = build("a. b. c d. e.");
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			let id = start_word(&model, &mut rng).unwrap();
			assert_eq!(model.word(id).unwrap().text(), "c");
		}
	}

	#[test]
	fn start_word_is_uniform_over_positions_not_frequency() {
		// "a" occurs far more often than the others but owns a single position.
		let model = build("a a a a a a a a a a a a b a c a d. a");
		let mut rng = StdRng::seed_from_u64(42);
		let draws = 30_000;
		let mut counts = [0usize; 4];
		for _ in 0..draws {
			counts[start_word(&model, &mut rng).unwrap().index()] += 1;
		}

		assert_eq!(counts[3], 0, "terminal word drawn");
		for count in &counts[..3] {
			let share = *count as f64 / draws as f64;
			assert!((share - 1.0 / 3.0).abs() < 0.03, "share {share}");
		}
	}

	#[test]
	fn next_word_reports_dead_end() {
		let model = build("the cat sat.");
		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(next_word(model.lookup("sat.").unwrap(), &mut rng), None);
	}

	#[test]
	fn next_word_follows_transition_weights() {
		// the -> cat x3, the -> dog x1
		let model = build("the cat the cat the cat the dog");
		let the = model.lookup("the").unwrap();
		let cat = model.dictionary().lookup("cat").unwrap();
		let dog = model.dictionary().lookup("dog").unwrap();

		let mut rng = StdRng::seed_from_u64(11);
		let draws = 40_000;
		let mut cats = 0usize;
		for _ in 0..draws {
			let next = next_word(the, &mut rng).unwrap();
			assert!(next == cat || next == dog);
			if next == cat {
				cats += 1;
			}
		}
		let share = cats as f64 / draws as f64;
		assert!((share - 0.75).abs() < 0.02, "share {share}");
	}

	#[test]
	fn samplers_accept_trait_object_rngs() {
		let model = build("the cat sat.");
		let mut seeded = StdRng::seed_from_u64(2);
		let rng: &mut dyn RngCore = &mut seeded;

		let start = start_word(&model, &mut *rng).unwrap();
		let next = next_word(model.word(start).unwrap(), &mut *rng).unwrap();
		let pair = (model.word(start).unwrap().text(), model.word(next).unwrap().text());
		assert!(pair == ("the", "cat") || pair == ("cat", "sat."), "{pair:?}");
	}

	#[test]
	fn seeded_draws_are_reproducible() {
		let model = build("a b c a c b a b b c a");
		let sample = |seed| {
			let mut rng = StdRng::seed_from_u64(seed);
			(0..50)
				.map(|_| {
					let id = start_word(&model, &mut rng).unwrap();
					next_word(model.word(id).unwrap(), &mut rng)
				})
				.collect::<Vec<_>>()
		};
		assert_eq!(sample(5), sample(5));
	}
}
