use std::collections::HashMap;

use super::word::{Word, WordId};

/// Words of the corpus in first-seen order.
///
/// Positional access matters: start words are drawn uniformly over
/// positions, so the enumeration order must be exactly insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
	words: Vec<Word>,
	index: HashMap<String, WordId>,
}

impl Dictionary {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Looks a word up by its exact text.
	pub fn lookup(&self, text: &str) -> Option<WordId> {
		self.index.get(text).copied()
	}

	/// Returns the word at `id`, if it belongs to this dictionary.
	pub fn get(&self, id: WordId) -> Option<&Word> {
		self.words.get(id.0)
	}

	pub(crate) fn get_mut(&mut self, id: WordId) -> Option<&mut Word> {
		self.words.get_mut(id.0)
	}

	/// Appends a new word and returns its id.
	///
	/// Callers must check `lookup` first; texts are unique.
	pub(crate) fn push(&mut self, word: Word) -> WordId {
		let id = WordId(self.words.len());
		self.index.insert(word.text().to_owned(), id);
		self.words.push(word);
		id
	}

	/// Iterates `(id, word)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
		self.words.iter().enumerate().map(|(i, w)| (WordId(i), w))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_assigns_positions_in_insertion_order() {
		let mut dict = Dictionary::new();
		let a = dict.push(Word::new("b", false));
		let b = dict.push(Word::new("a", false));

		assert_eq!(a.index(), 0);
		assert_eq!(b.index(), 1);
		assert_eq!(dict.lookup("a"), Some(b));
		assert_eq!(dict.lookup("c"), None);

		let texts: Vec<&str> = dict.iter().map(|(_, w)| w.text()).collect();
		assert_eq!(texts, vec!["b", "a"]);
	}
}
