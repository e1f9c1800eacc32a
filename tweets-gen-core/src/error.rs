use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised while reading a corpus or generating sentences.
#[derive(Debug, Error)]
pub enum Error {
	/// The corpus could not be opened or read.
	#[error("io error while reading {path:?}: {source}")]
	Io {
		source: std::io::Error,
		path: Option<PathBuf>,
	},

	/// The model has no word that can start a sentence.
	///
	/// Raised when the dictionary is empty or every word ends in a terminator.
	#[error("model has no usable start word ({words} words, all terminal)")]
	DegenerateModel { words: usize },

	/// Generation parameters failed validation.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl Error {
	/// Wraps an IO error with the path it relates to.
	pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
		Self::Io { source, path }
	}
}
