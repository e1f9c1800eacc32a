use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a text file and returns its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Invalid UTF-8 sequences are replaced with U+FFFD instead of failing
pub fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let bytes = fs::read(path).map_err(|e| Error::io(e, Some(path.to_path_buf())))?;
	Ok(String::from_utf8_lossy(&bytes).lines().map(str::to_owned).collect())
}

/// Splits lines into whitespace-delimited tokens, in corpus order.
///
/// Blank lines contribute nothing. Token limits are applied by `ChainBuilder`.
pub fn tokenize<'a, I>(lines: I) -> impl Iterator<Item = &'a str>
where
	I: IntoIterator<Item = &'a String>,
{
	lines.into_iter().flat_map(|line| line.split_whitespace())
}
