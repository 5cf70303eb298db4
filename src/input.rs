//! Turning raw input lines into queries and applying chosen suggestions.

use crate::Vocabulary;

/// The last whitespace-delimited token of `input`, lowercased.
///
/// Returns `None` when `input` is blank.
#[must_use]
pub fn current_token(input: &str) -> Option<String> {
	input.split_whitespace().next_back().map(str::to_lowercase)
}

/// Suggestions for the token currently being typed in `input`.
///
/// A blank input yields nothing without touching the trie.
#[must_use]
pub fn suggestions(vocabulary: &Vocabulary, input: &str, limit: Option<usize>) -> Vec<String> {
	let Some(token) = current_token(input) else {
		return Vec::new();
	};

	let completions = vocabulary.trie().completions(&token);
	match limit {
		Some(n) => completions.take(n).collect(),
		None => completions.collect(),
	}
}

/// Replaces the last token of `input` with `suggestion` and appends a space.
#[must_use]
pub fn apply_suggestion(input: &str, suggestion: &str) -> String {
	let mut words: Vec<&str> = input.split_whitespace().collect();
	match words.last_mut() {
		Some(last) => *last = suggestion,
		None => words.push(suggestion),
	}

	let mut line = words.join(" ");
	line.push(' ');
	line
}

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
	/// `:q`
	Quit,
	/// `:N`, holding the text after the colon.
	Pick(&'a str),
	/// Anything else is text to complete.
	Search(&'a str),
}

impl<'a> Command<'a> {
	#[must_use]
	pub fn parse(line: &'a str) -> Self {
		let trimmed = line.trim();
		match trimmed.strip_prefix(':') {
			Some("q") => Command::Quit,
			Some(index) => Command::Pick(index),
			None => Command::Search(line),
		}
	}
}

/// The suggestion numbered `index` (1-based) among `shown`.
///
/// Returns `None` for `0`, out of range or non-numeric indices.
#[must_use]
pub fn pick<'s>(shown: &'s [String], index: &str) -> Option<&'s str> {
	let i = index.parse::<usize>().ok()?.checked_sub(1)?;
	shown.get(i).map(String::as_str)
}
