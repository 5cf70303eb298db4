use super::Trie;
use crate::elapsed_secs;
use anyhow::Context;
use rust_embed::RustEmbed;
use std::{path::Path, time::Instant};
use tracing::info;

pub const EMBEDDED_WORDS: &str = "words.txt";

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Assets;

/// A named word list compiled into a [`Trie`].
#[derive(Debug, Clone)]
pub struct Vocabulary {
	pub name: String,
	pub(crate) trie: Trie,
}

impl Vocabulary {
	pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let name = name.into();
		let t0 = Instant::now();
		let trie: Trie = words.into_iter().collect();
		info!(
			"build trie for {name} with {} words in {:.3}s",
			trie.len(),
			elapsed_secs(t0)
		);
		Self { name, trie }
	}

	/// The default word list shipped inside the binary.
	///
	/// # Errors
	///
	/// Will return `Err` if the embedded asset is missing or not UTF-8
	pub fn embedded() -> anyhow::Result<Self> {
		let file = Assets::get(EMBEDDED_WORDS)
			.ok_or_else(|| anyhow::anyhow!("embedded asset not found: {EMBEDDED_WORDS}"))?;
		let text = std::str::from_utf8(&file.data).context("embedded word list is not UTF-8")?;

		Ok(Self::new("embedded", parse_words(text)))
	}

	/// Reads a word list with one word per line.
	///
	/// # Errors
	///
	/// Will return `Err` if `path` cannot be read as UTF-8 text
	pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
		let t0 = Instant::now();
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read word list {}", path.display()))?;
		let name = path
			.file_stem()
			.map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
		let vocabulary = Self::new(name, parse_words(&text));
		info!("load {path:?} in {:.3}s", elapsed_secs(t0));

		Ok(vocabulary)
	}

	/// Suggestions for `prefix`, see [`Trie::auto_complete`].
	#[must_use]
	pub fn suggest(&self, prefix: &str) -> Vec<String> {
		self.trie.auto_complete(prefix)
	}

	#[must_use]
	pub fn trie(&self) -> &Trie {
		&self.trie
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.trie.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.trie.is_empty()
	}
}

fn is_comment(line: &str) -> bool {
	line.starts_with('#')
}

/// Trimmed, lowercased words, skipping blank and `#` comment lines.
pub fn parse_words(text: &str) -> impl Iterator<Item = String> + '_ {
	text.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !is_comment(line))
		.map(str::to_lowercase)
}
