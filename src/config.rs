use crate::Vocabulary;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const WORDS_FILE: &str = "words.txt";

/// Runtime settings, filled in from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	/// Word list to load instead of the default one.
	pub vocabulary: Option<PathBuf>,
	/// Upper bound on the suggestions shown per query.
	pub limit: Option<usize>,
}

impl Config {
	/// Per-user data directory, if the platform has one.
	#[must_use]
	pub fn data_dir() -> Option<PathBuf> {
		ProjectDirs::from("", "", "autocomplete").map(|dirs| dirs.data_dir().to_path_buf())
	}

	/// The word list file that is picked up when none is given explicitly.
	#[must_use]
	pub fn user_words_path() -> Option<PathBuf> {
		Self::data_dir().map(|dir| dir.join(WORDS_FILE))
	}

	/// Picks the word list to use: explicit path, then the user's data
	/// directory, then the embedded default.
	///
	/// # Errors
	///
	/// Will return `Err` if the chosen word list cannot be read
	pub fn load_vocabulary(&self) -> anyhow::Result<Vocabulary> {
		self.load_vocabulary_with(Self::user_words_path().as_deref())
	}

	/// Like [`Config::load_vocabulary`], with the user word list at `user_words`.
	///
	/// # Errors
	///
	/// Will return `Err` if the chosen word list cannot be read
	pub fn load_vocabulary_with(&self, user_words: Option<&Path>) -> anyhow::Result<Vocabulary> {
		if let Some(path) = &self.vocabulary {
			return Vocabulary::load_from_path(path);
		}

		match user_words {
			Some(path) if path.is_file() => {
				info!("using user word list {}", path.display());
				Vocabulary::load_from_path(path)
			}
			Some(_) => Vocabulary::embedded(),
			None => {
				warn!("no home directory found, using embedded word list");
				Vocabulary::embedded()
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn temp_words(tag: &str, contents: &str) -> PathBuf {
		let path = std::env::temp_dir()
			.join(format!("autocomplete-{}-{tag}.txt", std::process::id()));
		std::fs::write(&path, contents).unwrap();
		path
	}

	#[test]
	fn explicit_path_wins() {
		let path = temp_words("explicit", "zebra\nzoo\n");

		let config = Config {
			vocabulary: Some(path.clone()),
			limit: None,
		};
		let vocabulary = config.load_vocabulary().unwrap();
		std::fs::remove_file(&path).unwrap();

		assert_eq!(vocabulary.suggest("z"), ["zebra", "zoo"]);
	}

	#[test]
	fn missing_explicit_path_is_an_error() {
		let config = Config {
			vocabulary: Some(PathBuf::from("/nonexistent/words.txt")),
			limit: Some(3),
		};
		assert!(config.load_vocabulary().is_err());
	}

	#[test]
	fn user_word_list_when_present() {
		let path = temp_words("user", "apple\napricot\n");

		let vocabulary = Config::default().load_vocabulary_with(Some(path.as_path())).unwrap();
		std::fs::remove_file(&path).unwrap();

		assert_eq!(vocabulary.name, format!("autocomplete-{}-user", std::process::id()));
		assert_eq!(vocabulary.suggest("ap"), ["apple", "apricot"]);
	}

	#[test]
	fn embedded_when_user_list_missing() {
		let missing = Path::new("/nonexistent/autocomplete/words.txt");
		let vocabulary = Config::default().load_vocabulary_with(Some(missing)).unwrap();
		assert_eq!(vocabulary.name, "embedded");
		assert!(vocabulary.trie().contains("the"));

		let vocabulary = Config::default().load_vocabulary_with(None).unwrap();
		assert_eq!(vocabulary.name, "embedded");
	}

	#[test]
	fn explicit_path_ignores_user_list() {
		let explicit = temp_words("explicit-first", "kiwi\n");
		let user = temp_words("ignored", "lime\n");

		let config = Config {
			vocabulary: Some(explicit.clone()),
			limit: None,
		};
		let vocabulary = config.load_vocabulary_with(Some(user.as_path())).unwrap();
		std::fs::remove_file(&explicit).unwrap();
		std::fs::remove_file(&user).unwrap();

		assert_eq!(vocabulary.suggest(""), ["kiwi"]);
	}
}
