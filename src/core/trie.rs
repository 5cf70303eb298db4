use std::collections::BTreeMap;

/// One position in the character tree.
///
/// Children are kept in a `BTreeMap` so that walking them always visits edges in
/// ascending character order, which makes completions come out alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
	children: BTreeMap<char, TrieNode>,
	is_end: bool,
}

impl TrieNode {
	/// True if some inserted word terminates at this node.
	#[must_use]
	pub fn is_end_of_word(&self) -> bool {
		self.is_end
	}

	#[must_use]
	pub fn get(&self, ch: char) -> Option<&TrieNode> {
		self.children.get(&ch)
	}

	/// Iterates over the outgoing edges in ascending character order.
	pub fn children(&self) -> impl ExactSizeIterator<Item = (char, &TrieNode)> {
		self.children.iter().map(|(ch, node)| (*ch, node))
	}

	#[must_use]
	pub fn child_count(&self) -> usize {
		self.children.len()
	}
}

/// A prefix tree over a fixed vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
	root: TrieNode,
	len: usize,
}

impl Trie {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `word`, creating only the nodes that are missing on its path.
	///
	/// Inserting a word that is already present changes nothing.
	pub fn insert(&mut self, word: &str) {
		let mut current = &mut self.root;
		for ch in word.chars() {
			current = current.children.entry(ch).or_default();
		}
		if !current.is_end {
			current.is_end = true;
			self.len += 1;
		}
	}

	/// Returns the node reached by following `prefix` from the root.
	///
	/// Stops at the first character without a matching edge. The empty prefix
	/// yields the root.
	#[must_use]
	pub fn search_prefix(&self, prefix: &str) -> Option<&TrieNode> {
		prefix
			.chars()
			.try_fold(&self.root, |node, ch| node.children.get(&ch))
	}

	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.search_prefix(word).is_some_and(TrieNode::is_end_of_word)
	}

	/// Every stored word starting with `prefix`, in ascending order.
	///
	/// The result is not capped; an unknown prefix gives an empty vector.
	#[must_use]
	pub fn auto_complete(&self, prefix: &str) -> Vec<String> {
		let Some(node) = self.search_prefix(prefix) else {
			return Vec::new();
		};

		let mut result = Vec::new();
		let mut buffer = prefix.to_owned();
		Self::collect_all_words(node, &mut buffer, &mut result);

		result
	}

	/// Pre-order walk: a node's own word is emitted before any word below it.
	fn collect_all_words(node: &TrieNode, buffer: &mut String, result: &mut Vec<String>) {
		if node.is_end {
			result.push(buffer.clone());
		}
		for (ch, next) in &node.children {
			buffer.push(*ch);
			Self::collect_all_words(next, buffer, result);
			buffer.pop();
		}
	}

	/// Lazily yields the same sequence as [`Trie::auto_complete`].
	///
	/// Useful when only the first few suggestions are needed.
	#[must_use]
	pub fn completions(&self, prefix: &str) -> Completions<'_> {
		let stack = self
			.search_prefix(prefix)
			.map(|node| vec![(node, prefix.to_owned())])
			.unwrap_or_default();

		Completions { stack }
	}

	/// Number of distinct words stored.
	#[must_use]
	pub fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	#[must_use]
	pub fn root(&self) -> &TrieNode {
		&self.root
	}
}

impl<S: AsRef<str>> Extend<S> for Trie {
	fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
		for word in words {
			self.insert(word.as_ref());
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
	fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
		let mut trie = Self::new();
		trie.extend(words);
		trie
	}
}

/// Iterator returned by [`Trie::completions`].
///
/// Walks the subtree with an explicit stack instead of recursion.
#[derive(Debug, Clone)]
pub struct Completions<'t> {
	stack: Vec<(&'t TrieNode, String)>,
}

impl Iterator for Completions<'_> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some((node, word)) = self.stack.pop() {
			// reversed so the smallest character is popped first
			for (ch, child) in node.children.iter().rev() {
				let mut next = word.clone();
				next.push(*ch);
				self.stack.push((child, next));
			}
			if node.is_end {
				return Some(word);
			}
		}

		None
	}
}
