//! Prefix-based word suggestions over a fixed vocabulary.
//!
//! ```
//! use autocomplete::Trie;
//!
//! let trie: Trie = ["cat", "car", "cart"].into_iter().collect();
//! assert_eq!(trie.auto_complete("ca"), ["car", "cart", "cat"]);
//! assert!(trie.auto_complete("dog").is_empty());
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod utils;

pub use crate::core::*;
pub use utils::*;
