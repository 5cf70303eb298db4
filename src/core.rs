pub mod trie;
pub mod vocabulary;

pub use trie::*;
pub use vocabulary::*;
