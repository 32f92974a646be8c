//! Lexicon loading from plain word lists and WordNet databases

pub mod loader;

pub use loader::{
    LexiconFormat, WORDNET_INDEX_FILES, load_from_file, load_lexicon, load_wordnet,
    parse_wordnet_index, words_from_lines, words_from_slice,
};
