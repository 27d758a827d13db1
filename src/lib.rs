//! Finds the word in a list that splits into the most other words from the
//! same list.

pub mod compound;
pub mod error;
pub mod input;
pub mod output;
pub mod words;

pub use compound::{
    decompose, decompose_words, longest_compound_word, longest_compound_word_in,
    par_longest_compound_word, Compound,
};
pub use error::Error;
pub use input::read_words;
pub use words::Trie;
