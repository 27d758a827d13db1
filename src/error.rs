#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A word or text contained something other than an ASCII letter.
    #[error("invalid letter {letter:?} in {word:?}")]
    InvalidCharacter { word: String, letter: char },

    #[error("failed to read words: {0}")]
    StreamRead(#[from] std::io::Error),
}
