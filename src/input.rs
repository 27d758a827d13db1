use std::io::BufRead;

use crate::Error;

/// Reads every whitespace-separated word from `reader`, in order.
pub fn read_words(reader: impl BufRead) -> Result<Vec<String>, Error> {
    let mut words = vec![];
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    log::debug!(words = words.len(); "read word list");
    Ok(words)
}
