use crate::Error;

const LETTERS: usize = 26;

/// Maps an ASCII letter of either case to its child slot.
fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| (letter.to_ascii_lowercase() as u8 - b'a') as usize)
}

fn invalid(word: &str, letter: char) -> Error {
    Error::InvalidCharacter {
        word: word.to_string(),
        letter,
    }
}

#[derive(Default, Debug)]
pub struct Node {
    letter: Option<char>,
    children: [Option<Box<Node>>; LETTERS],
    is_end: bool,
}

impl Node {
    /// Returns the child for `c`, or `None` if there is none or `c` is not an ASCII letter.
    pub fn get(&self, c: char) -> Option<&Node> {
        letter_index(c).and_then(|i| self.children[i].as_deref())
    }

    /// The lowercase letter on the edge leading here. The root has none.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }
}

/// A case-insensitive prefix tree over ASCII words.
#[derive(Default, Debug)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from every word, stopping at the first one that is rejected.
    pub fn from_words<I>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        log::debug!(words = trie.len; "built trie");
        Ok(trie)
    }

    /// Adds `word`. Nodes created before an invalid letter is reached are kept.
    pub fn insert(&mut self, word: &str) -> Result<(), Error> {
        let mut node = &mut self.root;
        for letter in word.chars() {
            let i = letter_index(letter).ok_or_else(|| invalid(word, letter))?;
            node = node.children[i].get_or_insert_with(|| {
                Box::new(Node {
                    letter: Some(letter.to_ascii_lowercase()),
                    ..Node::default()
                })
            });
        }
        if !node.is_end {
            node.is_end = true;
            self.len += 1;
        }
        Ok(())
    }

    /// Returns every stored word that is a prefix of `text`, shortest first.
    ///
    /// Prefixes are rebuilt from the node letters and so come back lowercase.
    /// The scan stops quietly at the first letter with no matching child; an
    /// invalid character reached before that point is an error.
    pub fn prefixes(&self, text: &str) -> Result<Vec<String>, Error> {
        let mut prefix = String::with_capacity(text.len());
        let mut prefixes = vec![];
        let mut node = &self.root;
        for letter in text.chars() {
            if letter_index(letter).is_none() {
                return Err(invalid(text, letter));
            }
            let Some(child) = node.get(letter) else {
                break;
            };
            node = child;
            prefix.extend(node.letter);
            if node.is_end {
                prefixes.push(prefix.clone());
            }
        }
        Ok(prefixes)
    }

    pub fn contains(&self, word: &str) -> Result<bool, Error> {
        let mut node = &self.root;
        for letter in word.chars() {
            if letter_index(letter).is_none() {
                return Err(invalid(word, letter));
            }
            match node.get(letter) {
                Some(child) => node = child,
                None => return Ok(false),
            }
        }
        Ok(node.is_end)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
