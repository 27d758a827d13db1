use rayon::iter::{IntoParallelRefIterator as _, ParallelIterator as _};

use crate::{words::Trie, Error};

/// A word from the list together with the known words it splits into.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub word: String,
    pub subwords: Vec<String>,
}

/// Splits `word` into the longest sequence of words known to `trie`.
///
/// Every prefix is tried shortest first. A later prefix takes over only when
/// the split of its suffix alone is at least as long as the whole split
/// recorded so far. A word that is only itself comes back as `[word]`; one
/// that cannot be split at all comes back empty.
pub fn decompose(word: &str, trie: &Trie) -> Result<Vec<String>, Error> {
    fn helper(word: &str, trie: &Trie) -> Result<Vec<String>, Error> {
        let mut subwords = vec![];
        for prefix in trie.prefixes(word)? {
            if prefix == word && subwords.is_empty() {
                subwords = vec![prefix];
                continue;
            }
            let suffixes = helper(&word[prefix.len()..], trie)?;
            if !suffixes.is_empty() && suffixes.len() >= subwords.len() {
                subwords = std::iter::once(prefix).chain(suffixes).collect();
            }
        }
        Ok(subwords)
    }

    helper(&word.to_ascii_lowercase(), trie)
}

/// Builds a trie from `words` and decomposes `word` against it.
pub fn decompose_words<I>(word: &str, words: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    decompose(word, &Trie::from_words(words)?)
}

/// Keeps `subwords` as the new best if it is a real compound and strictly
/// longer than the current one, so the earliest word wins a tie.
fn improves(best: &Option<Compound>, subwords: &[String]) -> bool {
    subwords.len() > 1 && subwords.len() > best.as_ref().map_or(0, |b| b.subwords.len())
}

/// Finds the word in `words` with the longest decomposition into two or more
/// other words, or `None` if no word qualifies.
pub fn longest_compound_word<S: AsRef<str>>(words: &[S]) -> Result<Option<Compound>, Error> {
    let trie = Trie::from_words(words)?;
    longest_compound_word_in(&trie, words)
}

/// Like [`longest_compound_word`], but against a trie that has already been built.
pub fn longest_compound_word_in<S: AsRef<str>>(
    trie: &Trie,
    words: &[S],
) -> Result<Option<Compound>, Error> {
    let mut best: Option<Compound> = None;
    let mut skipped = 0;

    for word in words {
        let word = word.as_ref();
        let best_len = best.as_ref().map_or(0, |b| b.subwords.len());
        if word.len() < best_len {
            skipped += 1;
            continue;
        }
        let subwords = decompose(word, trie)?;
        if improves(&best, &subwords) {
            log::trace!(word = word, subwords = subwords.len(); "new longest compound");
            best = Some(Compound {
                word: word.to_string(),
                subwords,
            });
        }
    }

    log::debug!(candidates = words.len(), skipped = skipped; "compound search done");
    Ok(best)
}

/// Decomposes every word on the rayon pool, then picks the winner in list
/// order. Gives the same answer as [`longest_compound_word`].
pub fn par_longest_compound_word<S>(words: &[S]) -> Result<Option<Compound>, Error>
where
    S: AsRef<str> + Sync,
{
    let trie = Trie::from_words(words)?;

    let decompositions = words
        .par_iter()
        .map(|word| decompose(word.as_ref(), &trie))
        .collect::<Result<Vec<_>, _>>()?;

    let mut best: Option<Compound> = None;
    for (word, subwords) in words.iter().zip(decompositions) {
        if improves(&best, &subwords) {
            best = Some(Compound {
                word: word.as_ref().to_string(),
                subwords,
            });
        }
    }

    log::debug!(candidates = words.len(); "parallel compound search done");
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONGEST_DAY: [&str; 4] = ["the", "longest", "day", "longestday"];

    #[test]
    fn empty_word() {
        assert!(decompose_words("", LONGEST_DAY).unwrap().is_empty());
    }

    #[test]
    fn unknown_word() {
        assert!(decompose_words("night", LONGEST_DAY).unwrap().is_empty());
        // "the" matches but "x" leaves a dangling suffix.
        assert!(decompose_words("thex", LONGEST_DAY).unwrap().is_empty());
    }

    #[test]
    fn known_word_is_its_own_decomposition() {
        for word in LONGEST_DAY {
            let subwords = decompose_words(word, LONGEST_DAY).unwrap();
            assert!(!subwords.is_empty(), "{}", word);
        }
        assert_eq!(decompose_words("the", LONGEST_DAY).unwrap(), vec!["the"]);
    }

    #[test]
    fn longer_split_beats_whole_word() {
        assert_eq!(
            decompose_words("longestday", LONGEST_DAY).unwrap(),
            vec!["longest", "day"]
        );
    }

    #[test]
    fn three_way_split() {
        assert_eq!(
            decompose_words("longesttheday", LONGEST_DAY).unwrap(),
            vec!["longest", "the", "day"]
        );
    }

    #[test]
    fn equal_splits_keep_shorter_prefix() {
        // "a"+"bc" and "ab"+"c" tie at two; the suffix "c" splits into one
        // word, fewer than the two already recorded.
        let words = ["a", "ab", "bc", "c"];
        assert_eq!(decompose_words("abc", words).unwrap(), vec!["a", "bc"]);
    }

    #[test]
    fn longer_prefix_with_longer_split_wins() {
        // "ab"+"c"+"d" beats "a"+"bcd".
        let words = ["a", "ab", "bcd", "c", "d"];
        assert_eq!(decompose_words("abcd", words).unwrap(), vec!["ab", "c", "d"]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            decompose_words("ABC", ["abc"]).unwrap(),
            decompose_words("abc", ["abc"]).unwrap()
        );
        assert_eq!(decompose_words("ABC", ["abc"]).unwrap(), vec!["abc"]);
        assert_eq!(
            decompose_words("LongestDay", LONGEST_DAY).unwrap(),
            vec!["longest", "day"]
        );
    }

    #[test]
    fn invalid_character() {
        let err = decompose_words("abc123", ["abc"]).unwrap_err();
        assert!(matches!(err, Error::InvalidCharacter { letter: '1', .. }));
    }

    #[test]
    fn invalid_word_list() {
        let err = decompose_words("abc", ["abc", "a-b"]).unwrap_err();
        assert!(matches!(err, Error::InvalidCharacter { letter: '-', .. }));
    }

    #[test]
    fn longest_compound() {
        assert_eq!(
            longest_compound_word(&LONGEST_DAY).unwrap(),
            Some(Compound {
                word: "longestday".to_string(),
                subwords: vec!["longest".to_string(), "day".to_string()],
            })
        );
    }

    #[test]
    fn no_compound() {
        assert_eq!(longest_compound_word(&["this", "is", "awesome"]).unwrap(), None);
        assert_eq!(longest_compound_word::<&str>(&[]).unwrap(), None);
    }

    #[test]
    fn first_compound_wins_ties() {
        let words = ["fire", "man", "snow", "fireman", "snowman"];
        let best = longest_compound_word(&words).unwrap().unwrap();
        assert_eq!(best.word, "fireman");
        assert_eq!(par_longest_compound_word(&words).unwrap().unwrap(), best);
    }

    #[test]
    fn compound_keeps_original_case() {
        let best = longest_compound_word(&["Fire", "Man", "FireMan"]).unwrap().unwrap();
        assert_eq!(best.word, "FireMan");
        assert_eq!(best.subwords, vec!["fire", "man"]);
    }

    #[test]
    fn reuse_trie() {
        let trie = Trie::from_words(LONGEST_DAY).unwrap();
        let best = longest_compound_word_in(&trie, &["longesttheday", "longestday"])
            .unwrap()
            .unwrap();
        assert_eq!(best.word, "longesttheday");
        assert_eq!(best.subwords.len(), 3);
    }

    #[test]
    fn parallel_propagates_errors() {
        assert!(par_longest_compound_word(&["ok", "not ok"]).is_err());
    }
}
