//! Words and the length-indexed word source.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    io::{self, BufRead},
    sync::Arc,
};

/// An upper-cased candidate word.
///
/// Cloning is cheap: the letters are shared. Words compare lexicographically
/// by letter.
///
/// # Examples
///
/// ```
/// use crossfill_core::Word;
///
/// let word = Word::new("cat");
/// assert_eq!(word.to_string(), "CAT");
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.letter(1), 'A');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Arc<[char]>);

impl Word {
    /// Creates a word, normalizing it to upper case.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.chars().flat_map(char::to_uppercase).collect())
    }

    /// Returns the number of letters.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the letter at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    #[inline]
    pub fn letter(&self, i: usize) -> char {
        self.0[i]
    }

    /// Returns all letters.
    #[must_use]
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Candidate words indexed by length.
///
/// Words are upper-cased and deduplicated. Each length bucket is kept in
/// lexicographic order and shared, so handing a bucket to many search roots
/// costs one reference count.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Word, WordSource};
///
/// let words: WordSource = ["cat", "dog", "Cat", "bird"].into_iter().collect();
///
/// assert_eq!(&*words.words_of_length(3), [Word::new("CAT"), Word::new("DOG")]);
/// assert!(words.words_of_length(7).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    by_length: BTreeMap<usize, Arc<[Word]>>,
    empty: Arc<[Word]>,
}

impl WordSource {
    /// Reads one word per line. Surrounding whitespace is trimmed and blank
    /// lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the reader.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(lines.iter().map(|line| line.trim()).collect())
    }

    /// Returns the words of the given length, in lexicographic order.
    ///
    /// A length with no words yields an empty slice.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Arc<[Word]> {
        self.by_length
            .get(&length)
            .map_or_else(|| Arc::clone(&self.empty), Arc::clone)
    }

    /// Returns the total number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(|words| words.len()).sum()
    }

    /// Returns `true` if there are no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Returns the lengths for which at least one word exists.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }
}

impl<S> FromIterator<S> for WordSource
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut buckets = BTreeMap::<usize, BTreeSet<Word>>::new();
        for text in iter {
            let text = text.as_ref();
            if text.is_empty() {
                continue;
            }
            let word = Word::new(text);
            buckets.entry(word.len()).or_default().insert(word);
        }
        let by_length = buckets
            .into_iter()
            .map(|(len, words)| (len, words.into_iter().collect()))
            .collect();
        Self {
            by_length,
            empty: Arc::from([]),
        }
    }
}
