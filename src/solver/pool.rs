//! Working set of candidate words
//!
//! Words are kept in a sorted set so prefix queries are a single range lookup
//! and every snapshot comes out in a stable order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::ops::Bound;

/// Candidate words still consistent with all feedback in the current session
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: BTreeSet<Word>,
}

impl WordPool {
    /// Create a pool holding every word of `dictionary`
    #[must_use]
    pub fn from_dictionary(dictionary: &[Word]) -> Self {
        let mut pool = Self::default();
        pool.initialize(dictionary);
        pool
    }

    /// Replace the current contents with every word of `dictionary`
    pub fn initialize(&mut self, dictionary: &[Word]) {
        self.words = dictionary.iter().cloned().collect();
    }

    /// Remove every word in `words`, ignoring ones that are not present
    ///
    /// Returns how many words were actually removed.
    pub fn remove_all(&mut self, words: &FxHashSet<Word>) -> usize {
        let before = self.words.len();
        self.words.retain(|word| !words.contains(word));
        before - self.words.len()
    }

    /// True if some word in the pool starts with `prefix`
    ///
    /// A full five-letter prefix is feasible exactly when it is a pool member.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Word;
    /// use wordle_heuristic::solver::WordPool;
    ///
    /// let pool = WordPool::from_dictionary(&[Word::new("angle").unwrap()]);
    /// assert!(pool.has_prefix("ang"));
    /// assert!(pool.has_prefix("angle"));
    /// assert!(!pool.has_prefix("ank"));
    /// ```
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        // The first word not ordered before `prefix` is the only one that can match
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(prefix))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Snapshot of the pool in sorted order
    #[must_use]
    pub fn all(&self) -> Vec<Word> {
        self.words.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
