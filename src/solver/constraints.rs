//! Constraint propagation from one round of feedback
//!
//! Applying feedback is two-phase: every position marks the pool words it
//! contradicts, then the marked set is removed from the pool in one batch.

use super::WordPool;
use crate::core::{Feedback, Outcome, Word};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Letters learned so far in the current session
///
/// `known` holds letters confirmed present (hit or present), `excluded` holds
/// letters reported absent. After every [`apply`](Self::apply) the two sets are
/// disjoint.
#[derive(Debug, Clone, Default)]
pub struct LetterConstraints {
    known: BTreeSet<u8>,
    excluded: BTreeSet<u8>,
}

impl LetterConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow `pool` using the `outcome` of `guess`
    ///
    /// Returns how many words were removed.
    pub fn apply(&mut self, pool: &mut WordPool, guess: &Word, outcome: Outcome) -> usize {
        let mut invalid: FxHashSet<Word> = FxHashSet::default();

        for (position, feedback) in outcome.feedback().into_iter().enumerate() {
            let letter = guess.char_at(position);

            match feedback {
                Feedback::Absent => {
                    self.excluded.insert(letter);
                }
                Feedback::Hit => {
                    self.known.insert(letter);
                    invalid.extend(
                        pool.iter()
                            .filter(|word| word.char_at(position) != letter)
                            .cloned(),
                    );
                }
                Feedback::Present => {
                    self.known.insert(letter);
                    invalid.extend(
                        pool.iter()
                            .filter(|word| {
                                word.char_at(position) == letter || !word.has_letter(letter)
                            })
                            .cloned(),
                    );
                }
            }
        }

        // A repeated guess letter can be absent at one position and present at another
        self.resolve_duplicates();

        invalid.extend(
            pool.iter()
                .filter(|word| self.excluded.iter().any(|&letter| word.has_letter(letter)))
                .cloned(),
        );

        pool.remove_all(&invalid)
    }

    fn resolve_duplicates(&mut self) {
        let known = &self.known;
        self.excluded.retain(|letter| !known.contains(letter));
    }

    /// Letters confirmed present in the answer
    #[must_use]
    pub const fn known(&self) -> &BTreeSet<u8> {
        &self.known
    }

    /// Letters confirmed absent from the answer
    #[must_use]
    pub const fn excluded(&self) -> &BTreeSet<u8> {
        &self.excluded
    }

    pub fn clear(&mut self) {
        self.known.clear();
        self.excluded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool(words: &[&str]) -> WordPool {
        WordPool::from_dictionary(&words_from_slice(words))
    }

    fn remaining(pool: &WordPool) -> Vec<String> {
        pool.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn hit_keeps_only_matching_position() {
        let mut p = pool(&["crane", "crate", "slate", "zebra"]);
        let mut constraints = LetterConstraints::new();

        let removed = constraints.apply(&mut p, &word("fudge"), Outcome::parse("BBBBG").unwrap());

        assert_eq!(removed, 1);
        assert_eq!(remaining(&p), vec!["crane", "crate", "slate"]);
        assert_eq!(constraints.known().iter().copied().collect::<Vec<_>>(), vec![b'e']);
    }

    #[test]
    fn absent_letters_remove_words_containing_them() {
        let mut p = pool(&["crane", "crate", "slate", "zebra"]);
        let mut constraints = LetterConstraints::new();

        // t absent removes crate and slate; e present elsewhere keeps the rest
        constraints.apply(&mut p, &word("quiet"), Outcome::parse("BBBYB").unwrap());

        assert_eq!(remaining(&p), vec!["crane", "zebra"]);
    }

    #[test]
    fn apple_against_angle() {
        let mut p = pool(&["apple", "angle", "ankle"]);
        let mut constraints = LetterConstraints::new();
        let guess = word("apple");
        let outcome = Outcome::calculate(&guess, &word("angle"));

        let removed = constraints.apply(&mut p, &guess, outcome);

        assert_eq!(removed, 1);
        assert_eq!(remaining(&p), vec!["angle", "ankle"]);
        assert!(constraints.excluded().contains(&b'p'));
        assert!(constraints.known().contains(&b'a'));
    }

    #[test]
    fn present_removes_same_position_and_missing_letter() {
        let mut p = pool(&["there", "their", "three", "other", "those"]);
        let mut constraints = LetterConstraints::new();
        let guess = word("there");
        let outcome = Outcome::calculate(&guess, &word("their"));

        constraints.apply(&mut p, &guess, outcome);

        // "there" has r at 3 (present there is a contradiction)
        assert!(p.contains("their"));
        assert!(!p.contains("there"));
        assert!(!p.contains("three"));
        assert!(!p.contains("other"));
        assert!(!p.contains("those"));
    }

    #[test]
    fn duplicate_letter_is_not_excluded() {
        // Guess has two e's; the answer has one. One e is absent, the other a hit.
        let mut p = pool(&["shelf", "sheep", "spelt"]);
        let mut constraints = LetterConstraints::new();
        let guess = word("sheep");
        let outcome = Outcome::parse("GGGBB").unwrap();

        constraints.apply(&mut p, &guess, outcome);

        assert!(!constraints.excluded().contains(&b'e'));
        assert!(constraints.excluded().contains(&b'p'));
        assert_eq!(remaining(&p), vec!["shelf"]);
    }

    #[test]
    fn known_and_excluded_stay_disjoint_across_rounds() {
        let mut p = pool(&["angle", "ankle", "apple", "eagle", "eager"]);
        let mut constraints = LetterConstraints::new();

        constraints.apply(&mut p, &word("eager"), Outcome::parse("BYBBB").unwrap());
        assert!(constraints.excluded().contains(&b'e'));

        // e turns up later, so it can no longer be excluded
        constraints.apply(&mut p, &word("angle"), Outcome::parse("GBBGG").unwrap());

        assert!(constraints.known().is_disjoint(constraints.excluded()));
        assert!(constraints.known().contains(&b'e'));
        assert!(!constraints.excluded().contains(&b'e'));
    }

    #[test]
    fn solved_outcome_keeps_guess() {
        let mut p = pool(&["zebra", "bread"]);
        let mut constraints = LetterConstraints::new();
        constraints.apply(&mut p, &word("zebra"), Outcome::SOLVED);
        assert_eq!(remaining(&p), vec!["zebra"]);
    }

    #[test]
    fn clear_resets_sets() {
        let mut p = pool(&["apple", "angle"]);
        let mut constraints = LetterConstraints::new();
        constraints.apply(&mut p, &word("apple"), Outcome::parse("GBBGG").unwrap());
        constraints.clear();

        assert!(constraints.known().is_empty());
        assert!(constraints.excluded().is_empty());
    }
}
