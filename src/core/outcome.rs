//! Wordle feedback outcome calculation and representation
//!
//! An outcome encodes the feedback for a guess using base-3 encoding:
//! - 0 = Absent (letter not in the answer)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Hit (letter in the correct position)
//!
//! The outcome is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Hit,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Interactive symbol: `G` hit, `Y` present, `B` absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'B',
            Self::Present => 'Y',
            Self::Hit => 'G',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' => Some(Self::Hit),
            'Y' | 'y' => Some(Self::Present),
            'B' | 'b' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback outcome for a Wordle guess
///
/// Represents the per-letter feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible outcomes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome(u8);

impl Outcome {
    /// All hits (the win signal)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new outcome from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Outcome value must be < 243");
        Self(value)
    }

    /// Get the raw outcome value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is a hit
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Build an outcome from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for fb in feedback {
            value += fb.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self(value)
    }

    /// Feedback at a single position (0-4)
    #[must_use]
    pub fn feedback_at(self, position: usize) -> Feedback {
        let divisor = 3u8.pow(position as u32);
        Feedback::from_digit((self.0 / divisor) % 3)
    }

    /// Decode into per-position feedback
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        std::array::from_fn(|position| self.feedback_at(position))
    }

    /// Judge `guess` against a known `answer`
    ///
    /// Position `i` is a hit if the letters match, otherwise present if the
    /// guessed letter occurs anywhere in the answer, otherwise absent.
    /// Duplicate letters are not counted down: every extra copy of a letter the
    /// answer contains is reported as present.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::{Outcome, Word};
    ///
    /// let guess = Word::new("there").unwrap();
    /// let answer = Word::new("their").unwrap();
    /// assert_eq!(Outcome::calculate(&guess, &answer).to_code(), "GGGYY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let feedback = std::array::from_fn(|i| {
            let letter = guess.char_at(i);
            if answer.char_at(i) == letter {
                Feedback::Hit
            } else if answer.has_letter(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            }
        });
        Self::from_feedback(feedback)
    }

    /// Parse an outcome from a string like "GYBBG"
    ///
    /// Accepts `G`, `Y` and `B` in either case; surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidOutcome` if the input is not exactly five
    /// valid symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Outcome;
    ///
    /// assert!(Outcome::parse("GGGGG").unwrap().is_solved());
    /// assert!(Outcome::parse("GGXGG").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SolverError> {
        let trimmed = input.trim();
        let invalid = || SolverError::InvalidOutcome(trimmed.to_string());

        let symbols: Vec<Feedback> = trimmed
            .chars()
            .map(Feedback::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        let feedback: [Feedback; WORD_LENGTH] = symbols.try_into().map_err(|_| invalid())?;
        Ok(Self::from_feedback(feedback))
    }

    /// Interactive code string, e.g. "GYBBG"
    #[must_use]
    pub fn to_code(self) -> String {
        self.feedback().iter().map(|fb| fb.symbol()).collect()
    }

    /// Convert outcome to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|fb| match fb {
                Feedback::Hit => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Outcome {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Hit, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn outcome_solved_constant() {
        assert_eq!(Outcome::SOLVED.value(), 242);
        assert!(Outcome::SOLVED.is_solved());
        assert_eq!(Outcome::SOLVED.feedback(), [Hit; 5]);
    }

    #[test]
    fn outcome_all_absent() {
        let outcome = Outcome::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(outcome.value(), 0);
        assert_eq!(outcome.to_code(), "BBBBB");
    }

    #[test]
    fn outcome_self_is_solved() {
        for text in ["crane", "slate", "zebra", "aaaaa"] {
            let w = word(text);
            assert!(Outcome::calculate(&w, &w).is_solved());
        }
    }

    #[test]
    fn outcome_apple_against_angle() {
        let outcome = Outcome::calculate(&word("apple"), &word("angle"));
        assert_eq!(outcome.feedback(), [Hit, Absent, Absent, Hit, Hit]);
    }

    #[test]
    fn outcome_there_against_their() {
        let outcome = Outcome::calculate(&word("there"), &word("their"));
        assert_eq!(outcome.feedback(), [Hit, Hit, Hit, Present, Present]);
    }

    #[test]
    fn outcome_duplicates_not_counted_down() {
        // SPEED vs ERASE: both E's report present even though the rule is positional only
        let outcome = Outcome::calculate(&word("speed"), &word("erase"));
        assert_eq!(outcome.feedback(), [Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn outcome_base3_encoding() {
        // G=2, Y=1, B=0, B=0, G=2
        // 2 + 1×3 + 0×9 + 0×27 + 2×81 = 167
        let outcome = Outcome::parse("GYBBG").unwrap();
        assert_eq!(outcome.value(), 167);
        assert_eq!(outcome.feedback_at(1), Present);
        assert_eq!(outcome.feedback_at(4), Hit);
    }

    #[test]
    fn outcome_parse_valid() {
        let p1 = Outcome::parse("GYBBG").unwrap();
        let p2 = Outcome::parse("gybbg").unwrap();
        let p3 = Outcome::parse("  GyBbG\n").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_string(), "GYBBG");
    }

    #[test]
    fn outcome_parse_invalid() {
        assert!(matches!(
            Outcome::parse("GYGGYB"),
            Err(SolverError::InvalidOutcome(_))
        )); // Too long
        assert!(matches!(
            Outcome::parse("GYG"),
            Err(SolverError::InvalidOutcome(_))
        )); // Too short
        assert!(matches!(
            Outcome::parse("GXGGY"),
            Err(SolverError::InvalidOutcome(_))
        )); // Invalid symbol
        assert!(matches!(
            Outcome::parse(""),
            Err(SolverError::InvalidOutcome(_))
        ));
        assert!("GY-GY".parse::<Outcome>().is_err());
    }

    #[test]
    fn outcome_emoji() {
        let outcome = Outcome::parse("GYBBG").unwrap();
        assert_eq!(outcome.to_emoji(), "🟩🟨⬜⬜🟩");
    }
}
