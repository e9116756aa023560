//! Guess evaluation and feedback representation
//!
//! A pattern is the ordered per-letter feedback for one guess:
//! - Correct: letter at the right position
//! - Present: letter in the word, elsewhere
//! - Absent: letter not in the word, or all of its occurrences already claimed

use super::SecretWord;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Single-character code: `G` correct, `Y` present, `-` absent
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// A guessed letter and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
}

/// Ordered feedback for a whole guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterResult>);

impl Pattern {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Duplicate letters follow the usual rules: exact matches claim their
    /// occurrence first, then remaining occurrences go to misplaced letters
    /// from left to right. Excess copies are `Absent`.
    ///
    /// The caller guarantees `guess.len() == secret.len()`.
    ///
    /// # Algorithm
    /// 1. Copy the secret's letter composition as scratch counts
    /// 2. First pass: consume one count per exact match
    /// 3. Second pass: assign statuses, consuming counts for `Present`
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::{LetterStatus::*, Pattern, SecretWord};
    ///
    /// let secret = SecretWord::new("ALLEY").unwrap();
    /// let guess: Vec<char> = "LLAMA".chars().collect();
    /// let pattern = Pattern::calculate(&secret, &guess);
    ///
    /// assert_eq!(pattern.statuses(), vec![Present, Correct, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &SecretWord, guess: &[char]) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess length must match");

        let mut available = secret.composition().clone();
        let is_exact = |i: usize, letter: char| secret.letter_at(i) == Some(letter);

        // First pass: exact matches claim their occurrence
        for (i, &letter) in guess.iter().enumerate() {
            if is_exact(i, letter) {
                available.take(letter);
            }
        }

        // Second pass: assign statuses in guess order
        let results = guess
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                let status = if is_exact(i, letter) {
                    LetterStatus::Correct
                } else if secret.has_letter(letter) && available.take(letter) {
                    LetterStatus::Present
                } else {
                    LetterStatus::Absent
                };
                LetterResult { letter, status }
            })
            .collect();

        Self(results)
    }

    /// Per-letter results in guess order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    /// Statuses in guess order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.0.iter().map(|r| r.status).collect()
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|r| r.letter).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|r| r.status == LetterStatus::Correct)
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    ///
    /// The high-contrast palette uses orange for correct and blue for present.
    #[must_use]
    pub fn to_emoji(&self, high_contrast: bool) -> String {
        self.0
            .iter()
            .map(|r| match (r.status, high_contrast) {
                (LetterStatus::Correct, false) => '🟩',
                (LetterStatus::Correct, true) => '🟧',
                (LetterStatus::Present, false) => '🟨',
                (LetterStatus::Present, true) => '🟦',
                (LetterStatus::Absent, _) => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.status.code())?;
        }
        Ok(())
    }
}

/// Evaluate a guess against the secret word
///
/// Convenience wrapper over [`Pattern::calculate`] for string input.
#[must_use]
pub fn evaluate(secret: &SecretWord, guess: &str) -> Pattern {
    let letters: Vec<char> = guess.chars().collect();
    Pattern::calculate(secret, &letters)
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn statuses(secret: &str, guess: &str) -> Vec<LetterStatus> {
        evaluate(&SecretWord::new(secret).unwrap(), guess).statuses()
    }

    #[test]
    fn exact_match_claims_before_misplaced() {
        // The L at index 1 is exact, leaving a single L for index 0
        assert_eq!(
            statuses("ALLEY", "LLAMA"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn misplaced_duplicates_limited_by_composition() {
        // SPEED vs ERASE: ERASE has two E's, both yellow
        assert_eq!(
            statuses("ERASE", "SPEED"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn later_exact_match_wins_over_earlier_misplaced() {
        // FLOOR vs ROBOT: second O is exact, first O takes the remaining one
        assert_eq!(
            statuses("FLOOR", "ROBOT"),
            vec![Present, Present, Absent, Correct, Absent]
        );
        // Only one E left after the exact match, and it is exact itself
        assert_eq!(
            statuses("CANDLE", "EEEEEE"),
            vec![Absent, Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn excess_copies_are_absent_left_to_right() {
        assert_eq!(
            statuses("ANCHOR", "OOOAAA"),
            vec![Present, Absent, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn absent_letters() {
        assert_eq!(statuses("PUZZLE", "BRIGHT"), vec![Absent; 6]);
    }

    #[test]
    fn all_correct_is_perfect() {
        let secret = SecretWord::new("PEPPER").unwrap();
        let pattern = evaluate(&secret, "PEPPER");
        assert!(pattern.is_perfect());
        assert_eq!(pattern.statuses(), vec![Correct; 6]);
        assert_eq!(pattern.word(), "PEPPER");
    }

    #[test]
    fn display_and_emoji() {
        let secret = SecretWord::new("ALLEY").unwrap();
        let pattern = evaluate(&secret, "LLAMA");
        assert_eq!(pattern.to_string(), "YGY--");
        assert_eq!(pattern.to_emoji(false), "🟨🟩🟨⬜⬜");
        assert_eq!(pattern.to_emoji(true), "🟦🟧🟦⬜⬜");
    }

    #[test]
    fn letters_preserved_in_guess_order() {
        let secret = SecretWord::new("GARDEN").unwrap();
        let pattern = evaluate(&secret, "GRADES");
        let letters: String = pattern.results().iter().map(|r| r.letter).collect();
        assert_eq!(letters, "GRADES");
    }

    fn word_pair() -> impl Strategy<Value = (String, String)> {
        (1usize..9).prop_flat_map(|len| {
            (
                proptest::collection::vec(prop::char::range('A', 'F'), len),
                proptest::collection::vec(prop::char::range('A', 'F'), len),
            )
                .prop_map(|(s, g)| (s.into_iter().collect(), g.into_iter().collect()))
        })
    }

    proptest! {
        #[test]
        fn word_against_itself_is_all_correct(word in "[A-Z]{1,10}") {
            let secret = SecretWord::new(word.clone()).unwrap();
            prop_assert!(evaluate(&secret, &word).is_perfect());
        }

        #[test]
        fn exact_positions_always_correct((secret, guess) in word_pair()) {
            let secret = SecretWord::new(secret).unwrap();
            let pattern = evaluate(&secret, &guess);
            for (i, result) in pattern.results().iter().enumerate() {
                if secret.letter_at(i) == Some(result.letter) {
                    prop_assert_eq!(result.status, Correct);
                }
            }
        }

        #[test]
        fn hits_never_exceed_composition((secret, guess) in word_pair()) {
            let secret = SecretWord::new(secret).unwrap();
            let pattern = evaluate(&secret, &guess);
            for letter in guess.chars() {
                let hits = pattern
                    .results()
                    .iter()
                    .filter(|r| r.letter == letter && r.status != Absent)
                    .count();
                prop_assert!(hits <= secret.composition().count(letter));
            }
        }

        #[test]
        fn evaluation_is_deterministic((secret, guess) in word_pair()) {
            let secret = SecretWord::new(secret).unwrap();
            prop_assert_eq!(evaluate(&secret, &guess), evaluate(&secret, &guess));
        }
    }
}
