//! Secret word representation
//!
//! A `SecretWord` stores the letters of the day's word together with its
//! letter composition, which the evaluator copies as scratch space.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Multiset of letters (letter → number of occurrences)
///
/// The sum of all counts equals the length of the word it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterComposition {
    counts: FxHashMap<char, u8>,
}

impl LetterComposition {
    /// Count every letter of `letters`
    #[must_use]
    pub fn of(letters: &[char]) -> Self {
        let mut counts: FxHashMap<char, u8> = FxHashMap::default();
        for &letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of occurrences of `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).map_or(0, |&n| usize::from(n))
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().map(|&n| usize::from(n)).sum()
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` without changing anything when no occurrence is left.
    pub(crate) fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("secret word must contain at least one letter")]
    Empty,

    #[error("secret word {0:?} contains whitespace")]
    Whitespace(String),
}

/// The word to find for one calendar date
///
/// Immutable once created. The word is expected in canonical form (already
/// normalized by the word source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    composition: LetterComposition,
}

impl SecretWord {
    /// Create a secret word from its canonical text
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::SecretWord;
    ///
    /// let secret = SecretWord::new("ALLEY").unwrap();
    /// assert_eq!(secret.len(), 5);
    /// assert_eq!(secret.first_letter(), 'A');
    /// assert_eq!(secret.composition().count('L'), 2);
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace(text));
        }

        let letters: Vec<char> = text.chars().collect();
        let composition = LetterComposition::of(&letters);

        Ok(Self {
            text,
            letters,
            composition,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a letter slice
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letter every guess has to start with
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        self.letters[0]
    }

    /// Letter at `position`, if any
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.composition.count(letter) > 0
    }

    /// Precomputed letter composition
    #[inline]
    #[must_use]
    pub fn composition(&self) -> &LetterComposition {
        &self.composition
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
