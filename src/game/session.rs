//! In-progress game for one date

use super::SessionError;
use crate::core::{LetterStatus, Pattern, SecretWord};
use crate::storage::SavedSession;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: String,
    pattern: Pattern,
}

impl Guess {
    /// Score `word` against `secret`
    ///
    /// `word` must be canonical and as long as the secret.
    #[must_use]
    pub fn evaluate(secret: &SecretWord, word: String) -> Self {
        let letters: Vec<char> = word.chars().collect();
        let pattern = Pattern::calculate(secret, &letters);
        Self { word, pattern }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.pattern.is_perfect()
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Ordered guess history for one date, bounded by the attempt limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    date: NaiveDate,
    attempt_limit: usize,
    guesses: Vec<Guess>,
}

impl SessionState {
    /// Start an empty session. A limit of zero is raised to one.
    #[must_use]
    pub fn new(date: NaiveDate, attempt_limit: usize) -> Self {
        Self {
            date,
            attempt_limit: attempt_limit.max(1),
            guesses: Vec::new(),
        }
    }

    /// Append a guess to the history
    ///
    /// # Errors
    /// - `CapacityExceeded` if every attempt is already used
    /// - `SessionClosed` if the session was won earlier
    pub fn record_guess(&mut self, guess: Guess) -> Result<(), SessionError> {
        if self.guesses.len() >= self.attempt_limit {
            return Err(SessionError::CapacityExceeded {
                limit: self.attempt_limit,
            });
        }
        if self.is_terminal() {
            return Err(SessionError::SessionClosed);
        }

        self.guesses.push(guess);
        Ok(())
    }

    /// The last recorded guess is all correct
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.guesses.last().is_some_and(Guess::is_correct)
    }

    /// Every attempt is used and the last one missed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.guesses.len() == self.attempt_limit && !self.is_won()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_won() || self.is_exhausted()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.is_won() {
            SessionStatus::Won {
                attempts: self.guesses.len(),
            }
        } else if self.is_exhausted() {
            SessionStatus::Lost
        } else {
            SessionStatus::InProgress
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.attempt_limit - self.guesses.len()
    }

    /// Best known status of every letter played so far
    #[must_use]
    pub fn keyboard_hints(&self) -> BTreeMap<char, LetterStatus> {
        let mut hints: BTreeMap<char, LetterStatus> = BTreeMap::new();
        for result in self.guesses.iter().flat_map(|g| g.pattern().results()) {
            hints
                .entry(result.letter)
                .and_modify(|best| *best = (*best).max(result.status))
                .or_insert(result.status);
        }
        hints
    }

    /// Canonical record for persistence: date, limit and words only
    #[must_use]
    pub fn to_saved(&self) -> SavedSession {
        SavedSession {
            date: self.date,
            attempt_limit: Some(self.attempt_limit),
            guesses: self.guesses.iter().map(|g| g.word.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretWord {
        SecretWord::new("CASTLE").unwrap()
    }

    fn guess(word: &str) -> Guess {
        Guess::evaluate(&secret(), word.to_string())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 9).unwrap()
    }

    #[test]
    fn new_session_is_open() {
        let session = SessionState::new(date(), 6);
        assert!(!session.is_won());
        assert!(!session.is_exhausted());
        assert!(!session.is_terminal());
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.remaining(), 6);
    }

    #[test]
    fn winning_guess_closes_session() {
        let mut session = SessionState::new(date(), 6);
        session.record_guess(guess("CANDLE")).unwrap();
        session.record_guess(guess("CASTLE")).unwrap();

        assert!(session.is_won());
        assert!(!session.is_exhausted());
        assert_eq!(session.status(), SessionStatus::Won { attempts: 2 });
        assert_eq!(
            session.record_guess(guess("CASTLE")),
            Err(SessionError::SessionClosed)
        );
        assert_eq!(session.attempts_used(), 2);
    }

    #[test]
    fn last_attempt_miss_exhausts_session() {
        let mut session = SessionState::new(date(), 2);
        session.record_guess(guess("CANDLE")).unwrap();
        assert!(!session.is_terminal());
        session.record_guess(guess("CARPET")).unwrap();

        assert!(session.is_exhausted());
        assert!(session.is_terminal());
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(
            session.record_guess(guess("CASTLE")),
            Err(SessionError::CapacityExceeded { limit: 2 })
        );
    }

    #[test]
    fn win_on_last_attempt_is_not_exhausted() {
        let mut session = SessionState::new(date(), 1);
        session.record_guess(guess("CASTLE")).unwrap();
        assert!(session.is_won());
        assert!(!session.is_exhausted());
        assert_eq!(session.status(), SessionStatus::Won { attempts: 1 });
    }

    #[test]
    fn zero_limit_raised_to_one() {
        let session = SessionState::new(date(), 0);
        assert_eq!(session.attempt_limit(), 1);
    }

    #[test]
    fn keyboard_hints_keep_best_status() {
        let mut session = SessionState::new(date(), 6);
        // CANDLE: C A correct, N D absent, L E correct
        session.record_guess(guess("CANDLE")).unwrap();
        // CLEATS: C correct, L E A T S misplaced
        session.record_guess(guess("CLEATS")).unwrap();

        let hints = session.keyboard_hints();
        assert_eq!(hints.get(&'C'), Some(&LetterStatus::Correct));
        assert_eq!(hints.get(&'L'), Some(&LetterStatus::Correct));
        assert_eq!(hints.get(&'T'), Some(&LetterStatus::Present));
        assert_eq!(hints.get(&'N'), Some(&LetterStatus::Absent));
        assert_eq!(hints.get(&'Z'), None);
    }

    #[test]
    fn saved_record_keeps_words_in_order() {
        let mut session = SessionState::new(date(), 6);
        session.record_guess(guess("CANDLE")).unwrap();
        session.record_guess(guess("CARPET")).unwrap();

        let saved = session.to_saved();
        assert_eq!(saved.date, date());
        assert_eq!(saved.attempt_limit, Some(6));
        assert_eq!(saved.guesses, vec!["CANDLE", "CARPET"]);
    }
}
