//! Guess submission and session lifecycle
//!
//! The manager owns the day's secret word, the session and the statistics.
//! Every mutation goes through [`SessionManager::submit`], which validates
//! first and only then touches state, so a rejected word has no effect at
//! all.

use super::{GameError, Guess, GuessError, SessionState, SessionStatus, Stats};
use crate::config::Configuration;
use crate::core::{LetterStatus, Pattern, SecretWord};
use crate::storage::{PersistenceGateway, SavedSession};
use crate::wordlists::WordSource;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Per-letter feedback in guess order
    pub results: Pattern,
    /// 1-based number of this attempt
    pub attempt: usize,
    pub status: SessionStatus,
    /// `false` if a save failed; the in-memory session is still up to date
    pub persisted: bool,
}

/// Everything a host needs to draw the session from scratch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub date: NaiveDate,
    pub word_length: usize,
    pub first_letter: char,
    pub attempt_limit: usize,
    pub guesses: Vec<Guess>,
    pub status: SessionStatus,
    pub keyboard: BTreeMap<char, LetterStatus>,
    /// Revealed once the session is over
    pub secret: Option<String>,
}

impl SessionView {
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.attempt_limit.saturating_sub(self.guesses.len())
    }
}

/// Drives one day's game
pub struct SessionManager<W: WordSource, P: PersistenceGateway> {
    words: W,
    store: P,
    config: Configuration,
    secret: SecretWord,
    session: SessionState,
    stats: Stats,
    /// Cleared when the saved statistics could not be read, so they are
    /// never overwritten with a partial record
    stats_writable: bool,
}

impl<W: WordSource, P: PersistenceGateway> SessionManager<W, P> {
    /// Open the game of `today`
    ///
    /// Loads configuration, statistics and the saved session. A saved
    /// session for another date is dropped; one for `today` is rehydrated by
    /// replaying its words through the evaluator. Unreadable records are
    /// logged and treated as absent.
    ///
    /// # Errors
    /// Returns `GameError::Word` if the word source yields an unusable secret.
    pub fn open(words: W, store: P, today: NaiveDate) -> Result<Self, GameError> {
        let config = store
            .load_config()
            .unwrap_or_else(|e| {
                log::warn!("ignoring configuration: {e}");
                None
            })
            .unwrap_or_default();

        let (stats, stats_writable) = match store.load_stats() {
            Ok(stats) => (stats.unwrap_or_default(), true),
            Err(e) => {
                log::warn!("statistics unreadable, keeping them in memory only: {e}");
                (Stats::default(), false)
            }
        };

        let saved = match store.load_session() {
            Ok(Some(saved)) if saved.date == today => Some(saved),
            Ok(Some(stale)) => {
                log::info!("starting {today}, discarding session of {}", stale.date);
                None
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("ignoring saved session: {e}");
                None
            }
        };

        let secret = SecretWord::new(words.secret_for(today))?;
        let attempt_limit = saved
            .as_ref()
            .and_then(|s| s.attempt_limit)
            .unwrap_or_else(|| config.attempt_limit());

        let mut manager = Self {
            words,
            store,
            config,
            secret,
            session: SessionState::new(today, attempt_limit),
            stats,
            stats_writable,
        };

        if let Some(saved) = saved {
            manager.rehydrate(&saved);
        }

        Ok(manager)
    }

    /// Rebuild results from the saved words
    ///
    /// Words are re-scored, not re-validated against the dictionary. Entries
    /// that no longer fit the secret are skipped.
    fn rehydrate(&mut self, saved: &SavedSession) {
        for raw in &saved.guesses {
            let word = self.words.normalize(raw);
            if word.chars().count() != self.secret.len() {
                log::warn!("skipping saved guess {raw:?}: length does not match");
                continue;
            }

            let guess = Guess::evaluate(&self.secret, word);
            if let Err(e) = self.session.record_guess(guess) {
                log::warn!("dropping remaining saved guesses: {e}");
                break;
            }
        }

        log::debug!(
            "restored {} guesses for {}",
            self.session.attempts_used(),
            self.session.date()
        );

        // A finished session whose stats write was lost is counted now
        if self.session.is_terminal() && !self.stats.is_recorded(self.session.date()) {
            self.record_stats();
        }
    }

    /// Submit a word typed by the player
    ///
    /// Checks, in order: length, first letter, dictionary, session still
    /// open. On success the guess is scored and recorded; if it ends the
    /// session the statistics are updated once and saved together with the
    /// session, otherwise only the session is saved.
    ///
    /// # Errors
    /// Returns a `GuessError` describing the first failed check. Nothing is
    /// recorded, scored or saved in that case.
    pub fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, GuessError> {
        let word = self.words.normalize(raw);

        let length = word.chars().count();
        if length != self.secret.len() {
            return Err(GuessError::WrongLength {
                expected: self.secret.len(),
                actual: length,
            });
        }

        let expected = self.secret.first_letter();
        match word.chars().next() {
            Some(first) if first == expected => {}
            found => return Err(GuessError::WrongFirstLetter { expected, found }),
        }

        if !self.words.is_valid(&word) {
            return Err(GuessError::NotInDictionary(word));
        }

        if self.session.is_terminal() {
            return Err(GuessError::SessionClosed);
        }

        let guess = Guess::evaluate(&self.secret, word);
        let results = guess.pattern().clone();
        self.session.record_guess(guess)?;

        let status = self.session.status();
        log::debug!(
            "attempt {}/{}: {results}",
            self.session.attempts_used(),
            self.session.attempt_limit()
        );

        let persisted = if status.is_terminal() {
            log::info!("session of {} finished: {status:?}", self.session.date());
            // Stats first: their date is the marker that prevents recounting
            let stats_saved = self.record_stats();
            let session_saved = self.save_session();
            stats_saved && session_saved
        } else {
            self.save_session()
        };

        Ok(SubmitOutcome {
            results,
            attempt: self.session.attempts_used(),
            status,
            persisted,
        })
    }

    /// Update and save statistics for the finished session
    ///
    /// Returns whether the statistics are durably up to date.
    fn record_stats(&mut self) -> bool {
        let date = self.session.date();
        if self.stats.is_recorded(date) {
            log::debug!("session of {date} already counted");
            return true;
        }

        self.stats.update(
            self.session.is_won(),
            date,
            self.session.attempts_used(),
        );

        if !self.stats_writable {
            log::warn!("not saving statistics over an unreadable record");
            return false;
        }

        match self.store.save_stats(&self.stats) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not save statistics: {e}");
                false
            }
        }
    }

    fn save_session(&mut self) -> bool {
        match self.store.save_session(&self.session.to_saved()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not save session: {e}");
                false
            }
        }
    }

    /// Snapshot of the whole session for rendering
    #[must_use]
    pub fn view(&self) -> SessionView {
        let status = self.session.status();
        SessionView {
            date: self.session.date(),
            word_length: self.secret.len(),
            first_letter: self.secret.first_letter(),
            attempt_limit: self.session.attempt_limit(),
            guesses: self.session.guesses().to_vec(),
            status,
            keyboard: self.session.keyboard_hints(),
            secret: status
                .is_terminal()
                .then(|| self.secret.text().to_string()),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }
}
