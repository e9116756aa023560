//! Word of the day selection and dictionary lookups

use super::{ALLOWED, ANSWERS, WordListError, loader, normalize_word};
use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Seed of the answer rotation. Changing it changes every future word.
const ROTATION_SEED: u64 = 0x5EED_D1C7;

/// Provider of secret words and dictionary checks
///
/// `secret_for` must be deterministic: the same date always yields the same
/// word, across restarts.
pub trait WordSource {
    /// Secret word for `date`, in canonical form
    fn secret_for(&self, date: NaiveDate) -> String;

    /// Canonical form of player input
    fn normalize(&self, raw: &str) -> String {
        normalize_word(raw)
    }

    /// Check whether a canonical word is accepted as a guess
    fn is_valid(&self, canonical: &str) -> bool;
}

/// Word source cycling through a shuffled answer list, one word per day
///
/// The answers are shuffled once with a fixed seed, then indexed by the
/// date's day number, so no word repeats before the whole list was used.
#[derive(Debug, Clone)]
pub struct DailyWordSource {
    rotation: Vec<String>,
    dictionary: FxHashSet<String>,
}

impl DailyWordSource {
    /// Build a source from canonical answers and extra accepted words
    ///
    /// The dictionary contains both lists.
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<String>,
        allowed: impl IntoIterator<Item = String>,
    ) -> Result<Self, WordListError> {
        let mut rotation: Vec<String> = answers.into_iter().filter(|w| !w.is_empty()).collect();
        if rotation.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let mut dictionary: FxHashSet<String> = allowed.into_iter().collect();
        dictionary.extend(rotation.iter().cloned());

        // Sorting first makes the rotation independent of input order
        rotation.sort_unstable();
        rotation.dedup();
        rotation.shuffle(&mut StdRng::seed_from_u64(ROTATION_SEED));

        Ok(Self {
            rotation,
            dictionary,
        })
    }

    /// Source over the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    /// Source drawing secrets from a custom answers file
    ///
    /// The embedded lists stay valid guesses.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no words.
    pub fn from_answers_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let answers = loader::load_from_file(path)?;
        let allowed = loader::words_from_slice(ALLOWED)
            .into_iter()
            .chain(loader::words_from_slice(ANSWERS));
        Self::new(answers, allowed)
    }

    /// Number of distinct secret words
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.rotation.len()
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }
}

impl WordSource for DailyWordSource {
    fn secret_for(&self, date: NaiveDate) -> String {
        let day = date.num_days_from_ce().unsigned_abs() as usize;
        self.rotation[day % self.rotation.len()].clone()
    }

    fn is_valid(&self, canonical: &str) -> bool {
        self.dictionary.contains(canonical)
    }
}
