//! Cumulative statistics across days

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Play record across all sessions
///
/// One session exists per date, so the set of counted dates is what keeps a
/// session from being counted twice, whatever order the dates are played in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub last_played: Option<NaiveDate>,
    pub last_won: Option<NaiveDate>,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Number of attempts → wins with that many attempts
    pub distribution: BTreeMap<usize, u32>,
    /// Dates whose session has been counted
    pub recorded: BTreeSet<NaiveDate>,
}

impl Stats {
    /// Record a finished session
    ///
    /// Must be called at most once per session; see [`Stats::is_recorded`].
    /// A date older than `last_played` is counted but leaves the streak alone.
    pub fn update(&mut self, won: bool, date: NaiveDate, attempts: usize) {
        self.games_played += 1;
        self.recorded.insert(date);
        if won {
            self.games_won += 1;
            *self.distribution.entry(attempts).or_insert(0) += 1;
        }

        if self.last_played.is_some_and(|last| date < last) {
            log::debug!("counted {date} out of order, streak unchanged");
            return;
        }
        self.last_played = Some(date);

        if won {
            let continues = self.last_won.is_some() && self.last_won == date.pred_opt();
            self.current_streak = if continues {
                self.current_streak + 1
            } else {
                1
            };
            self.max_streak = self.max_streak.max(self.current_streak);
            self.last_won = Some(date);
        } else {
            self.current_streak = 0;
        }
    }

    /// Whether the session of `date` was already counted
    #[must_use]
    pub fn is_recorded(&self, date: NaiveDate) -> bool {
        // Records written before the date set existed only know `last_played`
        self.recorded.contains(&date) || self.last_played == Some(date)
    }

    #[must_use]
    pub fn games_lost(&self) -> u32 {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Percentage of games won (0 when nothing was played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) * 100.0 / f64::from(self.games_played)
    }
}
