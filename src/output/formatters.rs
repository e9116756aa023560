//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{SessionStatus, SessionView};
use colored::{ColoredString, Colorize};

/// Paint a letter tile according to its status
#[must_use]
pub fn paint_letter(letter: char, status: LetterStatus, high_contrast: bool) -> ColoredString {
    let tile = format!(" {letter} ");
    match (status, high_contrast) {
        (LetterStatus::Correct, false) => tile.black().on_green().bold(),
        (LetterStatus::Correct, true) => tile.black().on_truecolor(245, 121, 58).bold(),
        (LetterStatus::Present, false) => tile.black().on_yellow().bold(),
        (LetterStatus::Present, true) => tile.black().on_truecolor(133, 192, 249).bold(),
        (LetterStatus::Absent, _) => tile.white().on_bright_black(),
    }
}

/// Row shown for the attempt being typed: known first letter, then dots
#[must_use]
pub fn hint_row(first_letter: char, word_length: usize) -> String {
    std::iter::once(first_letter)
        .chain(std::iter::repeat_n('.', word_length.saturating_sub(1)))
        .map(|c| format!(" {c} "))
        .collect()
}

/// Score line such as "3/6" or "X/6"
#[must_use]
pub fn score_label(view: &SessionView) -> String {
    match view.status {
        SessionStatus::Won { attempts } => format!("{attempts}/{}", view.attempt_limit),
        SessionStatus::Lost => format!("X/{}", view.attempt_limit),
        SessionStatus::InProgress => format!("-/{}", view.attempt_limit),
    }
}

/// Spoiler-free summary to share: a title line and one emoji row per guess
#[must_use]
pub fn share_summary(view: &SessionView, high_contrast: bool) -> String {
    let mut summary = format!("Daily Word {} {}", view.date, score_label(view));
    for guess in &view.guesses {
        summary.push('\n');
        summary.push_str(&guess.pattern().to_emoji(high_contrast));
    }
    summary
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::game::Guess;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn view(words: &[&str], status: SessionStatus) -> SessionView {
        let secret = SecretWord::new("ALLEY").unwrap();
        SessionView {
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            word_length: 5,
            first_letter: 'A',
            attempt_limit: 6,
            guesses: words
                .iter()
                .map(|w| Guess::evaluate(&secret, (*w).to_string()))
                .collect(),
            status,
            keyboard: BTreeMap::new(),
            secret: None,
        }
    }

    #[test]
    fn share_summary_won() {
        let summary = share_summary(
            &view(&["ABBEY", "ALLEY"], SessionStatus::Won { attempts: 2 }),
            false,
        );
        assert_eq!(summary, "Daily Word 2025-03-02 2/6\n🟩⬜⬜🟩🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_summary_lost_high_contrast() {
        let summary = share_summary(&view(&["ALLOT"], SessionStatus::Lost), true);
        assert_eq!(summary, "Daily Word 2025-03-02 X/6\n🟧🟧🟧⬜⬜");
    }

    #[test]
    fn hint_row_shows_first_letter() {
        assert_eq!(hint_row('C', 3), " C  .  . ");
        assert_eq!(hint_row('C', 1), " C ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
