//! Display functions for the line-mode interface

use super::formatters::{create_progress_bar, hint_row, paint_letter, share_summary};
use crate::core::LetterStatus;
use crate::game::{SessionStatus, SessionView, Stats};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print the grid: played rows, the row being typed, then empty rows
pub fn print_board(view: &SessionView, high_contrast: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle of {}  ·  {} letters  ·  attempt {}/{}",
        view.date.to_string().bright_yellow(),
        view.word_length,
        (view.guesses.len() + 1).min(view.attempt_limit),
        view.attempt_limit
    );
    println!("{}", "─".repeat(60).cyan());

    for guess in &view.guesses {
        let row: String = guess
            .pattern()
            .results()
            .iter()
            .map(|r| paint_letter(r.letter, r.status, high_contrast).to_string())
            .collect();
        println!("  {row}");
    }

    let empty_rows = view.remaining();
    for i in 0..empty_rows {
        if i == 0 && view.status == SessionStatus::InProgress {
            println!("  {}", hint_row(view.first_letter, view.word_length).bold());
        } else {
            println!("  {}", " · ".repeat(view.word_length).bright_black());
        }
    }
}

/// Print letters on a keyboard layout, colored by best known status
pub fn print_keyboard(view: &SessionView, high_contrast: bool) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|c| match view.keyboard.get(&c) {
                Some(&status) => paint_letter(c, status, high_contrast).to_string(),
                None => format!(" {c} "),
            })
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }

    let absent = absent_letters(view);
    if !absent.is_empty() {
        println!("\n  Not in the word: {}", absent.bright_black());
    }
}

/// Print the end-of-game banner, the answer and the share summary
pub fn print_outcome(view: &SessionView, high_contrast: bool) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match view.status {
        SessionStatus::Won { attempts } => {
            let cheer = match attempts {
                1 => "🏆 Hole in one!",
                2 => "⭐ Magnificent!",
                3 => "💫 Splendid!",
                4 => "✨ Great!",
                5 => "👍 Nice work!",
                _ => "😅 Phew!",
            };
            println!("  {}", cheer.bright_green().bold());
            println!(
                "  Found in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        SessionStatus::Lost => {
            println!("  {}", "❌ Out of attempts".red().bold());
        }
        SessionStatus::InProgress => {
            println!("  {}", "Puzzle in progress".bright_white());
        }
    }

    if let Some(secret) = &view.secret {
        println!("  The word was {}", secret.bright_yellow().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n{}\n", share_summary(view, high_contrast));
}

/// Print cumulative statistics with the guess distribution
pub fn print_stats(stats: &Stats, attempt_limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Record:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Won:             {} ({})",
        stats.games_won,
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Lost:            {}", stats.games_lost());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Best streak:     {}", stats.max_streak);
    if let Some(date) = stats.last_played {
        println!("   Last played:     {date}");
    }

    let most = stats.distribution.values().copied().max().unwrap_or(0);
    let last_row = attempt_limit.max(stats.distribution.keys().copied().max().unwrap_or(0));

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=last_row {
        let count = stats.distribution.get(&attempts).copied().unwrap_or(0);
        let bar = create_progress_bar(f64::from(count), f64::from(most), 40);
        println!("   {attempts}: {} {count:4}", bar.green());
    }
}

/// Letters known to be absent, for quick reference
#[must_use]
pub fn absent_letters(view: &SessionView) -> String {
    view.keyboard
        .iter()
        .filter(|&(_, &status)| status == LetterStatus::Absent)
        .map(|(&c, _)| c)
        .collect()
}
