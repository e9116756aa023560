//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::SessionManager;
use crate::output::{print_board, print_keyboard, print_outcome, print_stats};
use crate::storage::PersistenceGateway;
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource, P: PersistenceGateway>(
    manager: &mut SessionManager<W, P>,
) -> Result<()> {
    let stdin = io::stdin();
    play_lines(manager, stdin.lock())
}

/// Play the day's puzzle reading one command or guess per line
///
/// Stops when the session ends, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error if reading from `input` or flushing stdout fails.
pub fn play_lines<W: WordSource, P: PersistenceGateway, R: BufRead>(
    manager: &mut SessionManager<W, P>,
    mut input: R,
) -> Result<()> {
    let high_contrast = manager.config().high_contrast;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Daily Word - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let view = manager.view();
    if view.status.is_terminal() {
        println!("Today's puzzle is already finished. Come back tomorrow!");
        print_board(&view, high_contrast);
        print_outcome(&view, high_contrast);
        print_stats(manager.stats(), view.attempt_limit);
        return Ok(());
    }

    println!(
        "Guess the {}-letter word starting with {}.",
        view.word_length,
        view.first_letter.to_string().bright_yellow().bold()
    );
    println!("Commands: 'keys' to show the keyboard, 'quit' to exit\n");

    loop {
        print_board(&manager.view(), high_contrast);

        let Some(line) = read_input(&mut input, "Your guess")? else {
            println!("\n👋 Progress saved. See you later!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => {
                println!("\n👋 Progress saved. See you later!\n");
                return Ok(());
            }
            "keys" => {
                print_keyboard(&manager.view(), high_contrast);
                continue;
            }
            _ => {}
        }

        match manager.submit(&line) {
            Ok(outcome) => {
                if !outcome.persisted {
                    println!("{}", "⚠ progress could not be saved".yellow());
                }
                if outcome.status.is_terminal() {
                    let view = manager.view();
                    print_board(&view, high_contrast);
                    print_outcome(&view, high_contrast);
                    print_stats(manager.stats(), view.attempt_limit);
                    return Ok(());
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
