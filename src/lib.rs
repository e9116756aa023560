//! Daily Word
//!
//! A daily word-guessing puzzle: one secret word per calendar date, a bounded
//! number of guesses, and per-letter feedback with duplicate-letter
//! semantics. The first letter of the secret is given away.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_word::core::{LetterStatus, SecretWord, evaluate};
//!
//! let secret = SecretWord::new("LLAMA").unwrap();
//! let pattern = evaluate(&secret, "ALLEY");
//!
//! assert_eq!(pattern.statuses()[1], LetterStatus::Correct);
//! println!("{pattern}");
//! ```

// Core domain types and the guess evaluator
pub mod core;

// Session state machine and statistics
pub mod game;

// Player options
pub mod config;

// Persistence gateways
pub mod storage;

// Word lists and daily selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
