//! Core domain types for the daily puzzle
//!
//! This module contains the pure scoring types. Nothing here performs I/O
//! or holds state between calls.

mod pattern;
mod word;

pub use pattern::{LetterResult, LetterStatus, Pattern, evaluate};
pub use word::{LetterComposition, SecretWord, WordError};
