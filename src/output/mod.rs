//! Terminal output formatting
//!
//! Display utilities for the line-mode interface and shareable summaries.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_outcome, print_stats};
pub use formatters::share_summary;
