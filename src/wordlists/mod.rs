//! Word lists and the daily word source
//!
//! Embedded lists are compiled into the binary by the build script. All
//! words handled past this module are in canonical form (see
//! [`normalize_word`]).

pub mod loader;
mod normalize;
mod source;

pub use normalize::normalize_word;
pub use source::{DailyWordSource, WordSource};

use std::path::PathBuf;
use thiserror::Error;

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/answers.rs"));
    include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
}

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

/// Errors raised while building a word source
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the answer list contains no words")]
    NoAnswers,
}
