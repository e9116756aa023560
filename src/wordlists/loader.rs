//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry is returned in canonical form.

use super::{WordListError, normalize_word};
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use daily_word::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(&content))
}

/// Parse newline-separated words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize_word)
        .collect()
}

/// Convert embedded string slice to canonical words
///
/// # Examples
/// ```
/// use daily_word::wordlists::loader::words_from_slice;
/// use daily_word::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize_word(s))
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["castle", "Élan", "  meadow "];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["CASTLE", "ELAN", "MEADOW"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["castle", "   ", ""];
        assert_eq!(words_from_slice(input), vec!["CASTLE"]);
    }

    #[test]
    fn words_from_lines_skips_comments() {
        let content = "# header\nforest\n\n  # indented comment\nharbor\n";
        assert_eq!(words_from_lines(content), vec!["FOREST", "HARBOR"]);
    }

    #[test]
    fn load_from_file_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pebble\nRocket\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["PEBBLE", "ROCKET"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
