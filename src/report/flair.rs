//! Random one-line openers prepended to chat replies.

use rand::seq::SliceRandom;
use std::path::Path;

const FALLBACK: &str = "carving fresh powder...";

/// Two word lists combined into a random `"{first} {second}..."` opener.
///
/// Built from plain text files (one word per line); a missing or empty list
/// degrades gracefully down to a fixed fallback line.
#[derive(Debug, Clone, Default)]
pub struct Flair {
    first: Vec<String>,
    second: Vec<String>,
}

impl Flair {
    pub fn new(first: Vec<String>, second: Vec<String>) -> Self {
        Self { first, second }
    }

    /// Load both word lists from files. A file that cannot be read just
    /// leaves its list empty.
    pub fn from_word_files(first: &Path, second: &Path) -> Self {
        Self {
            first: read_words(first),
            second: read_words(second),
        }
    }

    pub fn line(&self) -> String {
        let mut rng = rand::thread_rng();
        match (
            self.first.choose(&mut rng),
            self.second.choose(&mut rng),
        ) {
            (Some(a), Some(b)) => format!("{} {}...", a.to_lowercase(), b.to_lowercase()),
            (Some(w), None) | (None, Some(w)) => format!("{}...", w.to_lowercase()),
            (None, None) => FALLBACK.to_string(),
        }
    }
}

fn read_words(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "word list not loaded");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_combines_both_lists() {
        let flair = Flair::new(words(&["Gnarly"]), words(&["Mogul"]));
        assert_eq!(flair.line(), "gnarly mogul...");
    }

    #[test]
    fn test_single_list() {
        let flair = Flair::new(words(&["Gnarly"]), Vec::new());
        assert_eq!(flair.line(), "gnarly...");
    }

    #[test]
    fn test_empty_lists_fall_back() {
        assert_eq!(Flair::default().line(), FALLBACK);
    }

    #[test]
    fn test_from_word_files_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let flair = Flair::from_word_files(&dir.path().join("a.txt"), &dir.path().join("b.txt"));
        assert_eq!(flair.line(), FALLBACK);
    }
}
