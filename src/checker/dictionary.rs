use crate::error::{Result, SpellcheckError};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The set of words considered correctly spelled. Lookups are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().collect()
    }

    /// Load dictionary for given language, falling back to the embedded
    /// wordlist when nothing is installed
    pub fn load(language: &str) -> Result<Self> {
        match Self::installed_path(language) {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => {
                log::warn!(
                    "No dictionary installed for '{}', using the embedded wordlist",
                    language
                );
                Ok(Self::from_words(Self::basic_wordlist().iter().copied()))
            }
        }
    }

    /// Load dictionary from a word list file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SpellcheckError::ReadDictionary {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse(&content);
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Parse a word list: one word per line, `#` starts a comment line
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Write the words sorted, one per line
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();

        let mut content = words.join("\n");
        content.push('\n');
        fs::write(path, content)?;

        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Iterate over every word, in no particular order
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Where an installed dictionary for `language` lives
    pub fn installed_path(language: &str) -> Option<PathBuf> {
        crate::config::Config::data_dir().map(|dir| dir.join(format!("{}.txt", language)))
    }

    /// Minimal wordlist used until a real dictionary is installed
    pub fn basic_wordlist() -> &'static [&'static str] {
        &[
            "the", "be", "to", "of", "and", "a", "in", "that", "have", "I", "it", "for", "not",
            "on", "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from",
            "they", "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would",
            "there", "their", "what", "so", "up", "out", "if", "about", "who", "get", "which",
            "go", "me", "when", "make", "can", "like", "time", "no", "just", "him", "know",
            "take", "people", "into", "year", "your", "good", "some", "could", "them", "see",
            "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
            "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
            "even", "new", "want", "because", "any", "these", "give", "day", "most", "us", "is",
            "are", "was", "were", "word", "words", "text", "quick", "brown", "fox", "jumps",
            "lazy", "dog", "cat",
        ]
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.txt");

        let dict = Dictionary::from_words(["hello", "world", "test"]);
        dict.save(&dict_path).unwrap();

        let loaded = Dictionary::load_from_path(&dict_path).unwrap();
        assert_eq!(loaded, dict);
        assert!(loaded.contains("hello"));
        assert!(!loaded.contains("notfound"));
        assert_eq!(
            fs::read_to_string(&dict_path).unwrap(),
            "hello\ntest\nworld\n"
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let dict = Dictionary::parse("# header\n\n  apple \nBanana\r\napple\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("apple"));
        assert!(dict.contains("Banana"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dict = Dictionary::from_words(["The"]);
        assert!(dict.contains("The"));
        assert!(!dict.contains("the"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = Dictionary::load_from_path(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, SpellcheckError::ReadDictionary { .. }));
    }

    #[test]
    fn test_extend() {
        let mut dict = Dictionary::new();
        assert!(dict.is_empty());
        dict.extend(["one", "two"]);
        assert!(dict.insert("three"));
        assert!(!dict.insert("one"));
        assert_eq!(dict.len(), 3);
    }
}
