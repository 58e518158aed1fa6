pub mod classifier;
pub mod dictionary;
pub mod distance;
pub mod suggestions;
pub mod tokenizer;

use crate::error::{Result, SpellcheckError};
use crate::Config;
use classifier::is_misspelled;
use dictionary::Dictionary;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use suggestions::suggest;
use tokenizer::{tokenize, Corpus, Token};

/// A flagged token and the dictionary words within one edit of it
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Misspelling {
    pub token: Token,
    pub suggestions: BTreeSet<String>,
}

impl Misspelling {
    fn for_token(token: &Token, dictionary: &Dictionary) -> Self {
        Self {
            token: token.clone(),
            suggestions: suggest(token, dictionary),
        }
    }
}

/// Report every misspelled token that has at least one suggestion.
///
/// Tokens the dictionary offers nothing for are dropped from the result.
pub fn spellcheck(corpus: &Corpus, dictionary: &Dictionary) -> BTreeSet<Misspelling> {
    corpus
        .iter()
        .filter(|token| is_misspelled(token, dictionary))
        .map(|token| Misspelling::for_token(token, dictionary))
        .filter(|m| !m.suggestions.is_empty())
        .collect()
}

/// Same as [`spellcheck`], with the per-token dictionary scans spread over
/// the rayon thread pool
pub fn spellcheck_parallel(corpus: &Corpus, dictionary: &Dictionary) -> BTreeSet<Misspelling> {
    corpus
        .tokens()
        .par_iter()
        .filter(|token| is_misspelled(token, dictionary))
        .map(|token| Misspelling::for_token(token, dictionary))
        .filter(|m| !m.suggestions.is_empty())
        .collect()
}

/// Outcome of checking one source text
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub source: String,
    pub token_count: usize,
    pub misspellings: BTreeSet<Misspelling>,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.misspellings.len()
    }

    pub fn is_clean(&self) -> bool {
        self.misspellings.is_empty()
    }
}

pub struct SpellChecker {
    dictionary: Dictionary,
    parallel: bool,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        // Load main dictionary
        let mut dictionary = match &config.dictionary {
            Some(path) => Dictionary::load_from_path(path)?,
            None => Dictionary::load(&config.language)?,
        };

        // Merge personal words
        if let Some(personal_dict_path) = &config.personal_dictionary {
            if personal_dict_path.exists() {
                let personal = Dictionary::load_from_path(personal_dict_path)?;
                dictionary.extend(personal.iter().cloned());
            } else {
                log::warn!(
                    "Personal dictionary not found, skipping: {}",
                    personal_dict_path.display()
                );
            }
        }

        Ok(Self::from_dictionary(dictionary).with_parallel(config.parallel))
    }

    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn check_str(&self, source: &str) -> Report {
        let corpus = tokenize(source);

        let misspellings = if self.parallel {
            spellcheck_parallel(&corpus, &self.dictionary)
        } else {
            spellcheck(&corpus, &self.dictionary)
        };

        log::debug!(
            "Checked {} tokens, {} misspelled",
            corpus.len(),
            misspellings.len()
        );

        Report {
            source: source.to_string(),
            token_count: corpus.len(),
            misspellings,
        }
    }

    pub fn check_file(&self, file_path: &Path) -> Result<Report> {
        let content = fs::read_to_string(file_path).map_err(|source| SpellcheckError::ReadInput {
            path: file_path.to_path_buf(),
            source,
        })?;

        log::info!("Checking {}", file_path.display());

        Ok(self.check_str(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::tokenizer::Span;
    use tempfile::tempdir;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_quick_brown_fox() {
        let dict = Dictionary::from_words(["The", "quick", "brown", "fox"]);
        let result = spellcheck(&tokenize("The qick brown fox"), &dict);

        let expected = Misspelling {
            token: Token::new("qick", Span::new(4, 8)),
            suggestions: set(&["quick"]),
        };
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![expected]);
    }

    #[test]
    fn test_capitalized_and_exact_words() {
        let dict = Dictionary::from_words(["met", "bob"]);
        assert!(spellcheck(&tokenize("Alice met bob"), &dict).is_empty());
    }

    #[test]
    fn test_misspelling_without_suggestions_is_dropped() {
        let dict = Dictionary::from_words(["cat"]);
        assert!(spellcheck(&tokenize("zzzzzz"), &dict).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let dict = Dictionary::from_words(["cat"]);
        assert!(spellcheck(&Corpus::new(), &dict).is_empty());
        assert!(spellcheck(&tokenize("cit dgo PARIS"), &Dictionary::new()).is_empty());
    }

    #[test]
    fn test_repeated_misspelling_reported_per_position() {
        let dict = Dictionary::from_words(["cat"]);
        let result = spellcheck(&tokenize("cit cit"), &dict);
        let spans: Vec<Span> = result.iter().map(|m| m.token.span).collect();
        assert_eq!(spans, vec![Span::new(0, 3), Span::new(4, 7)]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dict = Dictionary::from_words(["cat", "cot", "dog", "quick", "brown"]);
        let corpus = tokenize("cit dgo qick brwn Alice zzz cat\nbrown dot");
        assert_eq!(
            spellcheck(&corpus, &dict),
            spellcheck_parallel(&corpus, &dict)
        );
    }

    #[test]
    fn test_checker_report() {
        let checker = SpellChecker::from_dictionary(Dictionary::from_words(["hello", "world"]));
        let report = checker.check_str("helo world");
        assert_eq!(report.token_count, 2);
        assert_eq!(report.error_count(), 1);
        assert!(!report.is_clean());
        assert!(checker.check_str("hello world").is_clean());
    }

    #[test]
    fn test_checker_from_config_merges_personal_words() {
        let dir = tempdir().unwrap();
        let main_dict = dir.path().join("main.txt");
        let personal_dict = dir.path().join("personal.txt");
        fs::write(&main_dict, "hello\nworld\n").unwrap();
        fs::write(&personal_dict, "# mine\nrustacean\n").unwrap();

        let config = Config {
            dictionary: Some(main_dict),
            personal_dictionary: Some(personal_dict),
            ..Default::default()
        };
        let checker = SpellChecker::new(&config).unwrap();

        assert_eq!(checker.dictionary().len(), 3);
        assert!(checker.check_str("hello rustacean world").is_clean());
        assert_eq!(checker.check_str("rustacan").error_count(), 1);
    }

    #[test]
    fn test_check_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "The qick brown fox\n").unwrap();

        let checker =
            SpellChecker::from_dictionary(Dictionary::from_words(["quick", "brown", "fox"]));
        let report = checker.check_file(&input).unwrap();
        assert_eq!(report.error_count(), 1);

        let err = checker.check_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SpellcheckError::ReadInput { .. }));
    }
}
